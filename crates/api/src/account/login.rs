use crate::error::WarTornError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use war_torn_faith_api_structs::login::{APIResponse, RequestBody};
use war_torn_faith_domain::Account;
use war_torn_faith_infra::WarTornContext;

pub async fn login_controller(
    ctx: web::Data<WarTornContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, WarTornError> {
    let body = body.0;
    let usecase = LoginUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(|e| match e {
            // Unknown email and wrong password map to the same response
            // so the caller cannot tell which one it was
            UseCaseErrors::InvalidCredentials => {
                WarTornError::Unauthorized("Invalid email or password".into())
            }
        })
}

#[derive(Debug)]
struct LoginUseCase {
    email: String,
    password: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidCredentials,
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = Account;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WarTornContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .accounts
            .find_by_credentials(&self.email, &self.password)
            .await
            .ok_or(UseCaseErrors::InvalidCredentials)
    }
}
