use crate::error::WarTornError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use war_torn_faith_api_structs::create_account::{APIResponse, RequestBody};
use war_torn_faith_domain::Account;
use war_torn_faith_infra::WarTornContext;

pub async fn create_account_controller(
    ctx: web::Data<WarTornContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, WarTornError> {
    let body = body.0;
    let usecase = CreateAccountUseCase {
        email: body.email,
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Created().json(APIResponse::new(account)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => WarTornError::InternalError,
        })
}

#[derive(Debug)]
struct CreateAccountUseCase {
    email: String,
    username: String,
    password: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAccountUseCase {
    type Response = Account;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WarTornContext) -> Result<Self::Response, Self::Errors> {
        let mut account = Account::new();
        account.email = self.email.clone();
        account.username = self.username.clone();
        account.set_password(&self.password);

        match ctx.repos.accounts.save(&account).await {
            Ok(_) => Ok(account),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
