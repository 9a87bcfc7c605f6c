use actix_web::HttpResponse;
use war_torn_faith_api_structs::get_accounts::APIResponse;

// TODO: listing accounts is not implemented yet
pub async fn get_accounts_controller() -> HttpResponse {
    HttpResponse::NotImplemented().json(APIResponse {
        message: "Not implemented".into(),
    })
}
