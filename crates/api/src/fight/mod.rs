use actix_web::{web, HttpResponse};
use war_torn_faith_api_structs::get_fights::APIResponse;

async fn get_fights_controller() -> HttpResponse {
    HttpResponse::NotImplemented().json(APIResponse {
        message: "Not implemented".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/fights", web::get().to(get_fights_controller));
}
