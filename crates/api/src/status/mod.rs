use actix_web::{web, HttpResponse};
use war_torn_faith_api_structs::get_service_health::APIResponse;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "War Torn Faith API is up\r\n".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
