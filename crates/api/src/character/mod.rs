use actix_web::{web, HttpResponse};
use war_torn_faith_api_structs::get_characters::APIResponse;

async fn get_characters_controller() -> HttpResponse {
    HttpResponse::NotImplemented().json(APIResponse {
        message: "Not implemented".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/characters", web::get().to(get_characters_controller));
}
