mod create_account;
mod get_accounts;
mod login;

use actix_web::web;
use create_account::create_account_controller;
use get_accounts::get_accounts_controller;
use login::login_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/accounts", web::post().to(create_account_controller));
    cfg.route("/accounts", web::get().to(get_accounts_controller));
    cfg.route("/accounts/login", web::post().to(login_controller));
}
