pub mod health;
pub mod login;
pub mod pickup;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/login").configure(login::init))
        .service(web::scope("/pickup").configure(pickup::init));
}
