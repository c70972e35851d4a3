use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::state::AppState;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Approximate number of open page sessions
#[get("/sessions")]
async fn sessions(state: web::Data<AppState>) -> impl Responder {
    let (login, pickup) = state.open_sessions();
    HttpResponse::Ok().json(json!({ "login": login, "pickup": pickup }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(sessions);
}
