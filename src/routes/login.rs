use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::credentials::Role;
use crate::models::field::LoginField;
use crate::state::AppState;

#[derive(Deserialize)]
struct TabRequest {
    tab: Role,
}

#[derive(Deserialize)]
struct ValueRequest {
    #[serde(default)]
    value: String,
}

#[derive(Deserialize)]
struct LoginRequest {
    identifier: String,
    secret: String,
}

#[derive(Deserialize)]
struct RememberRequest {
    checked: bool,
}

#[post("/sessions")]
async fn open(state: web::Data<AppState>) -> HttpResponse {
    let (id, page) = state.open_login().await;
    HttpResponse::Created().json(json!({ "sessionId": id, "tab": page.tab() }))
}

#[get("/{id}")]
async fn view(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page.view()))
}

#[put("/{id}/tab")]
async fn switch_tab(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<TabRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    page.switch_tab(body.tab);
    Ok(HttpResponse::Ok().json(page.view()))
}

#[post("/{id}/fields/{field}/blur")]
async fn blur(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<ValueRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, field) = path.into_inner();
    let field: LoginField = field.parse()?;
    let page = state.login(id).await?;
    Ok(HttpResponse::Ok().json(page.validate_field(field, &body.value)))
}

#[post("/{id}/submit")]
async fn submit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    let success = page.submit(&body.identifier, &body.secret)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "role": success.role,
        "message": success.notification.message,
        "redirectTo": success.redirect.location(),
        "redirectAfterMs": u64::try_from(state.config.timings.login_redirect_delay.as_millis())
            .unwrap_or(u64::MAX),
    })))
}

#[post("/{id}/demo")]
async fn demo(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    let credential = page.fill_demo_credentials();
    Ok(HttpResponse::Ok().json(json!({
        "tab": page.tab(),
        "identifier": credential.identifier,
        "secret": credential.secret,
    })))
}

#[put("/{id}/remember")]
async fn remember(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<RememberRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    page.set_remember(body.checked);
    Ok(HttpResponse::Ok().json(page.view()))
}

#[delete("/{id}/notification")]
async fn dismiss(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.login(path.into_inner()).await?;
    page.dismiss_notification();
    Ok(HttpResponse::Ok().json(page.view()))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(open)
        .service(view)
        .service(switch_tab)
        .service(blur)
        .service(submit)
        .service(demo)
        .service(remember)
        .service(dismiss);
}
