use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::fee::FeeSelection;
use crate::models::field::PickupField;
use crate::state::AppState;

#[derive(Deserialize)]
struct InputRequest {
    #[serde(default)]
    value: String,
}

#[derive(Deserialize)]
struct BlurRequest {
    value: Option<String>,
}

#[derive(Deserialize)]
struct DateRequest {
    date: String,
}

#[derive(Deserialize)]
struct ItemsRequest {
    #[serde(default)]
    items: Vec<String>,
}

#[post("/sessions")]
async fn open(state: web::Data<AppState>) -> HttpResponse {
    let (id, page) = state.open_pickup().await;
    HttpResponse::Created().json(json!({ "sessionId": id, "minDate": page.view().min_date }))
}

#[get("/{id}")]
async fn view(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page.view()))
}

#[post("/{id}/fields/{field}/input")]
async fn input(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<InputRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, field) = path.into_inner();
    let field: PickupField = field.parse()?;
    let page = state.pickup(id).await?;
    let value = page.input(field, &body.value)?;
    Ok(HttpResponse::Ok().json(json!({ "field": field, "value": value })))
}

#[post("/{id}/fields/{field}/blur")]
async fn blur(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<BlurRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, field) = path.into_inner();
    let field: PickupField = field.parse()?;
    let page = state.pickup(id).await?;
    Ok(HttpResponse::Ok().json(page.blur(field, body.value.as_deref())))
}

#[put("/{id}/date")]
async fn select_date(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<DateRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page.select_date(&body.date)?))
}

#[put("/{id}/services")]
async fn select_services(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<FeeSelection>,
) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    let quote = page.select_services(body.into_inner());
    Ok(HttpResponse::Ok().json(json!({
        "fee": quote,
        "notification": page.notification(),
    })))
}

#[put("/{id}/items")]
async fn select_items(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ItemsRequest>,
) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    page.select_items(&body.items);
    Ok(HttpResponse::Ok().json(json!({ "items": page.form().items })))
}

#[post("/{id}/submit")]
async fn submit(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    // the client polls the page view for the settled receipt
    let _pending = page.submit()?;
    Ok(HttpResponse::Accepted().json(json!({
        "success": true,
        "submission": page.submission_state(),
    })))
}

#[delete("/{id}/notification")]
async fn dismiss(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let page = state.pickup(path.into_inner()).await?;
    page.dismiss_notification();
    Ok(HttpResponse::Ok().json(page.view()))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(open)
        .service(view)
        .service(input)
        .service(blur)
        .service(select_date)
        .service(select_services)
        .service(select_items)
        .service(submit)
        .service(dismiss);
}
