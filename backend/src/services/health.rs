use crate::services::data_sources::TableSource;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use serde_json::json;

pub fn configure_routes() -> Scope {
    scope("/health").route("", get().to(process))
}

async fn process(source: web::Data<dyn TableSource>) -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "mode": source.mode() }))
}
