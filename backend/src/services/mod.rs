//! HTTP services exposed by the analytics backend.
//!
//! - `admin`: institution-wide overview (`GET /admin`).
//! - `lecturer`: per-module activity (`GET /lecturer/{moduleCode}`).
//! - `health`: liveness probe (`GET /health`).
//! - `data_sources`: where the CSV tables come from; not routed, injected as app data.

pub mod admin;
pub mod data_sources;
pub mod health;
pub mod lecturer;


use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};

/// Registers every routed service on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin::configure_routes())
        .service(lecturer::configure_routes())
        .service(health::configure_routes());
}

/// Permissive cross-origin headers attached to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Answers a CORS preflight; the headers come from [`cors_headers`].
pub(crate) async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
