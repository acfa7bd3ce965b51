//! # Lecturer Service Module
//!
//! Serves the per-module dashboard under `/lecturer`.
//!
//! ## Sub-modules:
//! - `module`: filters assessment and VLE rows to one module and rolls the VLE clicks up
//!   into a daily trend.

mod module;

use crate::services::preflight;
use actix_web::http::Method;
use actix_web::web::{get, method, scope};
use actix_web::Scope;

const API_PATH: &str = "/lecturer";

/// Configures and returns the Actix `Scope` for the lecturer routes.
///
/// # Registered Routes:
///
/// *   **`GET /lecturer/{module_code}`**: `200` with the `ModuleSummary` JSON, `404`
///     when `studentAssessment.csv` is absent, `500` for any other failure.
/// *   **`GET /lecturer?moduleCode=...`**: same, with the code taken from the query
///     string; `400` when it is absent.
/// *   **`OPTIONS`** on both paths: CORS preflight.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(module::process_query))
        .route("/", get().to(module::process_query))
        .route("/{module_code}", get().to(module::process))
        .route("", method(Method::OPTIONS).to(preflight))
        .route("/", method(Method::OPTIONS).to(preflight))
        .route("/{module_code}", method(Method::OPTIONS).to(preflight))
}
