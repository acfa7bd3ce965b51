//! # Admin Service Module
//!
//! Serves the institution-wide dashboard under `/admin`.
//!
//! ## Sub-modules:
//! - `overview`: aggregates the student-info, registration and assessment tables into
//!   outcome, enrolment, gender and age-band distributions plus a sample of students.

mod overview;

use crate::services::preflight;
use actix_web::http::Method;
use actix_web::web::{get, method, scope};
use actix_web::Scope;

const API_PATH: &str = "/admin";

/// Configures and returns the Actix `Scope` for the admin routes.
///
/// # Registered Routes:
///
/// *   **`GET /admin`**: `200` with the `AdminSummary` JSON, `404` when
///     `studentInfo.csv` is absent, `500` for any other failure.
/// *   **`OPTIONS /admin`**: CORS preflight.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(overview::process))
        .route("", method(Method::OPTIONS).to(preflight))
}
