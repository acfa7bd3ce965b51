//! Failures surfaced by the HTTP handlers and the JSON bodies they map to.

use crate::services::data_sources::LoadError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request parameter is absent.
    #[error("{0}")]
    BadRequest(&'static str),

    /// The primary data file of an endpoint is absent.
    #[error("{0}")]
    NotFound(&'static str),

    /// Anything else; the message is passed through to the client.
    #[error("{0}")]
    Internal(String),
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                warn!("Request rejected: {}", msg);
                json!({ "error": msg })
            }
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                json!({ "error": "Internal server error", "message": msg })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::path::PathBuf;

    async fn body_of(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn client_errors_carry_only_the_message() {
        let err = ApiError::NotFound("Assessment data not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(err).await,
            json!({ "error": "Assessment data not found" })
        );
    }

    #[actix_web::test]
    async fn load_failures_become_internal_errors_with_message() {
        let err = ApiError::from(LoadError::Missing {
            path: PathBuf::from("data/studentRegistration.csv"),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(err).await,
            json!({
                "error": "Internal server error",
                "message": "Data file not found: data/studentRegistration.csv"
            })
        );
    }
}
