use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error envelope: short machine-oriented label plus optional detail.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

/// Taxonomy mapping: validation/parse/conflict are the caller's fault,
/// not-found is 404, everything else is internal.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::Validation { .. } => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::Parse { .. } => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Unparseable Date", Some(e.to_string()))
            }
            ServiceError::NotFound(_) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            ServiceError::Conflict(msg) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Conflict", Some(msg.clone()))
            }
            ServiceError::Db(_) | ServiceError::Model(_) => {
                error!(err = %e, "internal service error");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", Some(e.to_string()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
