use super::memory::StorageError;
use super::protocol::ErrorResponse;
use super::types::ValidationError;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Character with id {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(#[from] StorageError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::InvalidBody(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::NotFound(id) => tracing::debug!("Character not found: {}", id),
            ApiError::Internal(e) => tracing::error!("Request failed: {:#}", e),
            _ => tracing::warn!("Request rejected ({}): {}", status, self),
        }

        let fields = match &self {
            ApiError::Validation(e) => e.fields(),
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            detail: self.to_string(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}
