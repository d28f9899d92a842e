//! Error types for the HTTP API.
//!
//! Every failure leaves the server as `{ "error": "<message>" }`.
//!
//! ```text
//! StoreError::NotFound            ──► 404
//! StoreError::Core / bad JSON     ──► 400
//! StoreError::Io / Serialization  ──► 500
//! PdfError                        ──► 500
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use coursedesk_store::StoreError;

use crate::services::pdf::PdfError;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        ApiError::NotFound(format!("{} not found: {}", entity, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::Core(_) => ApiError::BadRequest(err.to_string()),
            StoreError::Io(_) | StoreError::Serialization(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PdfError> for ApiError {
    fn from(err: PdfError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// `Json` whose rejections are reported as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

impl<T: Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursedesk_core::{CoreError, ValidationError};

    #[test]
    fn test_store_error_mapping() {
        let missing: ApiError = StoreError::not_found("Quotation", "q-1").into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Quotation not found: q-1");

        let invalid: ApiError = StoreError::Core(CoreError::Validation(ValidationError::Required {
            field: "clientName".to_string(),
        }))
        .into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let io: ApiError = StoreError::Io(std::io::Error::other("disk full")).into();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
