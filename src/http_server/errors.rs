//! # HTTP Errors
//!
//! The fixed error taxonomy of the API and its JSON envelope:
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::engine::EngineError;

/// API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotFound => ApiError::NotFound,
            EngineError::Unprocessable(reason) => {
                debug!(%reason, "Request unprocessable");
                ApiError::Unprocessable
            }
            EngineError::Store(e) => {
                error!(error = %e, "Store failure");
                ApiError::Internal
            }
            EngineError::Internal(e) => {
                error!(error = %e, "Engine failure");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    /// Unparseable bodies are bad requests; well-formed JSON of the wrong
    /// shape is unprocessable.
    fn from(rejection: JsonRejection) -> Self {
        debug!(rejection = %rejection.body_text(), "Request body rejected");
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
            _ => ApiError::BadRequest,
        }
    }
}

impl From<PathRejection> for ApiError {
    /// Path ids are integers; anything else does not name a resource
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Unprocessable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_envelope_fields() {
        let body = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
        );

        let body = serde_json::to_value(ErrorResponse::from(ApiError::Unprocessable)).unwrap();
        assert_eq!(body["message"], "unprocessable");
        assert_eq!(body["error"], 422);
    }

    #[test]
    fn test_engine_error_mapping() {
        assert_eq!(ApiError::from(EngineError::NotFound), ApiError::NotFound);
        assert_eq!(
            ApiError::from(EngineError::unprocessable("x")),
            ApiError::Unprocessable
        );
        assert_eq!(
            ApiError::from(EngineError::Store(StoreError::Closed)),
            ApiError::Internal
        );
    }
}
