//! API error handling
//!
//! Lookup failures never reach this type - they render as sentinel views.
//! What remains is the genuinely internal case: a template that fails to
//! render.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tera::Error> for ApiError {
    fn from(err: tera::Error) -> Self {
        Self::Internal(format!("Template rendering failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(message) = self;
        tracing::error!(error = %message, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred",
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_message() {
        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Internal error: boom");
    }

    #[test]
    fn into_response_is_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn tera_error_converts() {
        let tera_err = tera::Error::msg("missing template");
        let err: ApiError = tera_err.into();
        assert!(err.to_string().contains("Template rendering failed"));
    }
}
