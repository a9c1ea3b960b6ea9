//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{extractors::RETRY_MESSAGE, models::FormResponse};

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised while starting or running the server itself. Contact form
/// failures never surface as `AppError`; they are shaped into a
/// [`FormResponse`] by the provider.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Unhandled application error: {}", self);

        let body = Json(FormResponse::failure(RETRY_MESSAGE, self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Why an outbound email could not be delivered. The `Display` output is the
/// operator-facing diagnostic placed in `FormResponse::error`.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("{0} not configured")]
    MissingApiKey(String),

    #[error("Email request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl DeliveryError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DeliveryError::Rejected { status, .. } => Some(*status),
            DeliveryError::Transport(err) => err.status().map(|s| s.as_u16()),
            DeliveryError::MissingApiKey(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_diagnostic() {
        let err = DeliveryError::MissingApiKey("RESEND_API_KEY".to_string());
        assert_eq!(err.to_string(), "RESEND_API_KEY not configured");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_rejected_diagnostic_is_upstream_message() {
        let err = DeliveryError::Rejected {
            status: 422,
            message: "Invalid `from` field".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid `from` field");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_app_error_is_500() {
        let err = AppError::HttpClient("builder failed".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
