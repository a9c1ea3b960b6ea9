//! JSON body extractor whose rejection is a contact form response

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::FormResponse;

pub const RETRY_MESSAGE: &str = "An error occurred processing your request. Please try again.";

/// Parses the request body as JSON without looking at `Content-Type`. Any
/// failure becomes a 500 carrying a `FormResponse`.
pub struct ContactJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ContactJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ContactJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ContactJsonRejection::BodyRead(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ContactJson)
            .map_err(ContactJsonRejection::InvalidJson)
    }
}

#[derive(Debug, Error)]
pub enum ContactJsonRejection {
    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for ContactJsonRejection {
    fn into_response(self) -> Response {
        tracing::error!("[Contact API] Error processing request: {}", self);

        let body = Json(FormResponse::failure(RETRY_MESSAGE, self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
