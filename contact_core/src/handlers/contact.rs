//! Contact form endpoint

use crate::{extractors::ContactJson, models::FormSubmission, AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::info;

pub fn create_contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(handle_contact))
}

/// 200 when the email went out, 400 for validation or delivery failures.
/// Unparseable bodies are rejected with a 500 by [`ContactJson`].
pub async fn handle_contact(
    State(state): State<AppState>,
    ContactJson(submission): ContactJson<FormSubmission>,
) -> impl IntoResponse {
    info!("POST /api/contact");

    let response = state.provider.submit(submission).await;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}
