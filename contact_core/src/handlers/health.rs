//! Health check handler

use crate::AppState;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};

pub fn create_health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handle_health))
}

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "provider": state.provider.kind(),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_provider() {
        let app = create_health_routes().with_state(AppState::from_config(&crate::AppConfig::default()).unwrap());

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["provider"], "resend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
