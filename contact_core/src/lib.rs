//! Core library for the contact form service: configuration, validation,
//! email rendering, provider delivery and the HTTP routes that expose them.

pub mod config;
pub mod email;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod validation;

pub use crate::config::{AppConfig, EmailConfig, ProviderKind};
pub use email::EmailTemplate;
pub use error::{AppError, DeliveryError, Result};
pub use extractors::ContactJson;
pub use handlers::routes::create_routes;
pub use models::{FormResponse, FormSubmission};
pub use providers::{FormProvider, Mailer, ResendMailer};
pub use validation::{sanitize, validate_submission};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub provider: FormProvider,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(FormProvider::from_config(&config.email)?))
    }

    pub fn new(provider: FormProvider) -> Self {
        Self {
            app_name: "Contact Form Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            provider,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors));

    if config.logging.enabled {
        router = middleware::logging::with_request_logging(router);
    }

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
