pub mod settings;

pub use settings::{AppConfig, CorsConfig, EmailConfig, LoggingConfig, ProviderKind, ServerConfig};
