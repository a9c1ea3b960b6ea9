use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which email API the contact form is delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Resend,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Resend => write!(f, "resend"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub provider: ProviderKind,
    pub api_url: String,
    /// Name of the environment variable holding the API key. The key itself is
    /// read on every send and never stored in the config.
    pub api_key_env: String,
    pub from: String,
    pub to: String,
    pub fallback_contact: String,
    pub site_name: String,
    pub timezone: String,
    pub timezone_label: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Resend,
            api_url: "https://api.resend.com/emails".to_string(),
            api_key_env: "RESEND_API_KEY".to_string(),
            from: "RBK Strategies Contact Form <inbound@contact.rbkstrategies.com>".to_string(),
            to: "contact@rbkstrategies.com".to_string(),
            fallback_contact: "contact@rbkstrategies.com".to_string(),
            site_name: "RBK Strategies Website".to_string(),
            timezone: "America/New_York".to_string(),
            timezone_label: "ET".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "https://rbkstrategies.com".to_string(),
                "https://www.rbkstrategies.com".to_string(),
                "http://localhost:4321".to_string(),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new("config.toml");
        Self::build(path.exists().then_some(path))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()))
    }

    fn build(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.email.api_url.is_empty() {
            return Err(ConfigError::Message(
                "Email API URL cannot be empty".to_string(),
            ));
        }

        if self.email.api_key_env.is_empty() {
            return Err(ConfigError::Message(
                "Email API key variable name cannot be empty".to_string(),
            ));
        }

        if self.email.from.is_empty() || self.email.to.is_empty() {
            return Err(ConfigError::Message(
                "Email sender and recipient must be set".to_string(),
            ));
        }

        if self.email.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(ConfigError::Message(format!(
                "Unknown time zone: {}",
                self.email.timezone
            )));
        }

        if std::env::var(&self.email.api_key_env).map_or(true, |v| v.is_empty()) {
            tracing::warn!(
                "{} is not set - contact form submissions will fail until it is configured",
                self.email.api_key_env
            );
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
