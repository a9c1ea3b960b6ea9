//! Delivery through the Resend transactional email API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::EmailConfig,
    email::EmailTemplate,
    error::{AppError, DeliveryError, Result},
    models::FormSubmission,
};

pub const DEFAULT_SEND_FAILURE: &str = "Email sending failed";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SendReceipt {
    id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    api_url: String,
    api_key_env: String,
    from: String,
    to: String,
    template: EmailTemplate,
}

impl ResendMailer {
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let timezone = config.timezone.parse::<chrono_tz::Tz>().map_err(|e| {
            AppError::Other(anyhow::anyhow!("Unknown time zone {}: {}", config.timezone, e))
        })?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key_env: config.api_key_env.clone(),
            from: config.from.clone(),
            to: config.to.clone(),
            template: EmailTemplate::new(&config.site_name, timezone, &config.timezone_label),
        })
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }

    /// Read on every send. A missing or blank key fails the delivery, never
    /// startup.
    fn api_key(&self) -> std::result::Result<String, DeliveryError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(DeliveryError::MissingApiKey(self.api_key_env.clone())),
        }
    }

    pub fn build_request(&self, submission: &FormSubmission) -> SendEmailRequest {
        SendEmailRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: format!("New Contact Form Submission from {}", submission.name),
            html: self.template.format(submission),
            reply_to: submission.email.clone(),
        }
    }

    pub async fn deliver(&self, submission: &FormSubmission) -> std::result::Result<(), DeliveryError> {
        let api_key = self.api_key()?;
        let payload = self.build_request(submission);

        debug!("Sending contact email via {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_SEND_FAILURE.to_string());

            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let email_id = response.json::<SendReceipt>().await.ok().and_then(|r| r.id);
        info!(email_id = ?email_id, "Email sent successfully to {}", self.to);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> ResendMailer {
        ResendMailer::from_config(&EmailConfig::default()).unwrap()
    }

    #[test]
    fn test_build_request() {
        let submission = FormSubmission::new(
            "Ada",
            "ada@example.com",
            None,
            "Please call me back.",
        );

        let request = mailer().build_request(&submission);

        assert_eq!(request.from, "RBK Strategies Contact Form <inbound@contact.rbkstrategies.com>");
        assert_eq!(request.to, "contact@rbkstrategies.com");
        assert_eq!(request.subject, "New Contact Form Submission from Ada");
        assert_eq!(request.reply_to, "ada@example.com");
        assert!(request.html.contains("Please call me back."));
    }

    #[test]
    fn test_request_uses_camel_case_reply_to() {
        let submission = FormSubmission::new("Ada", "ada@example.com", None, "Please call me back.");
        let value = serde_json::to_value(mailer().build_request(&submission)).unwrap();

        assert_eq!(value["replyTo"], "ada@example.com");
        assert!(value.get("reply_to").is_none());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = EmailConfig::default();
        config.api_key_env = "CONTACT_CORE_TEST_BLANK_KEY".to_string();
        std::env::set_var("CONTACT_CORE_TEST_BLANK_KEY", "   ");

        let mailer = ResendMailer::from_config(&config).unwrap();
        let err = mailer.api_key().unwrap_err();

        assert_eq!(err.to_string(), "CONTACT_CORE_TEST_BLANK_KEY not configured");
    }

    #[test]
    fn test_unknown_time_zone_is_rejected() {
        let mut config = EmailConfig::default();
        config.timezone = "Not/A_Zone".to_string();
        assert!(ResendMailer::from_config(&config).is_err());
    }
}
