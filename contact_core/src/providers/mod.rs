//! Contact form providers: sanitize, validate, deliver, shape the response

pub mod resend;

pub use resend::{ResendMailer, SendEmailRequest};

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    config::{EmailConfig, ProviderKind},
    error::{DeliveryError, Result},
    models::{FormResponse, FormSubmission},
    validation::{sanitize, validate_submission},
};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// The email backends a submission can be delivered through.
#[derive(Debug, Clone)]
pub enum Mailer {
    Resend(ResendMailer),
}

impl Mailer {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Mailer::Resend(_) => ProviderKind::Resend,
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Mailer::Resend(mailer) => mailer.recipient(),
        }
    }

    async fn deliver(&self, submission: &FormSubmission) -> std::result::Result<(), DeliveryError> {
        match self {
            Mailer::Resend(mailer) => mailer.deliver(submission).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormProvider {
    mailer: Mailer,
    fallback_contact: String,
}

impl FormProvider {
    pub fn new(mailer: Mailer, fallback_contact: impl Into<String>) -> Self {
        Self {
            mailer,
            fallback_contact: fallback_contact.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let mailer = match config.provider {
            ProviderKind::Resend => Mailer::Resend(ResendMailer::from_config(config)?),
        };

        Ok(Self::new(mailer, &config.fallback_contact))
    }

    pub fn kind(&self) -> ProviderKind {
        self.mailer.kind()
    }

    pub fn failure_message(&self) -> String {
        format!(
            "Sorry, there was an error submitting your message. Please try again or email us directly at {}.",
            self.fallback_contact
        )
    }

    /// Never fails: every outcome, including delivery errors, is shaped into a
    /// `FormResponse`. At most one outbound request is made.
    pub async fn submit(&self, raw: FormSubmission) -> FormResponse {
        let submission_id = Uuid::new_v4();
        let span = info_span!(
            "contact_submission",
            submission_id = %submission_id,
            provider = %self.kind(),
        );

        self.process(raw).instrument(span).await
    }

    async fn process(&self, raw: FormSubmission) -> FormResponse {
        let submission = sanitize(&raw);

        if let Some(reason) = validate_submission(&submission) {
            warn!(reason = %reason, "Contact submission rejected");
            return FormResponse::invalid(reason);
        }

        info!(
            has_company = submission.company.is_some(),
            message_chars = submission.message.chars().count(),
            "Contact submission accepted, delivering to {}",
            self.mailer.recipient()
        );

        match self.mailer.deliver(&submission).await {
            Ok(()) => FormResponse::success(SUCCESS_MESSAGE),
            Err(err) => {
                error!(
                    upstream_status = ?err.status(),
                    "Contact submission delivery failed: {}",
                    err
                );
                FormResponse::failure(self.failure_message(), err.to_string())
            }
        }
    }
}
