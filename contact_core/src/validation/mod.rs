//! Input validation and normalization for contact form submissions

pub mod rules;
pub mod sanitize;

pub use rules::*;
pub use sanitize::sanitize;

use crate::models::FormSubmission;

/// Checks name, email and message in that order and returns the first
/// failure's user-facing message.
pub fn validate_submission(submission: &FormSubmission) -> Option<String> {
    validate_name(&submission.name)
        .and_then(|_| validate_email(&submission.email))
        .and_then(|_| validate_message(&submission.message))
        .err()
        .map(|err| err.code.to_string())
}
