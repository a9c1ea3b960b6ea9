//! Validation rules for contact form fields

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Valid email address is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if trimmed_len(name) < NAME_MIN_CHARS {
        return Err(ValidationError::new(NAME_TOO_SHORT));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new(EMAIL_INVALID));
    }

    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if trimmed_len(message) < MESSAGE_MIN_CHARS {
        return Err(ValidationError::new(MESSAGE_TOO_SHORT));
    }

    Ok(())
}
