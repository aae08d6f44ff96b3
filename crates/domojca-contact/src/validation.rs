//! Field checks run before anything is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Field, ValidationError};
use crate::types::ContactSubmission;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() > 1
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn is_valid_message(message: &str) -> bool {
    message.trim().chars().count() > 5
}

/// Check all three fields and return the trimmed submission.
pub fn validate(
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactSubmission, ValidationError> {
    let mut fields = Vec::new();
    if !is_valid_name(name) {
        fields.push(Field::Name);
    }
    if !is_valid_email(email) {
        fields.push(Field::Email);
    }
    if !is_valid_message(message) {
        fields.push(Field::Message);
    }

    if !fields.is_empty() {
        return Err(ValidationError { fields });
    }

    Ok(ContactSubmission {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
    })
}
