//! Error types for the contact form.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::types::ContactStatus;

/// Failure to deliver a contact message.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// A required EmailJS identifier is not configured.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("delivery service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("delivery cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Http(err.to_string())
    }
}

/// A form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from the contact form controller.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("a submission is already being sent")]
    AlreadySending,
    #[error("invalid status transition: {0:?} -> {1:?}")]
    InvalidTransition(ContactStatus, ContactStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_display() {
        assert_eq!(
            DeliveryError::MissingConfig("service_id").to_string(),
            "missing configuration: service_id"
        );
        assert_eq!(
            DeliveryError::Status {
                status: 400,
                body: "The Public Key is invalid".to_string()
            }
            .to_string(),
            "delivery service returned status 400: The Public Key is invalid"
        );
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = ValidationError {
            fields: vec![Field::Name, Field::Email],
        };
        assert_eq!(err.to_string(), "invalid fields: name, email");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = ContactError::InvalidTransition(ContactStatus::Idle, ContactStatus::Success);
        assert_eq!(err.to_string(), "invalid status transition: Idle -> Success");
    }
}
