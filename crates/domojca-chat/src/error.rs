//! Error types for the chat assistant.

use std::time::Duration;

use uuid::Uuid;

/// Failure of a single call to the messaging backend.
///
/// Each variant is distinguishable so that callers decide the visible
/// fallback, see [`crate::messaging::FallbackMessenger`].
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("backend returned an empty reply")]
    EmptyReply,
    #[error("no reply within {0:?}")]
    Timeout(Duration),
    #[error("call cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for MessagingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MessagingError::Http(format!("request timed out: {}", err))
        } else {
            MessagingError::Http(err.to_string())
        }
    }
}

/// Errors from the chat session registry.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_error_display() {
        assert_eq!(
            MessagingError::MissingApiKey.to_string(),
            "no API key configured"
        );
        assert_eq!(
            MessagingError::Status {
                status: 429,
                body: "quota".to_string()
            }
            .to_string(),
            "backend returned status 429: quota"
        );
        assert_eq!(
            MessagingError::EmptyReply.to_string(),
            "backend returned an empty reply"
        );
        assert_eq!(
            MessagingError::Timeout(Duration::from_secs(30)).to_string(),
            "no reply within 30s"
        );
        assert_eq!(MessagingError::Cancelled.to_string(), "call cancelled");
    }

    #[test]
    fn test_chat_error_session_not_found_preserves_uuid() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let err = ChatError::SessionNotFound(id);
        assert_eq!(
            err.to_string(),
            "session not found: 550e8400-e29b-41d4-a716-446655440000"
        );
    }
}
