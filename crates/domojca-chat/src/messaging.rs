//! The messaging backend contract and the fallback adapter.

use async_trait::async_trait;
use domojca_core::translations;
use tracing::warn;

use crate::error::MessagingError;
use crate::types::MessagingRequest;

/// A backend that turns a conversation plus a new message into a reply.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    async fn send(&self, request: &MessagingRequest) -> Result<String, MessagingError>;
}

/// Wraps a client so that every failure becomes a localized apology.
///
/// The visitor always sees an answer; the underlying error is logged.
pub struct FallbackMessenger<C> {
    inner: C,
}

impl<C> FallbackMessenger<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Apology text for a failed call.
pub fn fallback_text(err: &MessagingError, request: &MessagingRequest) -> &'static str {
    let chat = &translations(request.language).chat;
    match err {
        MessagingError::MissingApiKey => chat.fallback_no_key,
        MessagingError::EmptyReply => chat.fallback_unclear,
        _ => chat.fallback_error,
    }
}

#[async_trait]
impl<C: MessagingClient> MessagingClient for FallbackMessenger<C> {
    async fn send(&self, request: &MessagingRequest) -> Result<String, MessagingError> {
        match self.inner.send(request).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                warn!(language = %request.language, error = %err, "Assistant call failed, using fallback reply");
                Ok(fallback_text(&err, request).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domojca_core::Language;

    struct Failing(fn() -> MessagingError);

    #[async_trait]
    impl MessagingClient for Failing {
        async fn send(&self, _request: &MessagingRequest) -> Result<String, MessagingError> {
            Err((self.0)())
        }
    }

    struct Echo;

    #[async_trait]
    impl MessagingClient for Echo {
        async fn send(&self, request: &MessagingRequest) -> Result<String, MessagingError> {
            Ok(request.message.clone())
        }
    }

    fn request(language: Language) -> MessagingRequest {
        MessagingRequest {
            history: vec![],
            message: "Hello".to_string(),
            language,
        }
    }

    #[tokio::test]
    async fn test_fallback_passes_success_through() {
        let client = FallbackMessenger::new(Echo);
        assert_eq!(client.send(&request(Language::En)).await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn test_fallback_missing_key() {
        let client = FallbackMessenger::new(Failing(|| MessagingError::MissingApiKey));
        let reply = client.send(&request(Language::Pl)).await.unwrap();
        assert_eq!(reply, translations(Language::Pl).chat.fallback_no_key);
        assert!(reply.contains("brak klucza API"));
    }

    #[tokio::test]
    async fn test_fallback_empty_reply() {
        let client = FallbackMessenger::new(Failing(|| MessagingError::EmptyReply));
        let reply = client.send(&request(Language::Pl)).await.unwrap();
        assert_eq!(reply, "Przepraszam, nie zrozumiałem pytania.");
    }

    #[tokio::test]
    async fn test_fallback_generic_errors_are_localized() {
        let client = FallbackMessenger::new(Failing(|| MessagingError::Status {
            status: 500,
            body: String::new(),
        }));
        let reply = client.send(&request(Language::En)).await.unwrap();
        assert_eq!(reply, translations(Language::En).chat.fallback_error);

        let client = FallbackMessenger::new(Failing(|| MessagingError::Http("refused".into())));
        let reply = client.send(&request(Language::Ru)).await.unwrap();
        assert_eq!(reply, translations(Language::Ru).chat.fallback_error);
    }
}
