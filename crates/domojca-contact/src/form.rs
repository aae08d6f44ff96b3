//! Contact form controller.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use domojca_core::{translations, Language};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::delivery::DeliveryClient;
use crate::error::{ContactError, DeliveryError};
use crate::types::{ContactCommand, ContactSnapshot, ContactStatus};
use crate::validation::validate;

/// Validate that a status transition is allowed.
///
/// Valid transitions:
/// - Idle/Error/Success -> Sending
/// - Idle/Error/Success -> Error (validation failed)
/// - Sending -> Success
/// - Sending -> Error
pub fn validate_transition(from: ContactStatus, to: ContactStatus) -> Result<(), ContactError> {
    use ContactStatus::*;

    let valid = matches!(
        (from, to),
        (Idle | Error | Success, Sending)
            | (Idle | Error | Success, Error)
            | (Sending, Success)
            | (Sending, Error)
    );

    if valid {
        Ok(())
    } else {
        Err(ContactError::InvalidTransition(from, to))
    }
}

struct FormState {
    name: String,
    email: String,
    message: String,
    status: ContactStatus,
    status_message: Option<&'static str>,
    cancel: CancellationToken,
}

impl FormState {
    fn transition(&mut self, to: ContactStatus, message: &'static str) -> Result<(), ContactError> {
        validate_transition(self.status, to)?;
        self.status = to;
        self.status_message = Some(message);
        Ok(())
    }
}

/// Owns the contact form fields and drives a submission through delivery.
pub struct ContactForm {
    language: Language,
    client: Arc<dyn DeliveryClient>,
    timeout: Duration,
    state: Mutex<FormState>,
}

/// Moves a submission out of `Sending` if its future is dropped.
struct SendingGuard<'a> {
    form: &'a ContactForm,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.form.lock();
        if state.status == ContactStatus::Sending {
            state.status = ContactStatus::Error;
            state.status_message = Some(translations(self.form.language).contact.form_error);
        }
    }
}

impl ContactForm {
    pub fn new(language: Language, client: Arc<dyn DeliveryClient>, timeout: Duration) -> Self {
        Self {
            language,
            client,
            timeout,
            state: Mutex::new(FormState {
                name: String::new(),
                email: String::new(),
                message: String::new(),
                status: ContactStatus::Idle,
                status_message: None,
                cancel: CancellationToken::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.lock().email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.lock().message = message.into();
    }

    pub fn status(&self) -> ContactStatus {
        self.lock().status
    }

    /// The submit button is enabled unless a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.lock().status != ContactStatus::Sending
    }

    /// Abort the submission in flight, if any. It settles as `Error`.
    pub fn cancel(&self) {
        self.lock().cancel.cancel();
    }

    /// Validate the fields and send them.
    ///
    /// Invalid fields and delivery failures both settle as
    /// `Ok(ContactStatus::Error)` with a localized status line; fields are
    /// cleared only on success. Submitting while a previous submission is
    /// still being sent is refused.
    pub async fn submit(&self) -> Result<ContactStatus, ContactError> {
        let contact = &translations(self.language).contact;

        let (submission, cancel) = {
            let mut state = self.lock();
            if state.status == ContactStatus::Sending {
                return Err(ContactError::AlreadySending);
            }
            match validate(&state.name, &state.email, &state.message) {
                Ok(submission) => {
                    state.transition(ContactStatus::Sending, contact.form_sending)?;
                    state.cancel = CancellationToken::new();
                    (submission, state.cancel.clone())
                }
                Err(err) => {
                    debug!(error = %err, "Contact form rejected");
                    state.transition(ContactStatus::Error, contact.form_invalid)?;
                    return Ok(ContactStatus::Error);
                }
            }
        };
        let _guard = SendingGuard { form: self };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DeliveryError::Cancelled),
            _ = tokio::time::sleep(self.timeout) => Err(DeliveryError::Timeout(self.timeout)),
            sent = self.client.send(&submission) => sent,
        };

        let mut state = self.lock();
        match result {
            Ok(()) => {
                state.transition(ContactStatus::Success, contact.form_success)?;
                state.name.clear();
                state.email.clear();
                state.message.clear();
            }
            Err(err) => {
                warn!(error = %err, "Contact message not delivered");
                state.transition(ContactStatus::Error, contact.form_error)?;
            }
        }
        Ok(state.status)
    }

    /// Apply a view intent. Returns the new status for `Submit`.
    pub async fn dispatch(
        &self,
        command: ContactCommand,
    ) -> Result<Option<ContactStatus>, ContactError> {
        match command {
            ContactCommand::SetName(v) => self.set_name(v),
            ContactCommand::SetEmail(v) => self.set_email(v),
            ContactCommand::SetMessage(v) => self.set_message(v),
            ContactCommand::Submit => return self.submit().await.map(Some),
        }
        Ok(None)
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        let state = self.lock();
        ContactSnapshot {
            language: self.language,
            name: state.name.clone(),
            email: state.email.clone(),
            message: state.message.clone(),
            status: state.status,
            status_message: state.status_message.map(str::to_string),
            can_submit: state.status != ContactStatus::Sending,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::types::ContactSubmission;

    struct Recorder {
        fail: bool,
        calls: AtomicUsize,
        last: Mutex<Option<ContactSubmission>>,
    }

    impl Recorder {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DeliveryClient for Recorder {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(submission.clone());
            if self.fail {
                Err(DeliveryError::Status {
                    status: 500,
                    body: String::new(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct Gated {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl DeliveryClient for Gated {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), DeliveryError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    struct Hanging;

    #[async_trait]
    impl DeliveryClient for Hanging {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), DeliveryError> {
            std::future::pending().await
        }
    }

    fn form(client: Arc<dyn DeliveryClient>) -> ContactForm {
        ContactForm::new(Language::En, client, Duration::from_secs(5))
    }

    fn fill(form: &ContactForm, name: &str, email: &str, message: &str) {
        form.set_name(name);
        form.set_email(email);
        form.set_message(message);
    }

    // =====================================================================
    // Transitions
    // =====================================================================

    #[test]
    fn test_valid_transitions() {
        use ContactStatus::*;
        for from in [Idle, Error, Success] {
            assert!(validate_transition(from, Sending).is_ok());
            assert!(validate_transition(from, Error).is_ok());
        }
        assert!(validate_transition(Sending, Success).is_ok());
        assert!(validate_transition(Sending, Error).is_ok());
    }

    #[test]
    fn test_invalid_transitions() {
        use ContactStatus::*;
        assert!(validate_transition(Sending, Sending).is_err());
        assert!(validate_transition(Idle, Success).is_err());
        assert!(validate_transition(Error, Success).is_err());
        assert!(validate_transition(Sending, Idle).is_err());
    }

    // =====================================================================
    // Submission
    // =====================================================================

    #[tokio::test]
    async fn test_invalid_input_sets_error_without_delivery() {
        let client = Recorder::new(false);
        let f = form(client.clone());
        fill(&f, "A", "bad", "hello!");

        assert_eq!(f.submit().await.unwrap(), ContactStatus::Error);
        assert_eq!(client.calls(), 0);

        let snap = f.snapshot();
        assert_eq!(
            snap.status_message.as_deref(),
            Some(translations(Language::En).contact.form_invalid)
        );
        assert_eq!(snap.name, "A");
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let client = Recorder::new(false);
        let f = form(client.clone());
        fill(&f, "Anna", "anna@example.com", "Hello there");

        assert_eq!(f.submit().await.unwrap(), ContactStatus::Success);
        assert_eq!(client.calls(), 1);

        let snap = f.snapshot();
        assert!(snap.name.is_empty());
        assert!(snap.email.is_empty());
        assert!(snap.message.is_empty());
        assert_eq!(
            snap.status_message.as_deref(),
            Some(translations(Language::En).contact.form_success)
        );
    }

    #[tokio::test]
    async fn test_delivery_receives_trimmed_fields() {
        let client = Recorder::new(false);
        let f = form(client.clone());
        fill(&f, "  Anna ", " anna@example.com", " Hello there  ");
        f.submit().await.unwrap();

        let sent = client.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.name, "Anna");
        assert_eq!(sent.email, "anna@example.com");
        assert_eq!(sent.message, "Hello there");
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_fields() {
        let client = Recorder::new(true);
        let f = form(client.clone());
        fill(&f, "Anna", "anna@example.com", "Hello there");

        assert_eq!(f.submit().await.unwrap(), ContactStatus::Error);
        let snap = f.snapshot();
        assert_eq!(snap.name, "Anna");
        assert_eq!(snap.email, "anna@example.com");
        assert_eq!(snap.message, "Hello there");
        assert_eq!(
            snap.status_message.as_deref(),
            Some(translations(Language::En).contact.form_error)
        );
        assert!(snap.can_submit);
    }

    #[tokio::test]
    async fn test_retry_after_error() {
        let f = form(Recorder::new(false));
        fill(&f, "A", "anna@example.com", "Hello there");
        assert_eq!(f.submit().await.unwrap(), ContactStatus::Error);

        f.set_name("Anna");
        assert_eq!(f.submit().await.unwrap(), ContactStatus::Success);
    }

    #[tokio::test]
    async fn test_submit_while_sending_is_refused() {
        let client = Arc::new(Gated {
            started: Notify::new(),
            release: Notify::new(),
        });
        let f = Arc::new(form(client.clone()));
        fill(&f, "Anna", "anna@example.com", "Hello there");

        let first = {
            let f = f.clone();
            tokio::spawn(async move { f.submit().await })
        };
        client.started.notified().await;

        assert_eq!(f.status(), ContactStatus::Sending);
        assert!(!f.can_submit());
        assert!(matches!(f.submit().await, Err(ContactError::AlreadySending)));

        client.release.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), ContactStatus::Success);
        assert!(f.can_submit());
    }

    #[tokio::test]
    async fn test_timeout_settles_as_error() {
        let f = ContactForm::new(Language::Pl, Arc::new(Hanging), Duration::from_millis(50));
        fill(&f, "Anna", "anna@example.com", "Hello there");

        assert_eq!(f.submit().await.unwrap(), ContactStatus::Error);
        assert_eq!(f.snapshot().name, "Anna");
    }

    #[tokio::test]
    async fn test_cancel_settles_as_error() {
        let f = Arc::new(ContactForm::new(
            Language::Pl,
            Arc::new(Hanging),
            Duration::from_secs(60),
        ));
        fill(&f, "Anna", "anna@example.com", "Hello there");

        let pending = {
            let f = f.clone();
            tokio::spawn(async move { f.submit().await })
        };
        while f.status() != ContactStatus::Sending {
            tokio::task::yield_now().await;
        }
        f.cancel();
        assert_eq!(pending.await.unwrap().unwrap(), ContactStatus::Error);
    }

    #[tokio::test]
    async fn test_dispatch() {
        let client = Recorder::new(false);
        let f = form(client.clone());

        assert_eq!(f.dispatch(ContactCommand::SetName("Anna".into())).await.unwrap(), None);
        f.dispatch(ContactCommand::SetEmail("anna@example.com".into()))
            .await
            .unwrap();
        f.dispatch(ContactCommand::SetMessage("Hello there".into()))
            .await
            .unwrap();
        assert_eq!(
            f.dispatch(ContactCommand::Submit).await.unwrap(),
            Some(ContactStatus::Success)
        );
    }
}
