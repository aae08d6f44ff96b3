//! Chat session controller.
//!
//! A [`ChatSession`] owns one visitor's transcript and enforces the busy
//! gate: at most one assistant call is in flight per session. State lives
//! behind a mutex that is only held for synchronous bookkeeping, never
//! across the backend call.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use domojca_core::config::ChatConfig;
use domojca_core::{translations, Language};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::MessagingError;
use crate::messaging::MessagingClient;
use crate::types::{
    with_language_instruction, ChatCommand, ConversationMessage, HistoryTurn, MessagingRequest,
    RejectReason, SessionSnapshot, SubmitOutcome,
};

/// Limits applied by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Deadline for one assistant reply.
    pub reply_timeout: Duration,
    /// Longest accepted message, in characters.
    pub max_message_chars: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

impl From<&ChatConfig> for SessionSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            reply_timeout: Duration::from_secs(config.timeout_secs),
            max_message_chars: config.max_message_chars,
        }
    }
}

struct SessionState {
    language: Language,
    transcript: Vec<ConversationMessage>,
    pending_input: String,
    awaiting_reply: bool,
    /// Bumped by every reset; tags the exchange in flight.
    epoch: u64,
    cancel: CancellationToken,
}

impl SessionState {
    fn new(language: Language) -> Self {
        Self {
            language,
            transcript: vec![welcome(language)],
            pending_input: String::new(),
            awaiting_reply: false,
            epoch: 0,
            cancel: CancellationToken::new(),
        }
    }
}

fn welcome(language: Language) -> ConversationMessage {
    ConversationMessage::assistant(translations(language).chat.welcome)
}

/// One visitor's conversation with the assistant.
pub struct ChatSession {
    id: Uuid,
    client: Arc<dyn MessagingClient>,
    settings: SessionSettings,
    state: Mutex<SessionState>,
}

/// Clears the busy flag when an exchange ends, including when the
/// submitting future is dropped mid-call.
struct BusyGuard<'a> {
    state: &'a Mutex<SessionState>,
    epoch: u64,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.epoch == self.epoch {
            state.awaiting_reply = false;
        }
    }
}

impl ChatSession {
    /// Create a session seeded with the welcome message for `language`.
    pub fn new(
        language: Language,
        client: Arc<dyn MessagingClient>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            settings,
            state: Mutex::new(SessionState::new(language)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> Language {
        self.lock().language
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.lock().awaiting_reply
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the transcript with a single welcome message in `language`.
    ///
    /// Clears the pending input and the busy flag. A call still in flight is
    /// cancelled and its reply, should one arrive, is dropped.
    pub fn reset(&self, language: Language) {
        let mut state = self.lock();
        state.cancel.cancel();
        state.cancel = CancellationToken::new();
        state.epoch = state.epoch.wrapping_add(1);
        state.language = language;
        state.transcript = vec![welcome(language)];
        state.pending_input.clear();
        state.awaiting_reply = false;
        debug!(session = %self.id, language = %language, "Chat session reset");
    }

    pub fn set_pending_input(&self, text: impl Into<String>) {
        self.lock().pending_input = text.into();
    }

    /// Submit the text currently being composed.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let text = self.lock().pending_input.clone();
        self.submit(&text).await
    }

    /// Submit a message and wait for the exchange to settle.
    ///
    /// The user message is appended before the backend is called. Blank
    /// text, an exchange already in flight, or an over-long message reject
    /// the submission without touching any state.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let (request, epoch, cancel) = match self.begin_exchange(text) {
            Ok(started) => started,
            Err(reason) => {
                debug!(session = %self.id, reason = ?reason, "Chat submission rejected");
                return SubmitOutcome::Rejected(reason);
            }
        };
        let _guard = BusyGuard {
            state: &self.state,
            epoch,
        };

        let timeout = self.settings.reply_timeout;
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(MessagingError::Cancelled),
            _ = tokio::time::sleep(timeout) => Err(MessagingError::Timeout(timeout)),
            reply = self.client.send(&request) => reply,
        };

        self.finish_exchange(epoch, result)
    }

    fn begin_exchange(
        &self,
        text: &str,
    ) -> Result<(MessagingRequest, u64, CancellationToken), RejectReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RejectReason::Empty);
        }
        if text.chars().count() > self.settings.max_message_chars {
            return Err(RejectReason::TooLong);
        }

        let mut state = self.lock();
        if state.awaiting_reply {
            return Err(RejectReason::Busy);
        }

        let history: Vec<HistoryTurn> = state.transcript.iter().map(HistoryTurn::from).collect();
        state.transcript.push(ConversationMessage::user(text));
        state.pending_input.clear();
        state.awaiting_reply = true;

        let request = MessagingRequest {
            history,
            message: with_language_instruction(text, state.language),
            language: state.language,
        };
        Ok((request, state.epoch, state.cancel.clone()))
    }

    fn finish_exchange(&self, epoch: u64, result: Result<String, MessagingError>) -> SubmitOutcome {
        let mut state = self.lock();
        if state.epoch != epoch {
            info!(session = %self.id, "Dropping assistant reply for a reset conversation");
            return SubmitOutcome::Discarded;
        }
        state.awaiting_reply = false;

        match result {
            Ok(reply) => {
                state.transcript.push(ConversationMessage::assistant(reply));
                SubmitOutcome::Replied
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Assistant reply failed");
                SubmitOutcome::NoReply
            }
        }
    }

    /// Apply a view intent. Returns the submission outcome for submit commands.
    ///
    /// `ChangeLanguage` restarts the conversation only when the language
    /// actually differs; re-announcing the current one keeps the transcript.
    pub async fn dispatch(&self, command: ChatCommand) -> Option<SubmitOutcome> {
        match command {
            ChatCommand::SetInput(text) => {
                self.set_pending_input(text);
                None
            }
            ChatCommand::Submit(text) => Some(self.submit(&text).await),
            ChatCommand::SubmitPending => Some(self.submit_pending().await),
            ChatCommand::ChangeLanguage(language) => {
                if language != self.language() {
                    self.reset(language);
                }
                None
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            id: self.id,
            language: state.language,
            messages: state.transcript.clone(),
            pending_input: state.pending_input.clone(),
            awaiting_reply: state.awaiting_reply,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
