//! Data types shared by the chat session, the messaging backends and the API.

use chrono::{DateTime, Utc};
use domojca_core::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the visible transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Informational only; ordering comes from the position in the transcript.
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// A prior turn as sent to the messaging backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub text: String,
}

impl From<&ConversationMessage> for HistoryTurn {
    fn from(msg: &ConversationMessage) -> Self {
        Self {
            role: msg.role,
            text: msg.text.clone(),
        }
    }
}

/// Everything a backend needs to produce one reply.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagingRequest {
    /// Transcript as it stood before the new message.
    pub history: Vec<HistoryTurn>,
    /// The new message, already carrying the reply-language instruction.
    pub message: String,
    pub language: Language,
}

/// Append the instruction asking for a reply in `language`.
pub fn with_language_instruction(text: &str, language: Language) -> String {
    format!(
        "{} (Please reply in {} language)",
        text,
        language.english_name()
    )
}

/// Why a submission was turned away without any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Blank or whitespace-only text.
    Empty,
    /// A reply is still awaited.
    Busy,
    /// Longer than the configured maximum.
    TooLong,
}

/// Result of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum SubmitOutcome {
    /// The assistant reply was appended.
    Replied,
    /// Accepted, but the backend failed; nothing was appended.
    NoReply,
    /// The session was reset while the reply was pending; the reply was dropped.
    Discarded,
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// Intents the view emits towards a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum ChatCommand {
    SetInput(String),
    Submit(String),
    SubmitPending,
    ChangeLanguage(Language),
}

/// Renderable copy of a session's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub language: Language,
    pub messages: Vec<ConversationMessage>,
    pub pending_input: String,
    pub awaiting_reply: bool,
}
