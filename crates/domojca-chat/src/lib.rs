//! Church assistant chat for Dom Ojca.
//!
//! Provides the messaging backend contract with its Gemini implementation,
//! the per-visitor chat session controller and the session registry.

pub mod error;
pub mod gemini;
pub mod messaging;
pub mod registry;
pub mod session;
pub mod types;

pub use error::{ChatError, MessagingError};
pub use gemini::GeminiClient;
pub use messaging::{fallback_text, FallbackMessenger, MessagingClient};
pub use registry::SessionRegistry;
pub use session::{ChatSession, SessionSettings};
pub use types::{
    ChatCommand, ConversationMessage, HistoryTurn, MessagingRequest, RejectReason, Role,
    SessionSnapshot, SubmitOutcome,
};
