use domojca_core::Language;
use serde::{Deserialize, Serialize};

/// A validated, trimmed contact message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Status of the contact form.
///
/// `Idle -> Sending -> {Success, Error}`; a new submission may start from
/// any state except `Sending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Intents the view emits towards the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum ContactCommand {
    SetName(String),
    SetEmail(String),
    SetMessage(String),
    Submit,
}

/// Renderable copy of the form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSnapshot {
    pub language: Language,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    /// Localized status line, absent while idle.
    pub status_message: Option<String>,
    /// Whether the submit button is enabled.
    pub can_submit: bool,
}
