//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use domojca_chat::{MessagingClient, SessionRegistry, SessionSettings};
use domojca_contact::DeliveryClient;
use domojca_core::DomOjcaConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (read-only after startup).
    pub config: Arc<DomOjcaConfig>,
    /// Live chat sessions, one per open chat widget.
    pub sessions: Arc<SessionRegistry>,
    /// Backend for contact form messages.
    pub delivery: Arc<dyn DeliveryClient>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        config: DomOjcaConfig,
        messaging: Arc<dyn MessagingClient>,
        delivery: Arc<dyn DeliveryClient>,
    ) -> Self {
        let idle = Duration::from_secs(u64::from(config.chat.session_idle_minutes) * 60);
        let sessions = SessionRegistry::new(messaging, SessionSettings::from(&config.chat), idle);
        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            delivery,
            start_time: Instant::now(),
        }
    }
}
