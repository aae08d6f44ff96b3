//! In-memory registry of visitors' chat sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use domojca_core::Language;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ChatError;
use crate::messaging::MessagingClient;
use crate::session::{ChatSession, SessionSettings};

struct Entry {
    session: Arc<ChatSession>,
    last_used: Instant,
}

/// Holds live sessions keyed by id and discards idle ones.
///
/// Nothing is persisted: a restart starts every visitor over.
pub struct SessionRegistry {
    client: Arc<dyn MessagingClient>,
    settings: SessionSettings,
    idle_timeout: Duration,
    sessions: Mutex<HashMap<Uuid, Entry>>,
}

impl SessionRegistry {
    pub fn new(
        client: Arc<dyn MessagingClient>,
        settings: SessionSettings,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            client,
            settings,
            idle_timeout,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new conversation in `language`.
    pub fn create(&self, language: Language) -> Arc<ChatSession> {
        let session = Arc::new(ChatSession::new(
            language,
            self.client.clone(),
            self.settings,
        ));
        let mut sessions = self.lock();
        Self::purge_locked(&mut sessions, self.idle_timeout);
        sessions.insert(
            session.id(),
            Entry {
                session: session.clone(),
                last_used: Instant::now(),
            },
        );
        info!(session = %session.id(), language = %language, "Chat session created");
        session
    }

    /// Look up a live session and mark it as used.
    pub fn get(&self, id: Uuid) -> Result<Arc<ChatSession>, ChatError> {
        let mut sessions = self.lock();
        match sessions.get_mut(&id) {
            Some(entry) if entry.last_used.elapsed() <= self.idle_timeout => {
                entry.last_used = Instant::now();
                Ok(entry.session.clone())
            }
            Some(_) => {
                sessions.remove(&id);
                debug!(session = %id, "Chat session expired");
                Err(ChatError::SessionNotFound(id))
            }
            None => Err(ChatError::SessionNotFound(id)),
        }
    }

    /// Tear a session down. Any reply still pending for it is dropped.
    pub fn remove(&self, id: Uuid) -> Result<(), ChatError> {
        let entry = self
            .lock()
            .remove(&id)
            .ok_or(ChatError::SessionNotFound(id))?;
        entry.session.reset(entry.session.language());
        info!(session = %id, "Chat session closed");
        Ok(())
    }

    /// Drop sessions idle for longer than the timeout. Returns how many went.
    pub fn purge_expired(&self) -> usize {
        Self::purge_locked(&mut self.lock(), self.idle_timeout)
    }

    fn purge_locked(sessions: &mut HashMap<Uuid, Entry>, idle_timeout: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_used.elapsed() <= idle_timeout);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
