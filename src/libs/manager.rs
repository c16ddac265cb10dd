//! Session lifecycle management.
//!
//! The manager owns the single-active-session invariant. It keeps no state
//! of its own: every call re-reads the store, because each CLI invocation
//! is a fresh process and the database is the only source of truth.

use crate::db::sessions::Sessions;
use crate::libs::error::{DevlogError, Result};
use crate::libs::messages::Message;
use crate::libs::session::{normalize_tags, Session};
use chrono::Local;

pub struct SessionManager {
    store: Sessions,
}

impl SessionManager {
    pub fn new() -> Result<Self> {
        Ok(SessionManager { store: Sessions::new()? })
    }

    /// Wraps an existing store. Lets tests drive the manager against a
    /// store they also inspect directly.
    pub fn with_store(store: Sessions) -> Self {
        SessionManager { store }
    }

    /// Starts a new session. Fails if the description is blank or another
    /// session is still running; there is no implicit stop.
    pub fn start(&mut self, description: &str, tags: &[String]) -> Result<Session> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DevlogError::Validation(Message::EmptyDescription.to_string()));
        }

        if let Some(active) = self.store.get_running()? {
            return Err(DevlogError::Conflict(Message::SessionAlreadyActive(active.description).to_string()));
        }

        let mut session = Session::new(description, normalize_tags(tags), Local::now().naive_local());
        let id = self.store.insert(&session)?;
        session.id = Some(id);

        Ok(session)
    }

    /// Stops the running session, attaching optional notes. This is the
    /// only mutation a session receives after creation.
    pub fn stop(&mut self, notes: Option<&str>) -> Result<Session> {
        let mut session = self
            .store
            .get_running()?
            .ok_or_else(|| DevlogError::NotFound(Message::NoActiveSession.to_string()))?;

        let ended_at = Local::now().naive_local();
        let notes = notes.map(str::trim).filter(|n| !n.is_empty());
        // id is always present on a stored row
        let id = session.id.ok_or_else(|| DevlogError::NotFound(Message::NoActiveSession.to_string()))?;
        self.store.finish(id, ended_at, notes)?;

        session.ended_at = Some(ended_at);
        session.notes = notes.map(str::to_string);
        Ok(session)
    }

    /// The running session, if any. Absence is not an error.
    pub fn current(&mut self) -> Result<Option<Session>> {
        self.store.get_running()
    }
}
