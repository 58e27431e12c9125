//! Identity -> session registry.
//!
//! # Invariants
//! - Every `create` call mints a new identity, even for a repeated name.
//! - Sessions are never evicted during the registry lifetime.

use crate::model::session::{normalize_display_name, UserId, UserSession};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock};

/// Session creation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Display name is empty after normalization.
    EmptyDisplayName,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
        }
    }
}

impl Error for SessionError {}

/// Process-lifetime session registry.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<UserId, UserSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session for `display_name`.
    ///
    /// # Errors
    /// - `EmptyDisplayName` when the name is blank.
    pub fn create(&self, display_name: &str) -> Result<UserSession, SessionError> {
        let name = normalize_display_name(display_name).ok_or(SessionError::EmptyDisplayName)?;
        let session = UserSession::new(name);
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.insert(session.user_id.clone(), session.clone());
        info!(
            "event=session_created module=session_registry status=ok session_count={}",
            sessions.len()
        );
        Ok(session)
    }

    pub fn get(&self, user_id: &UserId) -> Option<UserSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
