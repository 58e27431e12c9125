//! User session model.
//!
//! # Invariants
//! - `UserId` is minted fresh per login and never reused.
//! - Sessions are immutable after creation.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const USER_ID_PREFIX: &str = "user-";

/// Opaque user identity token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Mints a new unique identity.
    pub fn generate() -> Self {
        Self(format!("{USER_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Wraps a caller-provided identity without validation.
    ///
    /// Boundary callers reject empty values before reaching the store.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Binding of a user identity to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: UserId,
    pub display_name: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl UserSession {
    /// Creates a session with a freshly minted identity.
    ///
    /// Callers pass an already normalized display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            user_id: UserId::generate(),
            display_name: display_name.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Trims a display name and collapses internal whitespace runs.
///
/// Returns `None` when nothing but whitespace remains.
pub fn normalize_display_name(value: &str) -> Option<String> {
    let collapsed = WHITESPACE_RE.replace_all(value.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_display_name, UserId, UserSession};

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let first = UserId::generate();
        let second = UserId::generate();
        assert!(first.as_str().starts_with("user-"));
        assert_eq!(first.as_str().len(), "user-".len() + 32);
        assert_ne!(first, second);
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            normalize_display_name("  Ada \t  Lovelace\n").as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(normalize_display_name(" \n\t "), None);
    }

    #[test]
    fn new_session_sets_timestamp() {
        let session = UserSession::new("Alice");
        assert_eq!(session.display_name, "Alice");
        assert!(session.created_at > 0);
    }
}
