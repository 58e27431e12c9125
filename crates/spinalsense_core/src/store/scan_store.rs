//! Per-user append-only scan history.
//!
//! # Responsibility
//! - Append classified scan records to the owning user's history.
//! - Return histories in chronological (insertion) order.
//!
//! # Invariants
//! - Histories are never shared or merged across users.
//! - Appends to the same user are serialized by that user's mutex.
//! - Unknown users have an empty history, never an error.

use crate::model::scan::{Angle, ScanRecord};
use crate::model::session::UserId;
use chrono::Local;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

type History = Arc<Mutex<Vec<ScanRecord>>>;

/// Process-lifetime scan history store.
#[derive(Default)]
pub struct ScanStore {
    histories: RwLock<HashMap<UserId, History>>,
}

impl ScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `angle`, stamps it with the current time and appends it.
    ///
    /// Creates an empty history first when the user has none yet.
    pub fn append_scan(&self, user_id: &UserId, angle: Angle) -> ScanRecord {
        let history = self.history_handle(user_id);
        let mut records = lock_history(&history);
        // Clock is read under the per-user lock so timestamps follow insertion order.
        let record = ScanRecord::capture(angle, Local::now());
        records.push(record.clone());
        debug!(
            "event=scan_appended module=scan_store status=ok severity={} history_len={}",
            record.severity,
            records.len()
        );
        record
    }

    /// Returns a snapshot of the user's history in insertion order.
    pub fn history(&self, user_id: &UserId) -> Vec<ScanRecord> {
        match self.existing_handle(user_id) {
            Some(history) => lock_history(&history).clone(),
            None => Vec::new(),
        }
    }

    /// Returns the most recent record for the user.
    pub fn latest(&self, user_id: &UserId) -> Option<ScanRecord> {
        let history = self.existing_handle(user_id)?;
        let records = lock_history(&history);
        records.last().cloned()
    }

    /// Ensures an (empty) history exists for the user.
    pub fn ensure_history(&self, user_id: &UserId) {
        let _ = self.history_handle(user_id);
    }

    /// Number of users with a history entry.
    pub fn user_count(&self) -> usize {
        self.histories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn existing_handle(&self, user_id: &UserId) -> Option<History> {
        self.histories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn history_handle(&self, user_id: &UserId) -> History {
        if let Some(history) = self.existing_handle(user_id) {
            return history;
        }
        let mut histories = self
            .histories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        histories.entry(user_id.clone()).or_default().clone()
    }
}

// Records are immutable once pushed, so a poisoned lock still guards valid data.
fn lock_history(history: &History) -> MutexGuard<'_, Vec<ScanRecord>> {
    history.lock().unwrap_or_else(PoisonError::into_inner)
}
