//! Boundary use-case service.
//!
//! # Responsibility
//! - Validate boundary inputs and orchestrate registry, store and retriever.
//! - Shape results into serializable response envelopes.
//!
//! # Invariants
//! - Only missing required fields fail; everything past validation is total.
//! - Severity passed to `answer_query` is used as given, never re-derived.
//!
//! # See also
//! - `knowledge::retriever` for dispatch rules.

use crate::knowledge::retriever;
use crate::measure::{AngleMeasurer, RandomMeasurer};
use crate::model::scan::ScanRecord;
use crate::model::session::UserId;
use crate::model::severity::SeverityTier;
use crate::store::scan_store::ScanStore;
use crate::store::session_registry::{SessionError, SessionRegistry};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SERVICE_NAME: &str = "SpinalSense Core";

const OPERATIONS: &[&str] = &[
    "health",
    "create_session",
    "record_scan",
    "list_scans",
    "current_severity",
    "answer_query",
];

/// Boundary-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A required request field is missing or empty.
    InvalidRequest(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(message) => write!(f, "invalid request: {message}"),
        }
    }
}

impl Error for ServiceError {}

impl From<SessionError> for ServiceError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::EmptyDisplayName => Self::InvalidRequest("user name required"),
        }
    }
}

/// Login result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCreated {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "name")]
    pub display_name: String,
}

/// Analysis result for one recorded scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    #[serde(rename = "cobbAngle")]
    pub angle: f64,
    pub severity: SeverityTier,
    #[serde(rename = "date")]
    pub date_label: String,
}

impl From<&ScanRecord> for ScanOutcome {
    fn from(record: &ScanRecord) -> Self {
        Self {
            angle: record.angle,
            severity: record.severity,
            date_label: record.date_label.clone(),
        }
    }
}

/// Guidance answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Liveness snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub session_count: usize,
}

/// Static service metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub operations: Vec<String>,
}

/// Facade over the session registry, scan store and guidance retriever.
pub struct CareService {
    sessions: SessionRegistry,
    scans: ScanStore,
    measurer: Box<dyn AngleMeasurer>,
}

impl Default for CareService {
    fn default() -> Self {
        Self::new(Box::new(RandomMeasurer))
    }
}

impl CareService {
    /// Creates a service using the provided measurement collaborator.
    pub fn new(measurer: Box<dyn AngleMeasurer>) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            scans: ScanStore::new(),
            measurer,
        }
    }

    /// Registers a new session and an empty history for it.
    ///
    /// # Errors
    /// - `InvalidRequest` when `display_name` is blank.
    pub fn create_session(&self, display_name: &str) -> Result<SessionCreated, ServiceError> {
        let session = self.sessions.create(display_name).inspect_err(|_| {
            warn!("event=create_session module=service status=error reason=empty_display_name");
        })?;
        self.scans.ensure_history(&session.user_id);
        Ok(SessionCreated {
            user_id: session.user_id,
            display_name: session.display_name,
        })
    }

    /// Measures `image`, classifies the angle and appends it to the user's history.
    ///
    /// # Errors
    /// - `InvalidRequest` when `user_id` is blank.
    pub fn record_scan(&self, user_id: &str, image: &[u8]) -> Result<ScanOutcome, ServiceError> {
        let user_id = required(user_id, "user id required")?;
        let user_id = UserId::from_raw(user_id);
        let angle = self.measurer.measure(image);
        let record = self.scans.append_scan(&user_id, angle);
        info!(
            "event=record_scan module=service status=ok known_session={} angle_tenths={} severity={}",
            self.sessions.get(&user_id).is_some(),
            angle.tenths(),
            record.severity
        );
        Ok(ScanOutcome::from(&record))
    }

    /// Returns the user's history; empty for unknown or blank ids.
    pub fn list_scans(&self, user_id: &str) -> Vec<ScanRecord> {
        self.scans.history(&UserId::from_raw(user_id))
    }

    /// Returns the severity of the user's most recent scan.
    pub fn current_severity(&self, user_id: &str) -> Option<SeverityTier> {
        self.scans
            .latest(&UserId::from_raw(user_id))
            .map(|record| record.severity)
    }

    /// Answers a free-text question for a severity tier label.
    ///
    /// # Errors
    /// - `InvalidRequest` when `query` or `severity` is blank.
    pub fn answer_query(
        &self,
        query: &str,
        severity: &str,
        display_name: &str,
    ) -> Result<ChatReply, ServiceError> {
        let query = required(query, "query and severity required")?;
        let severity = required(severity, "query and severity required")?;
        let category = retriever::match_category(query);
        info!(
            "event=answer_query module=service status=ok category={:?} tier={}",
            category,
            retriever::resolve_tier(severity)
        );
        Ok(ChatReply {
            response: retriever::answer(query, severity, display_name),
        })
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "Backend is running!".to_string(),
            session_count: self.sessions.len(),
        }
    }

    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            operations: OPERATIONS.iter().map(|op| op.to_string()).collect(),
        }
    }
}

// Only empty fields are missing; whitespace is passed through untouched.
fn required<'a>(value: &'a str, message: &'static str) -> Result<&'a str, ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::InvalidRequest(message));
    }
    Ok(value)
}
