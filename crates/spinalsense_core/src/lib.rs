//! Core domain logic for SpinalSense.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod knowledge;
pub mod logging;
pub mod measure;
pub mod model;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use knowledge::base::{entry_for, KnowledgeEntry};
pub use knowledge::retriever::{answer, match_category, GuidanceCategory, CATEGORY_RULES};
pub use logging::{default_log_level, init_logging, logging_status};
pub use measure::{AngleMeasurer, FixedMeasurer, RandomMeasurer};
pub use model::scan::{Angle, AngleError, ScanRecord};
pub use model::session::{UserId, UserSession};
pub use model::severity::SeverityTier;
pub use service::care_service::{
    CareService, ChatReply, HealthStatus, ScanOutcome, ServiceError, ServiceInfo, SessionCreated,
};
pub use store::scan_store::ScanStore;
pub use store::session_registry::{SessionError, SessionRegistry};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
