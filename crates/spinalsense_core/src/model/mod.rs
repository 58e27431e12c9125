//! Domain model for sessions, scans and severity tiers.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep severity derivation next to the measurement it classifies.
//!
//! # Invariants
//! - Every scan carries an angle in `[0, 60]` with tenth-degree precision.
//! - Severity is derived from the angle once and frozen into the record.

pub mod scan;
pub mod session;
pub mod severity;
