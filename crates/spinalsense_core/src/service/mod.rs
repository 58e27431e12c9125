//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and retrieval calls into boundary-level operations.
//! - Keep FFI/CLI layers decoupled from state ownership details.

pub mod care_service;
