//! In-process state owners for sessions and scan histories.
//!
//! # Responsibility
//! - Own the identity->session and identity->history maps behind explicit APIs.
//! - Keep locking discipline inside the store; callers never see locks.
//!
//! # Invariants
//! - State lives for the owning value's lifetime only; nothing is persisted.
//! - Each call touches at most one user's state.

pub mod scan_store;
pub mod session_registry;
