//! Static guidance knowledge and keyword retrieval.
//!
//! # Responsibility
//! - Hold the per-tier guidance entries.
//! - Select and render one guidance category for a free-text query.

pub mod base;
pub mod retriever;
