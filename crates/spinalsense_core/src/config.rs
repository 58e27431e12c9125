//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve log level and log directory for process startup.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Resolution never fails; invalid levels surface from `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "SPINALSENSE_LOG_LEVEL";
/// Environment variable overriding the absolute log directory.
pub const LOG_DIR_ENV: &str = "SPINALSENSE_LOG_DIR";

/// Runtime settings shared by CLI and FFI startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_level = non_blank(lookup(LOG_LEVEL_ENV)).unwrap_or(defaults.log_level);
        let log_dir = non_blank(lookup(LOG_DIR_ENV))
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);
        Self { log_level, log_dir }
    }

    /// Log directory as UTF-8 text for `init_logging`.
    pub fn log_dir_str(&self) -> String {
        self.log_dir.to_string_lossy().into_owned()
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("spinalsense").join("logs")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
