//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose login, scan analysis, history and chat calls to Dart via FRB.
//! - Own the process-wide `CareService` instance.
//! - Map core errors into flat response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - `ok=false` envelopes always carry a non-empty `message`.

use log::warn;
use spinalsense_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CareService, ScanRecord,
};
use std::sync::OnceLock;

static CARE_SERVICE: OnceLock<CareService> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Backend liveness response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub session_count: u32,
}

/// Login response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub ok: bool,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub message: String,
}

/// Scan analysis response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub ok: bool,
    pub cobb_angle: Option<f64>,
    /// `mild|moderate|severe`.
    pub severity: Option<String>,
    pub date: Option<String>,
    pub message: String,
}

/// One history row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanItem {
    pub date: String,
    pub angle: f64,
    pub severity: String,
    pub timestamp_ms: i64,
}

/// Chat response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub ok: bool,
    pub response: Option<String>,
    pub message: String,
}

/// Reports backend liveness and session count.
#[flutter_rust_bridge::frb(sync)]
pub fn health() -> HealthResponse {
    let service = care_service();
    let health = service.health();
    HealthResponse {
        status: health.status,
        version: service.service_info().version,
        session_count: u32::try_from(health.session_count).unwrap_or(u32::MAX),
    }
}

/// Creates a new session for `user_name`.
///
/// # FFI contract
/// - Every call mints a fresh user id.
/// - Blank names return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(user_name: String) -> LoginResponse {
    match care_service().create_session(user_name.as_str()) {
        Ok(created) => LoginResponse {
            ok: true,
            user_id: Some(created.user_id.to_string()),
            name: Some(created.display_name),
            message: "Logged in.".to_string(),
        },
        Err(err) => LoginResponse {
            ok: false,
            user_id: None,
            name: None,
            message: format!("auth_login failed: {err}"),
        },
    }
}

/// Analyzes an uploaded X-ray and records the measurement.
#[flutter_rust_bridge::frb(sync)]
pub fn analyze_xray(user_id: String, image: Vec<u8>) -> AnalyzeResponse {
    match care_service().record_scan(user_id.as_str(), image.as_slice()) {
        Ok(outcome) => AnalyzeResponse {
            ok: true,
            cobb_angle: Some(outcome.angle),
            severity: Some(outcome.severity.as_str().to_string()),
            date: Some(outcome.date_label),
            message: "Scan analyzed.".to_string(),
        },
        Err(err) => {
            warn!("event=analyze_xray module=ffi status=error");
            AnalyzeResponse {
                ok: false,
                cobb_angle: None,
                severity: None,
                date: None,
                message: format!("analyze_xray failed: {err}"),
            }
        }
    }
}

/// Returns the user's scan history, oldest first. Never fails.
#[flutter_rust_bridge::frb(sync)]
pub fn list_scans(user_id: String) -> Vec<ScanItem> {
    care_service()
        .list_scans(user_id.as_str())
        .iter()
        .map(to_scan_item)
        .collect()
}

/// Returns the tier of the user's most recent scan, if any.
///
/// The client passes this back as `severity` when calling [`chat`].
#[flutter_rust_bridge::frb(sync)]
pub fn current_severity(user_id: String) -> Option<String> {
    care_service()
        .current_severity(user_id.as_str())
        .map(|tier| tier.as_str().to_string())
}

/// Answers a guidance question for a severity tier.
#[flutter_rust_bridge::frb(sync)]
pub fn chat(query: String, severity: String, user_name: String) -> ChatResponse {
    match care_service().answer_query(query.as_str(), severity.as_str(), user_name.as_str()) {
        Ok(reply) => ChatResponse {
            ok: true,
            response: Some(reply.response),
            message: String::new(),
        },
        Err(err) => ChatResponse {
            ok: false,
            response: None,
            message: format!("chat failed: {err}"),
        },
    }
}

fn care_service() -> &'static CareService {
    CARE_SERVICE.get_or_init(CareService::default)
}

fn to_scan_item(record: &ScanRecord) -> ScanItem {
    ScanItem {
        date: record.date_label.clone(),
        angle: record.angle,
        severity: record.severity.as_str().to_string(),
        timestamp_ms: record.captured_at,
    }
}
