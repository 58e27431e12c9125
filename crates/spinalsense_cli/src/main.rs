//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `spinalsense_core` linkage without the mobile bridge.
//! - Run one deterministic login -> analyze -> history -> chat round trip.

use spinalsense_core::logging::init_logging_from_config;
use spinalsense_core::{Angle, CareService, CoreConfig, FixedMeasurer};

const SMOKE_ANGLE_TENTHS: u16 = 318;

fn main() {
    println!("spinalsense_core ping={}", spinalsense_core::ping());
    println!("spinalsense_core version={}", spinalsense_core::core_version());

    let config = CoreConfig::from_env();
    match init_logging_from_config(&config) {
        Ok(()) => println!("logging dir={}", config.log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    if let Err(err) = run_round_trip() {
        eprintln!("smoke round trip failed: {err}");
        std::process::exit(1);
    }
}

fn run_round_trip() -> Result<(), spinalsense_core::ServiceError> {
    let service = CareService::new(Box::new(FixedMeasurer::new(Angle::from_tenths(
        SMOKE_ANGLE_TENTHS,
    ))));

    let session = service.create_session("Smoke Test")?;
    println!("session user_id={}", session.user_id);

    let outcome = service.record_scan(session.user_id.as_str(), &[])?;
    println!(
        "scan angle={:.1} severity={} date={}",
        outcome.angle, outcome.severity, outcome.date_label
    );

    let history = service.list_scans(session.user_id.as_str());
    println!("history len={}", history.len());

    let reply = service.answer_query(
        "which exercise is safe?",
        outcome.severity.as_str(),
        &session.display_name,
    )?;
    println!("{}", reply.response);
    Ok(())
}
