//! Scan measurement model.
//!
//! # Responsibility
//! - Represent a validated angle with tenth-degree precision.
//! - Build immutable scan records from one clock reading.
//!
//! # Invariants
//! - `Angle` is always within `[0, 60]` degrees.
//! - `ScanRecord::severity` equals `SeverityTier::classify(angle)`.

use crate::model::severity::SeverityTier;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Largest measurable angle, in tenths of a degree.
pub const MAX_ANGLE_TENTHS: u16 = 600;

const DATE_LABEL_FORMAT: &str = "%-m/%-d/%Y";

/// Angle validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleError {
    NotFinite,
    OutOfRange(f64),
}

impl Display for AngleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite => write!(f, "angle must be a finite number"),
            Self::OutOfRange(value) => {
                write!(f, "angle {value} is outside the supported range [0, 60]")
            }
        }
    }
}

impl Error for AngleError {}

/// Measured angle in degrees, stored as whole tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle {
    tenths: u16,
}

impl Angle {
    /// Creates an angle from degrees, rounding to one fractional digit.
    ///
    /// # Errors
    /// - `NotFinite` for NaN/infinite input.
    /// - `OutOfRange` when the rounded value leaves `[0, 60]`.
    pub fn new(degrees: f64) -> Result<Self, AngleError> {
        if !degrees.is_finite() {
            return Err(AngleError::NotFinite);
        }
        let tenths = (degrees * 10.0).round();
        if tenths < 0.0 || tenths > f64::from(MAX_ANGLE_TENTHS) {
            return Err(AngleError::OutOfRange(degrees));
        }
        Ok(Self {
            tenths: tenths as u16,
        })
    }

    /// Creates an angle from whole tenths, clamping to the supported maximum.
    pub fn from_tenths(tenths: u16) -> Self {
        Self {
            tenths: tenths.min(MAX_ANGLE_TENTHS),
        }
    }

    pub fn tenths(self) -> u16 {
        self.tenths
    }

    /// Angle in degrees with one fractional digit.
    pub fn degrees(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn severity(self) -> SeverityTier {
        SeverityTier::classify(self.degrees())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.degrees())
    }
}

/// Immutable record of one analyzed scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Local calendar date, `M/D/YYYY`.
    #[serde(rename = "date")]
    pub date_label: String,
    /// Degrees with one fractional digit.
    pub angle: f64,
    pub severity: SeverityTier,
    /// Unix epoch milliseconds.
    #[serde(rename = "timestamp")]
    pub captured_at: i64,
}

impl ScanRecord {
    /// Builds a record for `angle` captured at `now`.
    pub fn capture(angle: Angle, now: DateTime<Local>) -> Self {
        Self {
            date_label: date_label(&now),
            angle: angle.degrees(),
            severity: angle.severity(),
            captured_at: now.timestamp_millis(),
        }
    }
}

/// Formats the human-readable date label for a capture time.
pub fn date_label(now: &DateTime<Local>) -> String {
    now.format(DATE_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{date_label, Angle, AngleError, ScanRecord};
    use crate::model::severity::SeverityTier;
    use chrono::{Local, TimeZone};

    #[test]
    fn new_rounds_to_one_fractional_digit() {
        assert_eq!(Angle::new(24.94).expect("in range").tenths(), 249);
        assert_eq!(Angle::new(24.95).expect("in range").tenths(), 250);
        assert_eq!(Angle::new(60.0).expect("upper bound").degrees(), 60.0);
    }

    #[test]
    fn new_rejects_out_of_range_and_non_finite() {
        assert_eq!(Angle::new(f64::NAN), Err(AngleError::NotFinite));
        assert!(matches!(Angle::new(-0.1), Err(AngleError::OutOfRange(_))));
        assert!(matches!(Angle::new(60.1), Err(AngleError::OutOfRange(_))));
    }

    #[test]
    fn from_tenths_clamps_to_maximum() {
        assert_eq!(Angle::from_tenths(9999).tenths(), 600);
    }

    #[test]
    fn capture_freezes_severity_and_labels_date() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 7, 9, 30, 0)
            .single()
            .expect("unambiguous local time");
        let record = ScanRecord::capture(Angle::from_tenths(400), now);
        assert_eq!(record.angle, 40.0);
        assert_eq!(record.severity, SeverityTier::Severe);
        assert_eq!(record.date_label, "3/7/2024");
        assert_eq!(record.captured_at, now.timestamp_millis());
        assert_eq!(date_label(&now), "3/7/2024");
    }
}
