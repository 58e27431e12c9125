//! Angle measurement collaborators.
//!
//! # Responsibility
//! - Define the seam between image analysis and the classification core.
//! - Provide the placeholder random measurer and a fixed test double.
//!
//! # Invariants
//! - Measurers always return a valid `Angle`; they never fail.

use crate::model::scan::{Angle, MAX_ANGLE_TENTHS};
use rand::Rng;

/// Produces an angle measurement from raw image bytes.
pub trait AngleMeasurer: Send + Sync {
    fn measure(&self, image: &[u8]) -> Angle;
}

/// Placeholder measurer: uniform tenths in `[0, 60]` degrees, image ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMeasurer;

impl AngleMeasurer for RandomMeasurer {
    fn measure(&self, _image: &[u8]) -> Angle {
        let tenths = rand::thread_rng().gen_range(0..=MAX_ANGLE_TENTHS);
        Angle::from_tenths(tenths)
    }
}

/// Measurer that always returns the same angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMeasurer {
    angle: Angle,
}

impl FixedMeasurer {
    pub fn new(angle: Angle) -> Self {
        Self { angle }
    }
}

impl AngleMeasurer for FixedMeasurer {
    fn measure(&self, _image: &[u8]) -> Angle {
        self.angle
    }
}
