//! A single landmark observation.

use sd_core::LandmarkId;

/// Noisy offset from the robot to one landmark, as returned by
/// [`Robot::sense`][crate::Robot::sense].
///
/// Values are not clipped after noise is applied, so `dx`/`dy` may lie
/// slightly outside the measurement range that admitted them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub landmark: LandmarkId,
    pub dx:       f64,
    pub dy:       f64,
}

impl Measurement {
    #[inline]
    pub fn new(landmark: LandmarkId, dx: f64, dy: f64) -> Self {
        Self { landmark, dx, dy }
    }
}
