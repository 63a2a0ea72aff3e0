//! World bounds and sensor/motion configuration.
//!
//! # Design
//!
//! The world is a square `[0, world_size) × [0, world_size)`.  It is never
//! materialized as a grid; only the scalar bound is stored, and
//! [`WorldConfig::in_bounds`] is the single place the half-open interval is
//! decided.
//!
//! `measurement_range` keeps the raw caller-facing encoding (a negative value
//! means "no range limit") so configs written for other tools load
//! unchanged.  Code that filters measurements goes through
//! [`WorldConfig::range`] instead of reading the raw number.

use crate::{Point2, SdError, SdResult};

// ── MeasurementRange ──────────────────────────────────────────────────────────

/// Per-axis sensing limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MeasurementRange {
    /// Every landmark is sensed regardless of distance.
    Unbounded,
    /// A landmark is sensed when both `|dx|` and `|dy|` are `<= r`.
    Bounded(f64),
}

impl MeasurementRange {
    /// Decode the raw encoding: negative (or NaN) means unbounded.
    pub fn from_raw(raw: f64) -> Self {
        if raw >= 0.0 {
            MeasurementRange::Bounded(raw)
        } else {
            MeasurementRange::Unbounded
        }
    }

    /// `true` if an offset `(dx, dy)` falls inside the sensing box.
    #[inline]
    pub fn contains(self, dx: f64, dy: f64) -> bool {
        match self {
            MeasurementRange::Unbounded  => true,
            MeasurementRange::Bounded(r) => dx.abs() <= r && dy.abs() <= r,
        }
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Size of the world plus the robot's noise and sensing parameters.
///
/// Typically embedded in a generator config loaded from JSON by the
/// application crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Side length of the square world.  Must be finite and `> 0`.
    pub world_size: f64,

    /// Maximum per-axis sensing offset.  Negative means unbounded.
    pub measurement_range: f64,

    /// Spread of the noise added to each axis of every move.
    pub motion_noise: f64,

    /// Spread of the noise added to each axis of every measurement.
    pub measurement_noise: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size:        100.0,
            measurement_range: 50.0,
            motion_noise:      2.0,
            measurement_noise: 2.0,
        }
    }
}

impl WorldConfig {
    pub fn new(
        world_size:        f64,
        measurement_range: f64,
        motion_noise:      f64,
        measurement_noise: f64,
    ) -> Self {
        Self { world_size, measurement_range, motion_noise, measurement_noise }
    }

    /// Check every field; the first problem found is reported.
    pub fn validate(&self) -> SdResult<()> {
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(SdError::Config(format!(
                "world_size must be finite and > 0, got {}",
                self.world_size
            )));
        }
        if !(self.motion_noise.is_finite() && self.motion_noise >= 0.0) {
            return Err(SdError::Config(format!(
                "motion_noise must be finite and >= 0, got {}",
                self.motion_noise
            )));
        }
        if !(self.measurement_noise.is_finite() && self.measurement_noise >= 0.0) {
            return Err(SdError::Config(format!(
                "measurement_noise must be finite and >= 0, got {}",
                self.measurement_noise
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn range(&self) -> MeasurementRange {
        MeasurementRange::from_raw(self.measurement_range)
    }

    /// Centre of the world, where every robot starts.
    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new(self.world_size / 2.0, self.world_size / 2.0)
    }

    /// `true` if `p` lies in `[0, world_size)` on both axes.
    #[inline]
    pub fn in_bounds(&self, p: Point2) -> bool {
        let bounds = 0.0..self.world_size;
        bounds.contains(&p.x) && bounds.contains(&p.y)
    }
}
