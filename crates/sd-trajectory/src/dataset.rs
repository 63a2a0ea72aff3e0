//! Plain record types handed to estimators and plotting tools.

use sd_agent::{Measurement, Robot};
use sd_core::{LandmarkId, Point2};

/// One accepted move: the intended displacement and the true position after
/// the noisy move was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub dx: f64,
    pub dy: f64,
    pub x:  f64,
    pub y:  f64,
}

impl Motion {
    #[inline]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// `[dx, dy, x, y]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.dx, self.dy, self.x, self.y]
    }
}

/// Measurements taken at one pose, followed by the move away from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Sensed before `motion` was applied.
    pub measurements: Vec<Measurement>,
    pub motion:       Motion,
}

/// Ordered steps of one accepted episode.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    steps: Vec<Step>,
}

impl Dataset {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Trajectory for plotting: `start`, then the position after each move.
    pub fn poses(&self, start: Point2) -> Vec<Point2> {
        std::iter::once(start)
            .chain(self.steps.iter().map(|s| s.motion.position()))
            .collect()
    }

    /// Sorted, de-duplicated ids of every landmark measured at least once.
    pub fn observed_landmarks(&self) -> Vec<LandmarkId> {
        let mut ids: Vec<LandmarkId> = self
            .steps
            .iter()
            .flat_map(|s| s.measurements.iter().map(|m| m.landmark))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// `true` if every id in `0..num_landmarks` appears in some measurement.
    pub fn covers(&self, num_landmarks: usize) -> bool {
        let mut seen = vec![false; num_landmarks];
        for m in self.steps.iter().flat_map(|s| s.measurements.iter()) {
            if let Some(slot) = seen.get_mut(m.landmark.index()) {
                *slot = true;
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Total measurements across all steps.
    pub fn measurement_count(&self) -> usize {
        self.steps.iter().map(|s| s.measurements.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// An accepted dataset with the agent that produced it.
///
/// `agent` carries the ground truth (final pose, landmark positions) that
/// the dataset's noisy records were generated from.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedData<A = Robot> {
    pub dataset:  Dataset,
    pub agent:    A,
    /// 1-based number of the accepted episode.
    pub episodes: u64,
}
