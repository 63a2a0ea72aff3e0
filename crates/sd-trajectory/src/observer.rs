//! Generator observer trait for diagnostics and progress reporting.

use sd_core::Point2;
use tracing::{debug, info, trace};

use crate::{Dataset, Step};

/// Callbacks invoked by [`TrajectoryGenerator::generate`][crate::TrajectoryGenerator::generate]
/// at key points in the episode loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks fire for discarded episodes too;
/// only [`on_accepted`][Self::on_accepted] refers to data that is returned.
///
/// # Example — rejection counter
///
/// ```rust,ignore
/// struct Rejections(u64);
///
/// impl GeneratorObserver for Rejections {
///     fn on_episode_rejected(&mut self, _episode: u64, _unseen: usize) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait GeneratorObserver {
    /// Called before the agent for `episode` (1-based) is spawned.
    fn on_episode_start(&mut self, _episode: u64) {}

    /// Called each time a move is rejected at the world boundary.
    ///
    /// `attempt` counts consecutive rejections within `step`, from 1.
    fn on_move_rejected(&mut self, _episode: u64, _step: usize, _attempt: u64) {}

    /// Called after each step is recorded.
    fn on_step(&mut self, _episode: u64, _step: usize, _record: &Step) {}

    /// Called when an episode ends with `unseen` landmarks never measured.
    /// Its records are dropped right after this returns.
    fn on_episode_rejected(&mut self, _episode: u64, _unseen: usize) {}

    /// Called once with the accepted episode's ground truth and dataset.
    fn on_accepted(
        &mut self,
        _episode:   u64,
        _position:  Point2,
        _landmarks: &[Point2],
        _dataset:   &Dataset,
    ) {}
}

/// A [`GeneratorObserver`] that does nothing.
pub struct NoopObserver;

impl GeneratorObserver for NoopObserver {}

// ── TracingObserver ───────────────────────────────────────────────────────────

/// Reports the episode loop through `tracing`.
///
/// Rejected moves go to `trace`, rejected episodes to `debug`, and the
/// accepted episode (final pose plus landmark ground truth) to `info`.
pub struct TracingObserver;

impl GeneratorObserver for TracingObserver {
    fn on_move_rejected(&mut self, episode: u64, step: usize, attempt: u64) {
        trace!(episode, step, attempt, "move rejected at world boundary");
    }

    fn on_episode_rejected(&mut self, episode: u64, unseen: usize) {
        debug!(episode, unseen, "episode discarded: incomplete landmark coverage");
    }

    fn on_accepted(
        &mut self,
        episode:   u64,
        position:  Point2,
        landmarks: &[Point2],
        dataset:   &Dataset,
    ) {
        info!(
            episode,
            steps = dataset.len(),
            measurements = dataset.measurement_count(),
            x = position.x,
            y = position.y,
            "episode accepted"
        );
        for (i, lm) in landmarks.iter().enumerate() {
            debug!(landmark = i, x = lm.x, y = lm.y, "landmark ground truth");
        }
    }
}

// ── StatsObserver ─────────────────────────────────────────────────────────────

/// Counts what happened during generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsObserver {
    pub episodes_started:  u64,
    pub episodes_rejected: u64,
    /// Rejected moves across all episodes, discarded ones included.
    pub moves_rejected:    u64,
    /// Steps recorded across all episodes, discarded ones included.
    pub steps_recorded:    u64,
}

impl GeneratorObserver for StatsObserver {
    fn on_episode_start(&mut self, _episode: u64) {
        self.episodes_started += 1;
    }

    fn on_move_rejected(&mut self, _episode: u64, _step: usize, _attempt: u64) {
        self.moves_rejected += 1;
    }

    fn on_step(&mut self, _episode: u64, _step: usize, _record: &Step) {
        self.steps_recorded += 1;
    }

    fn on_episode_rejected(&mut self, _episode: u64, _unseen: usize) {
        self.episodes_rejected += 1;
    }
}
