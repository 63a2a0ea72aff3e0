//! Integration tests for sd-trajectory.

use sd_agent::{AgentError, AgentModel, AgentResult, Measurement, Robot};
use sd_core::{LandmarkId, NoiseModel, Point2, Randomness, SimRng, WorldConfig};

use crate::{
    Dataset, GenerateError, GeneratorBuilder, GeneratorConfig, GeneratorObserver, Motion,
    StatsObserver, Step, TrajectoryGenerator,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 10×10 world, unbounded range, no noise, 3 landmarks, unit steps, N = 5.
fn noise_free_small() -> GeneratorBuilder {
    GeneratorBuilder::new(WorldConfig::new(10.0, -1.0, 0.0, 0.0), 5, 3, 1.0)
}

/// Small sensing box relative to the world so that coverage often fails.
fn sparse_coverage(seed: u64) -> GeneratorBuilder {
    GeneratorBuilder::new(WorldConfig::new(20.0, 3.0, 0.5, 0.5), 30, 2, 2.0)
        .seed(seed)
        .max_episodes(100_000)
}

/// Keeps every step of every episode, discarded ones included.
#[derive(Default)]
struct Recorder {
    episodes: Vec<Vec<Step>>,
    rejected: Vec<(u64, usize)>,
}

impl GeneratorObserver for Recorder {
    fn on_episode_start(&mut self, _episode: u64) {
        self.episodes.push(Vec::new());
    }

    fn on_step(&mut self, _episode: u64, _step: usize, record: &Step) {
        if let Some(current) = self.episodes.last_mut() {
            current.push(record.clone());
        }
    }

    fn on_episode_rejected(&mut self, episode: u64, unseen: usize) {
        self.rejected.push((episode, unseen));
    }
}

/// An agent model whose sensor was never implemented.
#[derive(Debug)]
struct BlindAgent(Robot);

impl AgentModel for BlindAgent {
    fn spawn(world: &WorldConfig) -> AgentResult<Self> {
        Robot::new(world.clone()).map(BlindAgent)
    }

    fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()> {
        self.0.place_landmarks(count, rng)
    }

    fn sense<R: Randomness>(&self, _rng: &mut R) -> AgentResult<Vec<Measurement>> {
        Err(AgentError::NoSensorModel)
    }

    fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool {
        self.0.move_by(dx, dy, rng)
    }

    fn position(&self) -> Point2 {
        self.0.position()
    }

    fn landmarks(&self) -> &[Point2] {
        self.0.landmarks()
    }
}

/// Reports one extra landmark beyond the ones it placed.
#[derive(Debug)]
struct StrayAgent(Robot);

impl AgentModel for StrayAgent {
    fn spawn(world: &WorldConfig) -> AgentResult<Self> {
        Robot::new(world.clone()).map(StrayAgent)
    }

    fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()> {
        self.0.place_landmarks(count, rng)
    }

    fn sense<R: Randomness>(&self, rng: &mut R) -> AgentResult<Vec<Measurement>> {
        let mut measurements = self.0.sense(rng)?;
        let stray = LandmarkId(self.0.landmarks().len() as u32);
        measurements.push(Measurement::new(stray, 0.0, 0.0));
        Ok(measurements)
    }

    fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool {
        self.0.move_by(dx, dy, rng)
    }

    fn position(&self) -> Point2 {
        self.0.position()
    }

    fn landmarks(&self) -> &[Point2] {
        self.0.landmarks()
    }
}

/// Comes with an empty landmark set already placed, so placement fails.
#[derive(Debug)]
struct FixedLandmarksAgent(Robot);

impl AgentModel for FixedLandmarksAgent {
    fn spawn(world: &WorldConfig) -> AgentResult<Self> {
        let mut robot = Robot::new(world.clone())?;
        robot.place_landmarks(0, &mut SimRng::new(0))?;
        Ok(FixedLandmarksAgent(robot))
    }

    fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()> {
        self.0.place_landmarks(count, rng)
    }

    fn sense<R: Randomness>(&self, rng: &mut R) -> AgentResult<Vec<Measurement>> {
        self.0.sense(rng)
    }

    fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool {
        self.0.move_by(dx, dy, rng)
    }

    fn position(&self) -> Point2 {
        self.0.position()
    }

    fn landmarks(&self) -> &[Point2] {
        self.0.landmarks()
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GeneratorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.records_per_episode(), 19);
    }

    #[test]
    fn too_few_steps_errors() {
        let world = WorldConfig::new(10.0, -1.0, 0.0, 0.0);
        let result = GeneratorBuilder::new(world, 1, 3, 1.0).build();
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn non_positive_distance_errors() {
        let world = WorldConfig::new(10.0, -1.0, 0.0, 0.0);
        assert!(GeneratorBuilder::new(world.clone(), 5, 3, 0.0).build().is_err());
        assert!(GeneratorBuilder::new(world.clone(), 5, 3, -1.0).build().is_err());
        assert!(GeneratorBuilder::new(world, 5, 3, f64::NAN).build().is_err());
    }

    #[test]
    fn invalid_world_surfaces_as_config_error() {
        let world = WorldConfig::new(0.0, -1.0, 0.0, 0.0);
        let result = GeneratorBuilder::new(world, 5, 3, 1.0).build();
        assert!(matches!(result, Err(GenerateError::Config(msg)) if msg.contains("world_size")));
    }

    #[test]
    fn zero_caps_error() {
        assert!(noise_free_small().max_episodes(0).build().is_err());
        assert!(noise_free_small().max_move_retries(0).build().is_err());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let b = noise_free_small()
            .seed(9)
            .noise_model(NoiseModel::Uniform)
            .max_episodes(4)
            .max_move_retries(8);
        let cfg = b.config();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.noise_model, NoiseModel::Uniform);
        assert_eq!(cfg.max_episodes, Some(4));
        assert_eq!(cfg.max_move_retries, Some(8));
        assert_eq!(cfg.steps, 5);
        assert_eq!(cfg.num_landmarks, 3);
    }

    #[test]
    fn from_config_round_trip() {
        let cfg = GeneratorConfig { seed: 3, ..GeneratorConfig::default() };
        let generator = TrajectoryGenerator::from_config(cfg.clone()).unwrap();
        assert_eq!(generator.config(), &cfg);
        let generator = GeneratorBuilder::from_config(cfg.clone()).build().unwrap();
        assert_eq!(generator.config(), &cfg);
    }
}

// ── Small noise-free scenario ─────────────────────────────────────────────────

#[cfg(test)]
mod noise_free_tests {
    use super::*;

    #[test]
    fn accepted_first_episode_with_four_records() {
        let mut stats = StatsObserver::default();
        let data = noise_free_small().seed(1).build().unwrap().generate(&mut stats).unwrap();

        assert_eq!(data.episodes, 1);
        assert_eq!(data.dataset.len(), 4);
        assert_eq!(data.agent.landmarks().len(), 3);
        assert_eq!(stats.episodes_rejected, 0);
        assert_eq!(stats.moves_rejected, 0);
        assert!(data.dataset.covers(3));
    }

    #[test]
    fn every_sense_returns_exact_offsets() {
        let data = noise_free_small().seed(2).build().unwrap().generate_silent().unwrap();
        let landmarks = data.agent.landmarks();
        let poses = data.dataset.poses(Point2::new(5.0, 5.0));

        for (step, pose) in data.dataset.iter().zip(&poses) {
            assert_eq!(step.measurements.len(), 3);
            for (i, m) in step.measurements.iter().enumerate() {
                assert_eq!(m.landmark, LandmarkId(i as u32));
                assert_eq!(m.dx, landmarks[i].x - pose.x);
                assert_eq!(m.dy, landmarks[i].y - pose.y);
            }
        }
    }

    #[test]
    fn unit_steps_chain_positions() {
        let data = noise_free_small().seed(3).build().unwrap().generate_silent().unwrap();
        let mut prev = Point2::new(5.0, 5.0);
        for step in &data.dataset {
            let Motion { dx, dy, x, y } = step.motion;
            assert!((dx.hypot(dy) - 1.0).abs() < 1e-12);
            assert_eq!(x, prev.x + dx);
            assert_eq!(y, prev.y + dy);
            prev = step.motion.position();
        }
        assert_eq!(data.agent.position(), prev);
    }

    #[test]
    fn zero_landmarks_accepts_with_empty_measurements() {
        let world = WorldConfig::new(10.0, -1.0, 0.0, 0.0);
        let data = GeneratorBuilder::new(world, 6, 0, 1.0)
            .build()
            .unwrap()
            .generate_silent()
            .unwrap();
        assert_eq!(data.episodes, 1);
        assert_eq!(data.dataset.len(), 5);
        assert_eq!(data.dataset.measurement_count(), 0);
        assert!(data.dataset.covers(0));
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn positions_stay_inside_world() {
        for seed in 0..20 {
            let world = WorldConfig::new(10.0, -1.0, 0.5, 0.5);
            let data = GeneratorBuilder::new(world.clone(), 60, 3, 4.0)
                .seed(seed)
                .build()
                .unwrap()
                .generate_silent()
                .unwrap();
            for step in &data.dataset {
                assert!(
                    world.in_bounds(step.motion.position()),
                    "seed {seed}: {:?} left the world",
                    step.motion
                );
            }
        }
    }

    #[test]
    fn uniform_noise_model_stays_inside_world() {
        let world = WorldConfig::new(10.0, -1.0, 1.0, 1.0);
        let mut stats = StatsObserver::default();
        let data = GeneratorBuilder::new(world.clone(), 80, 3, 3.0)
            .noise_model(NoiseModel::Uniform)
            .build()
            .unwrap()
            .generate(&mut stats)
            .unwrap();
        assert!(data.dataset.iter().all(|s| world.in_bounds(s.motion.position())));
        assert!(stats.moves_rejected > 0, "80 steps of length 3 in a 10×10 world should hit a wall");
    }

    #[test]
    fn accepted_dataset_covers_every_landmark() {
        for seed in 0..20 {
            let data = sparse_coverage(seed).build().unwrap().generate_silent().unwrap();
            assert!(data.dataset.covers(2), "seed {seed}");
            assert_eq!(data.dataset.observed_landmarks(), vec![LandmarkId(0), LandmarkId(1)]);
        }
    }

    #[test]
    fn discarded_episodes_do_not_leak() {
        let mut saw_rejection = false;
        for seed in 0..40 {
            let mut rec = Recorder::default();
            let data = sparse_coverage(seed).build().unwrap().generate(&mut rec).unwrap();

            assert_eq!(rec.episodes.len() as u64, data.episodes);
            assert_eq!(rec.rejected.len() as u64, data.episodes - 1);
            let accepted = rec.episodes.last().unwrap();
            assert_eq!(data.dataset.steps(), accepted.as_slice());
            for (episode, unseen) in &rec.rejected {
                assert!(*unseen > 0, "episode {episode} rejected with full coverage");
            }
            saw_rejection |= data.episodes > 1;
        }
        assert!(saw_rejection, "a 6×6 sensing box in a 20×20 world should miss a landmark sometimes");
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = sparse_coverage(17).build().unwrap().generate_silent().unwrap();
        let b = sparse_coverage(17).build().unwrap().generate_silent().unwrap();
        assert_eq!(a.dataset, b.dataset);
        assert_eq!(a.episodes, b.episodes);
        assert_eq!(a.agent, b.agent);

        let c = sparse_coverage(18).build().unwrap().generate_silent().unwrap();
        assert_ne!(a.agent.landmarks(), c.agent.landmarks());
    }

    #[test]
    fn child_streams_reproduce_per_run() {
        let run = |offset: u64| {
            let rng = SimRng::new(42).child(offset);
            sparse_coverage(42).build_with_rng(rng).unwrap().generate_silent().unwrap()
        };
        let first = run(1);
        assert_eq!(first.dataset, run(1).dataset);
        assert_ne!(first.dataset, run(2).dataset);
    }

    #[test]
    fn stats_count_every_episode() {
        let mut stats = StatsObserver::default();
        let data = sparse_coverage(5).build().unwrap().generate(&mut stats).unwrap();
        assert_eq!(stats.episodes_started, data.episodes);
        assert_eq!(stats.episodes_rejected, data.episodes - 1);
        assert_eq!(stats.steps_recorded, data.episodes * 29);
    }
}

// ── Safety valves and fatal errors ────────────────────────────────────────────

#[cfg(test)]
mod limit_tests {
    use super::*;

    #[test]
    fn overlong_distance_hits_move_retry_limit() {
        let world = WorldConfig::new(10.0, -1.0, 0.0, 0.0);
        let mut stats = StatsObserver::default();
        let err = GeneratorBuilder::new(world, 5, 3, 100.0)
            .max_move_retries(500)
            .build()
            .unwrap()
            .generate(&mut stats)
            .unwrap_err();
        assert_eq!(err, GenerateError::MoveRetryLimit { limit: 500, episode: 1, step: 0 });
        assert_eq!(stats.moves_rejected, 500);
        assert_eq!(stats.steps_recorded, 0);
    }

    #[test]
    fn unreachable_coverage_hits_episode_limit() {
        // Range 0 with noise-free sensing needs a landmark exactly under the
        // robot, so no episode ever covers anything.
        let world = WorldConfig::new(10.0, 0.0, 0.0, 0.0);
        let mut stats = StatsObserver::default();
        let err = GeneratorBuilder::new(world, 10, 4, 1.0)
            .max_episodes(3)
            .build()
            .unwrap()
            .generate(&mut stats)
            .unwrap_err();
        assert_eq!(err, GenerateError::EpisodeLimit { limit: 3 });
        assert_eq!(stats.episodes_started, 3);
        assert_eq!(stats.episodes_rejected, 3);
    }

    #[test]
    fn agent_without_sensor_fails_before_any_episode() {
        let mut stats = StatsObserver::default();
        let err = noise_free_small()
            .build()
            .unwrap()
            .with_agent::<BlindAgent>()
            .generate(&mut stats)
            .unwrap_err();
        assert_eq!(err, GenerateError::Precondition(AgentError::NoSensorModel));
        assert_eq!(stats, StatsObserver::default());
    }

    #[test]
    fn failed_placement_fails_precondition() {
        let mut stats = StatsObserver::default();
        let err = noise_free_small()
            .build()
            .unwrap()
            .with_agent::<FixedLandmarksAgent>()
            .generate(&mut stats)
            .unwrap_err();
        assert_eq!(err, GenerateError::Precondition(AgentError::LandmarksAlreadyPlaced(0)));
        assert_eq!(stats, StatsObserver::default());
    }

    #[test]
    fn landmark_id_outside_range_is_an_error() {
        let err = noise_free_small()
            .build()
            .unwrap()
            .with_agent::<StrayAgent>()
            .generate_silent()
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnknownLandmark {
                landmark:      LandmarkId(3),
                num_landmarks: 3,
                episode:       1,
                step:          0,
            }
        );
    }

    #[test]
    fn huge_step_count_does_not_preallocate() {
        // Every move leaves the world, so the episode stops at step 0.
        let world = WorldConfig::new(10.0, -1.0, 0.0, 0.0);
        let err = GeneratorBuilder::new(world, usize::MAX, 0, 100.0)
            .max_move_retries(3)
            .build()
            .unwrap()
            .generate_silent()
            .unwrap_err();
        assert_eq!(err, GenerateError::MoveRetryLimit { limit: 3, episode: 1, step: 0 });
    }

    #[test]
    fn precondition_passes_for_robot() {
        let mut generator = noise_free_small().build().unwrap();
        assert!(generator.check_sensing().is_ok());
    }

    #[test]
    fn custom_rng_is_used() {
        let a = noise_free_small()
            .build_with_rng(SimRng::new(77))
            .unwrap()
            .generate_silent()
            .unwrap();
        let b = noise_free_small().seed(77).build().unwrap().generate_silent().unwrap();
        assert_eq!(a.dataset, b.dataset);
    }

    #[test]
    fn tracing_observer_runs_without_subscriber() {
        let data = noise_free_small()
            .build()
            .unwrap()
            .generate(&mut crate::TracingObserver)
            .unwrap();
        assert_eq!(data.dataset.len(), 4);
    }
}

// ── Dataset helpers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod dataset_tests {
    use super::*;

    fn step(ids: &[u32], x: f64, y: f64) -> Step {
        Step {
            measurements: ids.iter().map(|&i| Measurement::new(LandmarkId(i), 0.5, -0.5)).collect(),
            motion:       Motion { dx: 1.0, dy: 0.0, x, y },
        }
    }

    #[test]
    fn poses_start_with_origin() {
        let ds = Dataset::new(vec![step(&[], 6.0, 5.0), step(&[], 7.0, 5.0)]);
        assert_eq!(
            ds.poses(Point2::new(5.0, 5.0)),
            vec![Point2::new(5.0, 5.0), Point2::new(6.0, 5.0), Point2::new(7.0, 5.0)]
        );
    }

    #[test]
    fn observed_landmarks_sorted_and_unique() {
        let ds = Dataset::new(vec![step(&[2, 0], 1.0, 1.0), step(&[0, 2, 1], 2.0, 1.0)]);
        assert_eq!(ds.observed_landmarks(), vec![LandmarkId(0), LandmarkId(1), LandmarkId(2)]);
        assert_eq!(ds.measurement_count(), 5);
    }

    #[test]
    fn covers_requires_every_index() {
        let ds = Dataset::new(vec![step(&[0], 1.0, 1.0), step(&[2], 2.0, 1.0)]);
        assert!(!ds.covers(3));
        assert!(ds.covers(1));
        assert!(Dataset::default().covers(0));
        assert!(!Dataset::default().covers(1));
    }

    #[test]
    fn motion_array_layout() {
        let m = Motion { dx: 1.0, dy: -2.0, x: 3.0, y: 4.0 };
        assert_eq!(m.to_array(), [1.0, -2.0, 3.0, 4.0]);
    }
}
