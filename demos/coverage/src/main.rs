//! coverage — generate landmark-complete SLAM datasets and summarize them.
//!
//! Usage:
//!
//! ```text
//! coverage [CONFIG.json] [--runs N] [--json]
//! ```
//!
//! Without a config path the built-in defaults are used (100×100 world,
//! 5 landmarks, 20 steps).  Each of the `N` runs (default 1) draws from its
//! own child stream of the config seed.  `--json` writes the accepted
//! datasets and their ground truth to stdout as an array instead of the
//! human-readable summary.
//! `RUST_LOG=sd_trajectory=debug` shows discarded episodes and landmark
//! ground truth.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use sd_core::{Point2, SimRng};
use sd_trajectory::{
    Dataset, GeneratedData, GeneratorConfig, GeneratorObserver, StatsObserver, Step,
    TracingObserver, TrajectoryGenerator,
};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Caller-side guards applied when the config leaves a loop unbounded.
const DEFAULT_MAX_EPISODES:     u64 = 10_000;
const DEFAULT_MAX_MOVE_RETRIES: u64 = 100_000;

// ── Observer wrapper: log and count ──────────────────────────────────────────

struct DemoObserver {
    log:   TracingObserver,
    stats: StatsObserver,
}

impl GeneratorObserver for DemoObserver {
    fn on_episode_start(&mut self, episode: u64) {
        self.stats.on_episode_start(episode);
    }

    fn on_move_rejected(&mut self, episode: u64, step: usize, attempt: u64) {
        self.stats.on_move_rejected(episode, step, attempt);
        self.log.on_move_rejected(episode, step, attempt);
    }

    fn on_step(&mut self, episode: u64, step: usize, record: &Step) {
        self.stats.on_step(episode, step, record);
    }

    fn on_episode_rejected(&mut self, episode: u64, unseen: usize) {
        self.stats.on_episode_rejected(episode, unseen);
        self.log.on_episode_rejected(episode, unseen);
    }

    fn on_accepted(&mut self, episode: u64, position: Point2, landmarks: &[Point2], dataset: &Dataset) {
        self.log.on_accepted(episode, position, landmarks, dataset);
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(p) => {
            let file = File::open(Path::new(p)).with_context(|| format!("opening {p}"))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {p}"))?
        }
        None => GeneratorConfig::default(),
    };
    config.max_episodes.get_or_insert(DEFAULT_MAX_EPISODES);
    config.max_move_retries.get_or_insert(DEFAULT_MAX_MOVE_RETRIES);
    Ok(config)
}

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    config_path: Option<String>,
    runs:        u64,
    as_json:     bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config_path: None, runs: 1, as_json: false };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.as_json = true,
            "--runs" => {
                let n = iter.next().context("--runs needs a value")?;
                args.runs = n.parse().with_context(|| format!("invalid --runs value {n:?}"))?;
            }
            _ => args.config_path = Some(arg),
        }
    }
    anyhow::ensure!(args.runs > 0, "--runs must be at least 1");
    Ok(args)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coverage=info,sd_trajectory=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let config = load_config(args.config_path.as_deref())?;
    info!(
        world_size = config.world.world_size,
        steps = config.steps,
        num_landmarks = config.num_landmarks,
        seed = config.seed,
        noise = %config.noise_model,
        runs = args.runs,
        "generating datasets"
    );

    let mut root = SimRng::with_noise_model(config.seed, config.noise_model);
    let mut results: Vec<GeneratedData> = Vec::new();

    for run in 0..args.runs {
        let start = Instant::now();
        let mut observer = DemoObserver { log: TracingObserver, stats: StatsObserver::default() };
        let mut generator = TrajectoryGenerator::with_rng(config.clone(), root.child(run))?;
        let data = generator
            .generate(&mut observer)
            .with_context(|| format!("run {run}"))?;
        let elapsed = start.elapsed();

        if !args.as_json {
            print_summary(run, &data, &observer.stats, elapsed);
        }
        results.push(data);
    }

    if args.as_json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &results)?;
        println!();
    }
    Ok(())
}

fn print_summary(run: u64, data: &GeneratedData, stats: &StatsObserver, elapsed: std::time::Duration) {
    println!("=== coverage — slam_data generator, run {run} ===");
    println!(
        "accepted episode {} after {} discarded ({} rejected moves) in {:.2?}",
        data.episodes, stats.episodes_rejected, stats.moves_rejected, elapsed
    );
    println!(
        "{} steps, {} measurements, landmarks observed: {}",
        data.dataset.len(),
        data.dataset.measurement_count(),
        data.dataset.observed_landmarks().len()
    );
    println!();
    let landmarks: Vec<String> = data.agent.landmarks().iter().map(|p| p.to_string()).collect();
    println!("Landmarks: [{}]", landmarks.join(", "));
    println!("{}", data.agent);
    println!();
}
