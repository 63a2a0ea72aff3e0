//! The `Robot`: true pose, ground-truth landmarks, and noisy primitives.

use std::fmt;

use sd_core::{LandmarkId, Point2, Randomness, SdError, WorldConfig};

use crate::{AgentError, AgentResult, Measurement};

/// A point robot in a square world with a fixed set of landmarks.
///
/// The pose and the landmark positions are ground truth.  Everything the
/// robot reports through [`sense`][Self::sense] is perturbed by
/// `measurement_noise`, and every [`move_by`][Self::move_by] is perturbed by
/// `motion_noise`, both drawn from the caller's [`Randomness`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    world:     WorldConfig,
    x:         f64,
    y:         f64,
    /// `None` until `place_landmarks` runs; never changes afterwards.
    landmarks: Option<Vec<Point2>>,
}

impl Robot {
    /// Create a robot at the centre of the world with no landmarks.
    pub fn new(world: WorldConfig) -> AgentResult<Self> {
        world.validate()?;
        let start = world.center();
        Ok(Self {
            world,
            x: start.x,
            y: start.y,
            landmarks: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.world
    }

    /// Ground-truth landmark positions in index order.  Empty until
    /// [`place_landmarks`][Self::place_landmarks] has run.
    pub fn landmarks(&self) -> &[Point2] {
        self.landmarks.as_deref().unwrap_or(&[])
    }

    pub fn landmark(&self, id: LandmarkId) -> Option<Point2> {
        self.landmarks().get(id.index()).copied()
    }

    #[inline]
    pub fn has_landmarks(&self) -> bool {
        self.landmarks.is_some()
    }

    // ── Landmarks ─────────────────────────────────────────────────────────

    /// Draw `count` landmarks uniformly in `[0, world_size)` on both axes.
    ///
    /// May be called once.  `count == 0` is allowed and yields an empty (but
    /// placed) landmark set.
    pub fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()> {
        if let Some(existing) = &self.landmarks {
            return Err(AgentError::LandmarksAlreadyPlaced(existing.len()));
        }
        if u32::try_from(count).is_err() {
            return Err(SdError::Config(format!("too many landmarks: {count}")).into());
        }

        let size = self.world.world_size;
        let landmarks = (0..count)
            .map(|_| {
                let x = rng.uniform() * size;
                let y = rng.uniform() * size;
                Point2::new(x, y)
            })
            .collect();
        self.landmarks = Some(landmarks);
        Ok(())
    }

    // ── Sensing ───────────────────────────────────────────────────────────

    /// Noisy relative offsets to every landmark inside the measurement range.
    ///
    /// Output follows landmark index order.  Noise is drawn for every
    /// landmark (in range or not) before filtering, so the number of draws
    /// does not depend on where the robot is.  Pose is not modified.
    pub fn sense<R: Randomness>(&self, rng: &mut R) -> AgentResult<Vec<Measurement>> {
        let landmarks = self.landmarks.as_ref().ok_or(AgentError::LandmarksNotPlaced)?;
        let range = self.world.range();
        let noise = self.world.measurement_noise;
        let here  = self.position();

        let mut measurements = Vec::with_capacity(landmarks.len());
        for (i, &lm) in landmarks.iter().enumerate() {
            let truth = here.offset_to(lm);
            let dx = truth.x + rng.noise(noise);
            let dy = truth.y + rng.noise(noise);
            if range.contains(dx, dy) {
                measurements.push(Measurement::new(LandmarkId(i as u32), dx, dy));
            }
        }
        Ok(measurements)
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Attempt to move by `(dx, dy)` plus motion noise.
    ///
    /// Returns `false` and leaves the pose unchanged if the noisy target
    /// falls outside `[0, world_size)` on either axis.
    pub fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool {
        let noise = self.world.motion_noise;
        let target = Point2::new(
            self.x + dx + rng.noise(noise),
            self.y + dy + rng.noise(noise),
        );
        if !self.world.in_bounds(target) {
            return false;
        }
        self.x = target.x;
        self.y = target.y;
        true
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Robot: [x={:.5} y={:.5}]", self.x, self.y)
    }
}
