/// Per-frame animation driver: axis epochs, angle integration and edge transform
use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use nalgebra::Vector3;
use rand::Rng;

use crate::error::{Error, Result};
use crate::geometry::{CubeModel, Edge};
use crate::rotation::Rotation;

/// Radians per second
pub const DEFAULT_ANGULAR_VELOCITY: f64 = 0.1;
/// Angle (radians) after which a new axis epoch begins
pub const DEFAULT_RESET_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub angular_velocity: f64,
    pub reset_threshold: f64,
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.angular_velocity.is_finite() || self.angular_velocity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "angular velocity must be positive, got {}",
                self.angular_velocity
            )));
        }
        if !self.reset_threshold.is_finite() || self.reset_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "reset threshold must be positive, got {}",
                self.reset_threshold
            )));
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            reset_threshold: DEFAULT_RESET_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Next tick draws a new axis and zeroes the angle
    AwaitingReset,
    Rotating,
}

/// Mutable animation state, touched only by [`Animator::advance_frame`]
#[derive(Debug, Clone)]
pub struct AnimationState {
    axis: Vector3<f64>,
    angle: f64,
    epoch_start: Option<Instant>,
    last_frame: Option<Instant>,
    phase: Phase,
    epoch: u64,
}

impl AnimationState {
    fn new() -> Self {
        Self {
            axis: Vector3::zeros(),
            angle: 0.0,
            epoch_start: None,
            last_frame: None,
            phase: Phase::AwaitingReset,
            epoch: 0,
        }
    }

    /// Current rotation axis, as sampled (not normalized)
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }

    /// Radians rotated since the current axis was selected
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn epoch_start(&self) -> Option<Instant> {
        self.epoch_start
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of axes selected so far
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Drives the cube rotation one frame at a time.
///
/// Each epoch holds one random axis while the angle grows with elapsed
/// time; once the angle passes the reset threshold the following frame
/// starts a new epoch with a fresh axis and a zero angle. Display edges
/// are always computed from the untouched model edges using the
/// cumulative angle, so rounding errors never accumulate between frames.
pub struct Animator<R: Rng> {
    model: CubeModel,
    config: AnimationConfig,
    state: AnimationState,
    rng: R,
    display: [Edge; 12],
}

impl<R: Rng> Animator<R> {
    pub fn new(model: CubeModel, config: AnimationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let display = *model.edges();

        Ok(Self {
            model,
            config,
            state: AnimationState::new(),
            rng,
            display,
        })
    }

    /// Advance the animation to `now` and return the edges to draw.
    pub fn advance_frame(&mut self, now: Instant) -> Result<&[Edge; 12]> {
        let elapsed = self.elapsed_since_last_frame(now);

        match self.state.phase {
            Phase::AwaitingReset => self.start_epoch(now),
            Phase::Rotating => {
                self.state.angle += elapsed.as_secs_f64() * self.config.angular_velocity;
                if self.state.angle > self.config.reset_threshold {
                    self.state.phase = Phase::AwaitingReset;
                }
            }
        }

        trace!(
            "frame: angle={:.4} axis=({:.4}, {:.4}, {:.4})",
            self.state.angle,
            self.state.axis.x,
            self.state.axis.y,
            self.state.axis.z
        );

        let rotation = Rotation::new(&self.state.axis, self.state.angle)?;
        let pivot = self.model.centroid();
        for (shown, source) in self.display.iter_mut().zip(self.model.edges()) {
            *shown = source.rotated(&rotation, &pivot);
        }

        Ok(&self.display)
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn model(&self) -> &CubeModel {
        &self.model
    }

    /// Edges produced by the most recent frame
    pub fn display_edges(&self) -> &[Edge; 12] {
        &self.display
    }

    /// Time since the previous frame, clamped to zero if the clock went backwards
    fn elapsed_since_last_frame(&mut self, now: Instant) -> Duration {
        let Some(last) = self.state.last_frame else {
            self.state.last_frame = Some(now);
            return Duration::ZERO;
        };

        if now < last {
            warn!(
                "clock went backwards by {:?}, treating frame as zero elapsed",
                last - now
            );
            return Duration::ZERO;
        }

        self.state.last_frame = Some(now);
        now - last
    }

    fn start_epoch(&mut self, now: Instant) {
        self.state.axis = self.sample_axis();
        self.state.angle = 0.0;
        self.state.epoch_start = Some(now);
        self.state.phase = Phase::Rotating;
        self.state.epoch += 1;

        debug!(
            "epoch {} started: axis=({:.4}, {:.4}, {:.4})",
            self.state.epoch, self.state.axis.x, self.state.axis.y, self.state.axis.z
        );
    }

    /// Components uniform in [0, 1); an all-zero draw is redrawn
    fn sample_axis(&mut self) -> Vector3<f64> {
        loop {
            let axis = Vector3::new(self.rng.gen(), self.rng.gen(), self.rng.gen());
            if axis != Vector3::zeros() {
                return axis;
            }
            debug!("sampled a zero rotation axis, drawing again");
        }
    }
}
