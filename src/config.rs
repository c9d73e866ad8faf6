//! Configuration for the chain simulation.

use crate::float::Float;
use crate::vec::Vec2;

/// Per-chain simulation parameters.
///
/// # Builder Pattern
/// ```
/// use lash::config::ChainConfig;
/// use lash::vec::Vec2;
///
/// let config: ChainConfig<f32> = ChainConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.5))
///     .with_wind(Vec2::new(0.2, 0.0))
///     .with_damping(0.95)
///     .with_iterations(8)
///     .with_stiffness(0.9);
/// ```
pub struct ChainConfig<F: Float> {
    /// Gravity acceleration, applied every update. Default: zero.
    pub gravity: Vec2<F>,
    /// Wind acceleration, modulated by a smooth tick-derived factor.
    /// Default: zero.
    pub wind: Vec2<F>,
    /// Fraction of implicit velocity retained each step, in [0, 1].
    /// 1.0 = no energy loss. Default: 0.98.
    pub damping: F,
    /// Constraint relaxation passes per update. More passes = more rigid
    /// but slower. Default: 4.
    pub iterations: usize,
    /// Fraction of the computed correction applied per pass, in [0, 1].
    /// Default: 1.0.
    pub stiffness: F,
    /// Whether particle 0 is externally driven and exempt from
    /// integration and constraint correction. Default: false.
    pub anchor_start: bool,
    /// Same for the last particle. Default: false.
    pub anchor_end: bool,
}

impl<F: Float> ChainConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ChainConfig {
            gravity: Vec2::zero(),
            wind: Vec2::zero(),
            damping: F::from_f32(0.98),
            iterations: 4,
            stiffness: F::one(),
            anchor_start: false,
            anchor_end: false,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the wind vector.
    pub fn with_wind(mut self, wind: Vec2<F>) -> Self {
        self.wind = wind;
        self
    }

    /// Set the damping factor, clamped to [0, 1].
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.clamp(F::zero(), F::one());
        self
    }

    /// Set the number of constraint passes (at least 1).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set the stiffness, clamped to [0, 1].
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness.clamp(F::zero(), F::one());
        self
    }

    /// Anchor or free the start particle.
    pub fn with_start_anchored(mut self, anchored: bool) -> Self {
        self.anchor_start = anchored;
        self
    }

    /// Anchor or free the end particle.
    pub fn with_end_anchored(mut self, anchored: bool) -> Self {
        self.anchor_end = anchored;
        self
    }
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
