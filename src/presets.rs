//! Pre-tuned chain constructors for common appendage looks.
//!
//! Parameter tuples here are tuned by eye against the renderer, not
//! derived; they add no behavior beyond the [`Chain`] invariants.

use crate::float::Float;
use crate::vec::Vec2;
use crate::config::ChainConfig;
use crate::chain::Chain;

/// Slack added to a rope's rest length so it sags instead of pulling taut.
const ROPE_SLACK: f32 = 1.05;

/// A whip: anchored at the handle, loose enough to crack. Moderate
/// energy loss keeps the tip lively without oscillating forever.
pub fn whip<F: Float>(start: Vec2<F>, segment_count: usize, segment_length: F) -> Chain<F> {
    let config = ChainConfig::new()
        .with_gravity(Vec2::new(F::zero(), F::from_f32(0.4)))
        .with_damping(F::from_f32(0.92))
        .with_iterations(4)
        .with_stiffness(F::from_f32(0.9));
    let mut chain = Chain::new(segment_count, segment_length, config);
    chain.init_collapsed(start);
    chain.set_start_anchor(start);
    chain
}

/// A tentacle: anchored at the base, high iteration count and full
/// stiffness so it reads as organic muscle rather than loose rope.
pub fn tentacle<F: Float>(start: Vec2<F>, segment_count: usize, segment_length: F) -> Chain<F> {
    let config = ChainConfig::new()
        .with_gravity(Vec2::new(F::zero(), F::from_f32(0.25)))
        .with_damping(F::from_f32(0.88))
        .with_iterations(12)
        .with_stiffness(F::one());
    let mut chain = Chain::from_ray(
        segment_count,
        segment_length,
        start,
        Vec2::new(F::zero(), F::one()),
        config,
    );
    chain.set_start_anchor(start);
    chain
}

/// A rope strung between two points, both ends anchored, with a little
/// slack in the rest length so it hangs in a catenary-like curve.
pub fn rope<F: Float>(start: Vec2<F>, end: Vec2<F>, segment_count: usize) -> Chain<F> {
    let count = segment_count.max(2);
    let spacing = start.distance(end) / F::from_f32((count - 1) as f32);
    let segment_length = spacing * F::from_f32(ROPE_SLACK);
    let config = ChainConfig::new()
        .with_gravity(Vec2::new(F::zero(), F::from_f32(0.5)))
        .with_damping(F::from_f32(0.98))
        .with_iterations(8)
        .with_stiffness(F::from_f32(0.8));
    let mut chain = Chain::new(count, segment_length, config);
    chain.init_line(start, end);
    chain.set_start_anchor(start);
    chain.set_end_anchor(end);
    chain
}

/// A lightning arc: no gravity, few passes, full stiffness, both ends
/// anchored. Stays nearly straight; the renderer adds the jitter.
pub fn lightning<F: Float>(start: Vec2<F>, end: Vec2<F>, segment_count: usize) -> Chain<F> {
    let count = segment_count.max(2);
    let segment_length = start.distance(end) / F::from_f32((count - 1) as f32);
    let config = ChainConfig::new()
        .with_damping(F::from_f32(0.95))
        .with_iterations(2)
        .with_stiffness(F::one());
    let mut chain = Chain::new(count, segment_length, config);
    chain.init_line(start, end);
    chain.set_start_anchor(start);
    chain.set_end_anchor(end);
    chain
}
