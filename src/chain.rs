//! The chain core: position history, Verlet step, constraint relaxation,
//! anchoring, and impulse injection.

use crate::float::Float;
use crate::vec::Vec2;
use crate::config::ChainConfig;
use crate::observer::{StepObserver, NoOpStepObserver};
use alloc::vec::Vec as AllocVec;

/// Pairs closer than this are skipped by the constraint solver for the
/// current pass, so a degenerate pair never divides by zero.
const MIN_PAIR_DISTANCE: f32 = 1e-4;

/// Default direction for seeding when a supplied direction is degenerate.
/// Points down (positive y in screen coordinates).
const SEED_DIRECTION: (f32, f32) = (0.0, 1.0);

/// A simulated rope/chain appendage: an ordered sequence of 2D particles
/// connected by distance constraints.
///
/// Velocity is implicit in the position history (`positions[i] -
/// prev_positions[i]`); there is no velocity field. Impulse application
/// relies on this: it perturbs the stored previous position, and the
/// change materializes as motion on the next [`update`](Chain::update).
///
/// All operations are total. Out-of-range indices are no-ops (mutators)
/// or return zero vectors (accessors); degenerate geometry falls back to
/// fixed defaults instead of producing NaN.
pub struct Chain<F: Float> {
    pub(crate) positions: AllocVec<Vec2<F>>,
    pub(crate) prev_positions: AllocVec<Vec2<F>>,
    segment_length: F,
    config: ChainConfig<F>,
}

impl<F: Float> Chain<F> {
    /// Create a chain of `segment_count` particles at rest spacing
    /// `segment_length`, all at the origin. Counts below 2 clamp to 2.
    pub fn new(segment_count: usize, segment_length: F, config: ChainConfig<F>) -> Self {
        let count = segment_count.max(2);
        let mut positions = AllocVec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec2::zero());
        }
        let prev_positions = positions.clone();
        Chain { positions, prev_positions, segment_length, config }
    }

    /// Create a chain seeded along a ray from `start` in the normalized
    /// `direction`, spaced by `segment_length`. A degenerate direction
    /// falls back to straight down. Both buffers start equal, so the
    /// chain begins at rest.
    pub fn from_ray(
        segment_count: usize,
        segment_length: F,
        start: Vec2<F>,
        direction: Vec2<F>,
        config: ChainConfig<F>,
    ) -> Self {
        let count = segment_count.max(2);
        let dir = direction.normalize_or(Vec2::new(
            F::from_f32(SEED_DIRECTION.0),
            F::from_f32(SEED_DIRECTION.1),
        ));
        let mut positions = AllocVec::with_capacity(count);
        for i in 0..count {
            positions.push(start + dir.scale(segment_length * F::from_f32(i as f32)));
        }
        let prev_positions = positions.clone();
        Chain { positions, prev_positions, segment_length, config }
    }

    /// Place particles at uniform parametric positions between `start`
    /// and `end`, with zero implicit velocity.
    pub fn init_line(&mut self, start: Vec2<F>, end: Vec2<F>) {
        let last = self.positions.len() - 1;
        for i in 0..=last {
            let t = F::from_f32(i as f32) / F::from_f32(last as f32);
            let pos = start.lerp(end, t);
            self.positions[i] = pos;
            self.prev_positions[i] = pos;
        }
    }

    /// Collapse every particle onto `point`, with zero implicit velocity.
    /// Gravity and anchoring unfurl the chain over subsequent updates.
    pub fn init_collapsed(&mut self, point: Vec2<F>) {
        for i in 0..self.positions.len() {
            self.positions[i] = point;
            self.prev_positions[i] = point;
        }
    }

    /// Anchor particle 0 at `pos`. Writes both history entries, zeroing
    /// that particle's implicit velocity for this frame.
    pub fn set_start_anchor(&mut self, pos: Vec2<F>) {
        self.config.anchor_start = true;
        self.positions[0] = pos;
        self.prev_positions[0] = pos;
    }

    /// Anchor the last particle at `pos`.
    pub fn set_end_anchor(&mut self, pos: Vec2<F>) {
        self.config.anchor_end = true;
        let last = self.positions.len() - 1;
        self.positions[last] = pos;
        self.prev_positions[last] = pos;
    }

    /// Free particle 0; it rejoins integration on the next update.
    pub fn release_start_anchor(&mut self) {
        self.config.anchor_start = false;
    }

    /// Free the last particle.
    pub fn release_end_anchor(&mut self) {
        self.config.anchor_end = false;
    }

    /// Advance one frame: Verlet-integrate every unanchored particle,
    /// then run the configured number of constraint relaxation passes.
    ///
    /// `tick` is a monotonically increasing frame counter supplied by the
    /// caller; it modulates the wind term, making the step a pure
    /// function of its inputs. The time step is implicitly 1.
    pub fn update(&mut self, tick: u64) {
        self.update_observed(tick, &mut NoOpStepObserver);
    }

    /// Same as [`update`](Chain::update), reporting progress to `observer`.
    pub fn update_observed<O: StepObserver>(&mut self, tick: u64, observer: &mut O) {
        let accel = self.config.gravity + self.config.wind.scale(wind_factor::<F>(tick));
        self.integrate(accel);
        observer.on_integrate();

        for i in 0..self.config.iterations {
            self.relax_pass();
            observer.on_constraint_iteration(i);
        }
        observer.on_step_complete();
    }

    fn integrate(&mut self, accel: Vec2<F>) {
        let damping = self.config.damping;
        for i in 0..self.positions.len() {
            if self.is_anchored(i) {
                continue;
            }
            let pos = self.positions[i];
            let velocity = (pos - self.prev_positions[i]).scale(damping);
            // History write order matters: prev takes the old position
            // before the new one is stored.
            self.prev_positions[i] = pos;
            self.positions[i] = pos + velocity + accel;
        }
    }

    /// One Gauss-Seidel pass over adjacent pairs. Corrections are applied
    /// in place, so later pairs in the same pass see earlier corrections.
    ///
    /// The constraint is pull-only: pairs longer than the rest length are
    /// drawn together, pairs shorter are left slack.
    fn relax_pass(&mut self) {
        let rest = self.segment_length;
        let stiffness = self.config.stiffness;
        let eps = F::from_f32(MIN_PAIR_DISTANCE);

        for i in 0..self.positions.len() - 1 {
            let delta = self.positions[i + 1] - self.positions[i];
            let dist = delta.length();
            if dist < eps {
                // Degenerate pair; leave it for a later pass.
                continue;
            }
            if dist <= rest {
                // Pushing a compressed pair apart can leapfrog a neighbor
                // and lock a collapsed chain into a collinear fold.
                continue;
            }
            let error = (dist - rest) / dist;
            let correction = delta.scale(error * F::half() * stiffness);

            match (self.is_anchored(i), self.is_anchored(i + 1)) {
                (true, true) => {}
                // The free side absorbs the full correction.
                (true, false) => {
                    self.positions[i + 1] = self.positions[i + 1] - correction.scale(F::two());
                }
                (false, true) => {
                    self.positions[i] = self.positions[i] + correction.scale(F::two());
                }
                (false, false) => {
                    self.positions[i] = self.positions[i] + correction;
                    self.positions[i + 1] = self.positions[i + 1] - correction;
                }
            }
        }
    }

    /// Add `impulse` to the particle's implicit velocity by perturbing
    /// its previous position. No-op when `index` is out of range or the
    /// particle is anchored. The impulse materializes on the next update.
    pub fn apply_impulse(&mut self, index: usize, impulse: Vec2<F>) {
        if index >= self.positions.len() || self.is_anchored(index) {
            return;
        }
        self.prev_positions[index] = self.prev_positions[index] - impulse;
    }

    /// Apply the same impulse to every particle (anchored ones skipped).
    pub fn apply_global_impulse(&mut self, impulse: Vec2<F>) {
        for i in 0..self.positions.len() {
            self.apply_impulse(i, impulse);
        }
    }

    /// Radial impulse falling off linearly from `center`: a particle at
    /// distance `d` within `radius` receives magnitude
    /// `force * (1 - d / radius)` directed away from the center.
    /// Particles at the center or outside the radius are unaffected.
    pub fn apply_explosion_force(&mut self, center: Vec2<F>, force: F, radius: F) {
        let eps = F::from_f32(MIN_PAIR_DISTANCE);
        for i in 0..self.positions.len() {
            let offset = self.positions[i] - center;
            let dist = offset.length();
            if dist < eps || dist >= radius {
                continue;
            }
            let falloff = F::one() - dist / radius;
            let impulse = offset.scale(force * falloff / dist);
            self.apply_impulse(i, impulse);
        }
    }

    pub(crate) fn is_anchored(&self, index: usize) -> bool {
        (index == 0 && self.config.anchor_start)
            || (index == self.positions.len() - 1 && self.config.anchor_end)
    }

    /// Snapshot of all particle positions. A copy: updating the chain
    /// afterwards does not change the returned buffer.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.positions.clone()
    }

    /// Position of one particle, or the zero vector when out of range.
    pub fn position(&self, index: usize) -> Vec2<F> {
        self.positions.get(index).copied().unwrap_or_else(Vec2::zero)
    }

    /// Position of the last particle.
    pub fn tip_position(&self) -> Vec2<F> {
        self.positions[self.positions.len() - 1]
    }

    /// Implicit velocity (`current - previous`, unscaled), or the zero
    /// vector when out of range.
    pub fn velocity(&self, index: usize) -> Vec2<F> {
        match (self.positions.get(index), self.prev_positions.get(index)) {
            (Some(&pos), Some(&prev)) => pos - prev,
            _ => Vec2::zero(),
        }
    }

    /// Sum of consecutive particle distances. Under stress this may
    /// exceed or fall short of the total rest length.
    pub fn total_length(&self) -> F {
        let mut total = F::zero();
        for pair in self.positions.windows(2) {
            total = total + pair[0].distance(pair[1]);
        }
        total
    }

    /// Per-particle orientation angles for sprite placement along the
    /// chain: atan2 of the central-difference direction for interior
    /// particles, one-sided at the ends.
    pub fn segment_rotations(&self) -> AllocVec<F> {
        let n = self.positions.len();
        let mut rotations = AllocVec::with_capacity(n);
        for i in 0..n {
            let dir = if i == 0 {
                self.positions[1] - self.positions[0]
            } else if i == n - 1 {
                self.positions[n - 1] - self.positions[n - 2]
            } else {
                self.positions[i + 1] - self.positions[i - 1]
            };
            rotations.push(F::atan2(dir.y, dir.x));
        }
        rotations
    }

    /// Number of particles. Always at least 2.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rest distance between adjacent particles.
    pub fn segment_length(&self) -> F {
        self.segment_length
    }

    pub fn config(&self) -> &ChainConfig<F> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChainConfig<F> {
        &mut self.config
    }
}

/// Smooth deterministic wind modulation in [0, 1], derived from the
/// caller-supplied tick.
fn wind_factor<F: Float>(tick: u64) -> F {
    let phase = F::from_f32(tick as f32) * F::from_f32(0.1);
    F::half() + F::half() * phase.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_factor_in_unit_range() {
        for tick in 0..200u64 {
            let w: f32 = wind_factor(tick);
            assert!((0.0..=1.0).contains(&w), "tick {}: factor {}", tick, w);
        }
    }

    #[test]
    fn segment_count_clamps_to_two() {
        let chain: Chain<f32> = Chain::new(0, 1.0, ChainConfig::new());
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn out_of_range_accessors_return_zero() {
        let chain: Chain<f32> = Chain::new(3, 1.0, ChainConfig::new());
        assert_eq!(chain.position(99), Vec2::zero());
        assert_eq!(chain.velocity(99), Vec2::zero());
    }
}
