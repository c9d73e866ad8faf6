//! Step observer trait for monitoring chain simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor update progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when an update is fully complete.
    fn on_step_complete(&mut self) {}

    /// Called for each particle pushed out of a solid tile during
    /// collision projection.
    fn on_collision_projected(&mut self, _index: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
