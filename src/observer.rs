//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor integration and collisions (debugging,
/// visualization, profiling). All methods have default no-op
/// implementations. Times are passed as `f64` regardless of the
/// simulation's scalar type.
pub trait StepObserver {
    /// Called after the body at `index` has been integrated.
    fn on_integrate(&mut self, _index: usize) {}

    /// Called when the body at `index` bounced off the floor.
    fn on_bounce(&mut self, _index: usize) {}

    /// Called when a tick is fully complete, with the new simulation time.
    fn on_tick_complete(&mut self, _time: f64) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
