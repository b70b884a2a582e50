//! Step observer trait for monitoring simulation progress.

/// Trait for observing cloth simulation steps.
///
/// Implement this trait to monitor the phases of `advance` (e.g., for
/// debugging, visualization, or performance profiling). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after forces have been accumulated for every point.
    fn on_forces_accumulated(&mut self) {}

    /// Called after all free points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after the strain color buffer has been recomputed.
    fn on_colors_updated(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
