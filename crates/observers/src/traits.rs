//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Example
//!
//! ```rust
//! use linsys_core::Observer;
//! use linsys_observers::traits::{CanStopEarly, HasTime};
//!
//! struct StopPastNoon;
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopPastNoon {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() > 12.0).then(A::stop_early)
//!     }
//! }
//! ```

use linsys_solvers::transient;

/// An event that carries a step index.
pub trait HasStep {
    /// Returns the zero-based step index of this event.
    fn step(&self) -> usize;
}

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the time of this event.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<T> HasStep for transient::Event<'_, T> {
    fn step(&self) -> usize {
        self.step
    }
}

impl<T> HasTime for transient::Event<'_, T> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
