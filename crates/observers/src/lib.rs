//! Reusable observers for the linsys solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work with the time-stepping driver in `linsys-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasStep`], [`HasTime`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every grid point through the `log` facade
//! - [`StepLimit`] — stops after a fixed number of grid points
//! - [`TimeLimit`] — stops once a given time is reached
//!
//! [`Observer`]: linsys_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod limit;
mod logging;

pub use limit::{StepLimit, TimeLimit};
pub use logging::LogObserver;
