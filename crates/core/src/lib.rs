//! Core types for the linsys workspace.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`LinearSystem`] — a validated square system `A·x = b`
//! - [`ShapeError`] — why a matrix/vector pair cannot form such a system
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod system;

pub use observer::Observer;
pub use system::{LinearSystem, ShapeError, check_shape, check_square};
