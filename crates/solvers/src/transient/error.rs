use linsys_core::ShapeError;
use thiserror::Error;

use crate::linear;

/// Errors that can occur while building or running a time-stepped solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("initial state has length {found}, expected {expected}")]
    InitialStateMismatch { expected: usize, found: usize },

    #[error("time bound is not finite: {value}")]
    NonFiniteTime { value: f64 },

    #[error("time step must be finite and positive, got {dt}")]
    InvalidStep { dt: f64 },

    #[error("end time {end} precedes start time {start}")]
    ReversedSpan { start: f64, end: f64 },

    #[error("grid over [{start}, {end}] with step {dt} exceeds {max} points")]
    TooManyPoints {
        start: f64,
        end: f64,
        dt: f64,
        max: usize,
    },

    #[error("step {dt} is below floating-point resolution near t = {time}")]
    UnresolvedStep { time: f64, dt: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] linear::ConfigError),

    #[error("linear solve failed at step {step} (t = {time})")]
    Linear {
        step: usize,
        time: f64,
        #[source]
        source: linear::Error,
    },
}
