use linsys_core::ShapeError;
use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during a single-step linear solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("system contains non-finite entries")]
    NonFinite,

    #[error("matrix is singular to working precision")]
    Singular,

    #[error("pseudo-inverse failed: {reason}")]
    PseudoInverse { reason: &'static str },
}
