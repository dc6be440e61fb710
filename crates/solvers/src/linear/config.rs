use nalgebra::RealField;
use thiserror::Error;

/// Configuration for the single-step linear solver.
///
/// A matrix whose condition number is at or above `ill_conditioned_threshold`
/// is solved through the SVD pseudo-inverse instead of LU. On that path,
/// singular values at or below `singular_value_cutoff` times the largest
/// singular value are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<T> {
    pub ill_conditioned_threshold: T,
    pub singular_value_cutoff: T,
}

/// Errors that can occur when validating a linear solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ill_conditioned_threshold must be finite and at least 1")]
    Threshold,

    #[error("singular_value_cutoff must be finite and non-negative")]
    Cutoff,
}

impl<T: RealField + Copy> Default for Config<T> {
    /// Uses `1/ε` as the threshold and `ε` as the cutoff, where `ε` is the
    /// machine epsilon of `T`.
    fn default() -> Self {
        let epsilon = T::default_epsilon();
        Self {
            ill_conditioned_threshold: T::one() / epsilon,
            singular_value_cutoff: epsilon,
        }
    }
}

impl<T: RealField + Copy> Config<T> {
    /// Returns the default config with a different conditioning threshold.
    #[must_use]
    pub fn with_threshold(threshold: T) -> Self {
        Self {
            ill_conditioned_threshold: threshold,
            ..Self::default()
        }
    }

    /// Validates the threshold and cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is non-finite or below 1, or if the
    /// cutoff is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.ill_conditioned_threshold;
        if !threshold.is_finite() || threshold < T::one() {
            return Err(ConfigError::Threshold);
        }

        let cutoff = self.singular_value_cutoff;
        if !cutoff.is_finite() || cutoff < T::zero() {
            return Err(ConfigError::Cutoff);
        }

        Ok(())
    }
}
