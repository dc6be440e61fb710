use std::fmt;

use nalgebra::{DVector, RealField};

/// Whether a coefficient matrix can be solved directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Conditioning {
    /// Condition number below the threshold; solved with LU.
    WellConditioned,
    /// Condition number at or above the threshold (or non-finite); solved
    /// with the SVD pseudo-inverse.
    IllConditioned,
}

/// The solution method chosen for a given conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    Direct,
    PseudoInverse,
}

impl Conditioning {
    /// Returns `true` for [`Conditioning::IllConditioned`].
    #[must_use]
    pub fn is_ill(self) -> bool {
        self == Self::IllConditioned
    }

    /// Returns the solution method used for this conditioning.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::WellConditioned => Method::Direct,
            Self::IllConditioned => Method::PseudoInverse,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct LU solve"),
            Self::PseudoInverse => f.write_str("SVD pseudo-inverse"),
        }
    }
}

/// Result of the conditioning check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment<T> {
    /// Ratio of the largest to the smallest singular value.
    pub condition_number: T,
    pub conditioning: Conditioning,
}

impl<T: RealField + Copy> Assessment<T> {
    /// Classifies a matrix from its singular values.
    pub(super) fn from_singular_values(singular_values: &DVector<T>, threshold: T) -> Self {
        let condition_number = condition_number(singular_values);
        let conditioning = if condition_number.is_finite() && condition_number < threshold {
            Conditioning::WellConditioned
        } else {
            Conditioning::IllConditioned
        };

        Self {
            condition_number,
            conditioning,
        }
    }
}

/// Returns `max(s) / min(s)`.
///
/// A zero smallest singular value gives a non-finite result.
pub(super) fn condition_number<T: RealField + Copy>(singular_values: &DVector<T>) -> T {
    let largest = singular_values
        .iter()
        .copied()
        .fold(T::zero(), RealField::max);
    let smallest = singular_values
        .iter()
        .copied()
        .fold(largest, RealField::min);

    largest / smallest
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::dvector;

    #[test]
    fn ratio_of_extreme_singular_values() {
        // Unordered on purpose.
        assert_relative_eq!(condition_number(&dvector![2.0, 8.0, 4.0]), 4.0);
        assert_relative_eq!(condition_number(&dvector![3.0]), 1.0);
    }

    #[test]
    fn zero_singular_value_is_ill_conditioned() {
        let assessment = Assessment::from_singular_values(&dvector![1.0_f64, 0.0], 1e15);
        assert!(!assessment.condition_number.is_finite());
        assert_eq!(assessment.conditioning, Conditioning::IllConditioned);

        // All-zero matrix: 0/0.
        let assessment = Assessment::from_singular_values(&dvector![0.0_f64, 0.0], 1e15);
        assert_eq!(assessment.conditioning, Conditioning::IllConditioned);
    }

    #[test]
    fn threshold_is_inclusive() {
        let at = Assessment::from_singular_values(&dvector![10.0, 1.0], 10.0);
        assert_eq!(at.conditioning, Conditioning::IllConditioned);

        let below = Assessment::from_singular_values(&dvector![10.0, 1.0], 10.5);
        assert_eq!(below.conditioning, Conditioning::WellConditioned);
    }

    #[test]
    fn method_follows_conditioning() {
        assert_eq!(Conditioning::WellConditioned.method(), Method::Direct);
        assert_eq!(Conditioning::IllConditioned.method(), Method::PseudoInverse);
        assert!(Conditioning::IllConditioned.is_ill());
        assert_eq!(Method::PseudoInverse.to_string(), "SVD pseudo-inverse");
    }
}
