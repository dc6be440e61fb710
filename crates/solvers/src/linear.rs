//! Single-step solver for square linear systems `A·x = b`.
//!
//! The solver first checks how well-conditioned `A` is, then picks a method:
//!
//! - **Well-conditioned** (condition number below the threshold): direct LU
//!   solve.
//! - **Ill-conditioned**: least-squares solution through the SVD
//!   pseudo-inverse, `x = V·diag(1/S)·Uᵀ·b`, with negligible singular values
//!   treated as zero.
//!
//! The default threshold is `1/ε` for the scalar type in use. The branch
//! decision is reported through the `log` facade at `info` level.
//!
//! # Example
//!
//! ```
//! use linsys_solvers::linear;
//! use nalgebra::{dmatrix, dvector};
//!
//! let x = linear::solve(&dmatrix![2.0, 0.0; 0.0, 2.0], &dvector![4.0, 6.0])?;
//! assert_eq!(x, dvector![2.0, 3.0]);
//! # Ok::<(), linear::Error>(())
//! ```

mod conditioning;
mod config;
mod error;
mod solution;

pub use conditioning::{Assessment, Conditioning, Method};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::Solution;

use linsys_core::{check_shape, check_square};
use nalgebra::{DMatrix, DVector, RealField};

/// Solves `A·x = b` with the default config and returns `x`.
///
/// # Errors
///
/// Returns an error if the shapes do not form a square system, if any entry
/// is non-finite, or if the chosen method fails.
pub fn solve<T>(a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    solve_with(a, b, &Config::default()).map(|solution| solution.x)
}

/// Solves `A·x = b` and reports how the solution was obtained.
///
/// # Errors
///
/// Returns an error if the config is invalid, if the shapes do not form a
/// square system, if any entry is non-finite, if LU hits a zero pivot on the
/// direct path, or if the pseudo-inverse cannot be formed.
pub fn solve_with<T>(
    a: &DMatrix<T>,
    b: &DVector<T>,
    config: &Config<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    config.validate()?;
    check_shape(a, b)?;
    ensure_finite(a.iter().chain(b.iter()))?;

    let assessment = classify(a, config);

    let x = match assessment.conditioning.method() {
        Method::Direct => direct(a, b)?,
        Method::PseudoInverse => pseudo_inverse(a, b, config.singular_value_cutoff)?,
    };

    Ok(Solution {
        x,
        condition_number: assessment.condition_number,
        conditioning: assessment.conditioning,
    })
}

/// Runs the conditioning check on `A` without solving.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `A` is empty or not square,
/// or if any entry is non-finite.
pub fn assess<T>(a: &DMatrix<T>, config: &Config<T>) -> Result<Assessment<T>, Error>
where
    T: RealField + Copy,
{
    config.validate()?;
    check_square(a)?;
    ensure_finite(a.iter())?;

    Ok(classify(a, config))
}

/// Computes the condition number, classifies it, and logs the branch.
fn classify<T>(a: &DMatrix<T>, config: &Config<T>) -> Assessment<T>
where
    T: RealField + Copy,
{
    let singular_values = a.clone().svd(false, false).singular_values;
    let threshold = config.ill_conditioned_threshold;
    let assessment = Assessment::from_singular_values(&singular_values, threshold);

    match assessment.conditioning {
        Conditioning::WellConditioned => log::info!(
            "matrix is well-conditioned (condition number {}); using {}",
            assessment.condition_number,
            Method::Direct,
        ),
        Conditioning::IllConditioned => log::info!(
            "matrix is ill-conditioned (condition number {} >= {threshold}); using {}",
            assessment.condition_number,
            Method::PseudoInverse,
        ),
    }

    assessment
}

fn direct<T>(a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    a.clone().lu().solve(b).ok_or(Error::Singular)
}

/// Applies the Moore-Penrose pseudo-inverse of `A` to `b`.
///
/// Singular values at or below `cutoff · max(S)` contribute nothing.
fn pseudo_inverse<T>(a: &DMatrix<T>, b: &DVector<T>, cutoff: T) -> Result<DVector<T>, Error>
where
    T: RealField + Copy,
{
    let svd = a.clone().svd(true, true);
    let largest = svd
        .singular_values
        .iter()
        .copied()
        .fold(T::zero(), RealField::max);

    svd.solve(b, cutoff * largest)
        .map_err(|reason| Error::PseudoInverse { reason })
}

fn ensure_finite<'a, T>(mut values: impl Iterator<Item = &'a T>) -> Result<(), Error>
where
    T: RealField + Copy,
{
    if values.all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite)
    }
}
