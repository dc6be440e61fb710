//! Conditioning-aware dense linear solvers.
//!
//! - [`linear`] — solves a single square system `A·x = b`, choosing between a
//!   direct LU solve and an SVD pseudo-inverse from the condition number of `A`
//! - [`transient`] — repeats the single-step solve over an inclusive time grid
//!   and collects the solutions column by column
//!
//! The top-level [`solve`] and [`solve_dynamic`] functions are shorthands for
//! the common default-config cases.

pub mod linear;
pub mod transient;

use nalgebra::{DMatrix, DVector, RealField};

/// Solves `A·x = b` with the default config.
///
/// See [`linear::solve`].
///
/// # Errors
///
/// Returns an error if the single-step solve fails.
pub fn solve<T>(a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>, linear::Error>
where
    T: RealField + Copy,
{
    linear::solve(a, b)
}

/// Solves `A·x = b` at every point of the grid `[t_start, t_end]` stepped by
/// `dt` and returns the `n × T` solution matrix.
///
/// `x0` must have one entry per unknown but does not influence the result.
/// See [`transient::Problem`].
///
/// # Errors
///
/// Returns an error if the inputs are invalid or any single-step solve fails.
pub fn solve_dynamic<T>(
    a: DMatrix<T>,
    b: DVector<T>,
    t_start: f64,
    t_end: f64,
    dt: f64,
    x0: DVector<T>,
) -> Result<DMatrix<T>, transient::Error>
where
    T: RealField + Copy,
{
    let problem = transient::Problem::new(a, b, t_start, t_end, dt, x0)?;
    Ok(problem.solve()?.states)
}
