use linsys_core::LinearSystem;
use nalgebra::{DMatrix, DVector, RealField, Scalar};

use crate::linear;

use super::{Error, Solution, TimeGrid, solve_unobserved};

/// A linear system to be solved at every point of a time grid.
///
/// The coefficient matrix and right-hand side are fixed for the whole run.
/// The initial state only sizes the solution buffer; it does not seed or
/// influence any solve, and `b` is never recomputed from a previous `x`.
/// Callers that need `b` to evolve must drive the steps themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<T: Scalar> {
    system: LinearSystem<T>,
    grid: TimeGrid,
    initial: DVector<T>,
}

impl<T: Scalar> Problem<T> {
    /// Builds a problem from raw parts.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` and `b` do not form a square system, if the
    /// time grid is invalid, or if `x0` does not have one entry per unknown.
    pub fn new(
        a: DMatrix<T>,
        b: DVector<T>,
        t_start: f64,
        t_end: f64,
        dt: f64,
        x0: DVector<T>,
    ) -> Result<Self, Error> {
        let system = LinearSystem::new(a, b)?;
        let grid = TimeGrid::new(t_start, t_end, dt)?;
        Self::from_parts(system, grid, x0)
    }

    /// Builds a problem from an already validated system and grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InitialStateMismatch`] if `x0` does not have one
    /// entry per unknown.
    pub fn from_parts(
        system: LinearSystem<T>,
        grid: TimeGrid,
        x0: DVector<T>,
    ) -> Result<Self, Error> {
        if x0.len() != system.dim() {
            return Err(Error::InitialStateMismatch {
                expected: system.dim(),
                found: x0.len(),
            });
        }

        Ok(Self {
            system,
            grid,
            initial: x0,
        })
    }

    /// Returns the linear system solved at every grid point.
    pub fn system(&self) -> &LinearSystem<T> {
        &self.system
    }

    /// Returns the time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Returns the initial state supplied at construction.
    pub fn initial(&self) -> &DVector<T> {
        &self.initial
    }
}

impl<T: RealField + Copy> Problem<T> {
    /// Solves every grid point with the default linear config.
    ///
    /// # Errors
    ///
    /// Returns an error if the single-step solve fails at any grid point.
    pub fn solve(&self) -> Result<Solution<T>, Error> {
        solve_unobserved(self, &linear::Config::default())
    }
}
