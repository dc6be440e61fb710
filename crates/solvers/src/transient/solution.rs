use nalgebra::{DMatrix, DVector, Scalar};

/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Solved every grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a time-stepped solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T: Scalar> {
    /// How the driver terminated.
    pub status: Status,

    /// Times of the solved grid points.
    pub times: Vec<f64>,

    /// Solutions as an `n × steps` matrix, one column per entry of `times`.
    pub states: DMatrix<T>,

    /// Number of grid points solved.
    pub steps: usize,
}

impl<T: Scalar> Solution<T> {
    /// Returns the solution at grid point `step`, if it was solved.
    #[must_use]
    pub fn state(&self, step: usize) -> Option<DVector<T>> {
        (step < self.steps).then(|| self.states.column(step).into_owned())
    }

    /// Returns the solution at the last solved grid point.
    #[must_use]
    pub fn final_state(&self) -> Option<DVector<T>> {
        self.steps.checked_sub(1).and_then(|step| self.state(step))
    }
}
