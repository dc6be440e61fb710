//! Time-stepping driver for linear systems with a fixed coefficient matrix.
//!
//! The driver builds an inclusive time grid and runs the single-step
//! [`linear`](crate::linear) solver once per grid point, storing each
//! solution as a column of an `n × T` matrix.
//!
//! Every step solves the same `(A, b)`. Nothing carries over between steps:
//! the initial state is not used to seed a solve, and `b` is not recomputed
//! from previous solutions.
//!
//! # Example
//!
//! ```
//! use linsys_solvers::transient::{Problem, Status};
//! use nalgebra::{dmatrix, dvector};
//!
//! let problem = Problem::new(
//!     dmatrix![2.0, 0.0; 0.0, 2.0],
//!     dvector![4.0, 6.0],
//!     0.0,
//!     1.0,
//!     0.5,
//!     dvector![0.0, 0.0],
//! )?;
//!
//! let solution = problem.solve()?;
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert_eq!(solution.times, vec![0.0, 0.5, 1.0]);
//! assert_eq!(solution.states.shape(), (2, 3));
//! # Ok::<(), linsys_solvers::transient::Error>(())
//! ```

mod action;
mod error;
mod event;
mod grid;
mod problem;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use grid::TimeGrid;
pub use problem::Problem;
pub use solution::{Solution, Status};

use linsys_core::Observer;
use nalgebra::{DMatrix, RealField};

use crate::linear;

/// Solves the problem at every grid point.
///
/// # Algorithm
///
/// 1. Allocate a zero-filled `n × T` buffer, `T` being the grid length.
/// 2. For each grid point:
///    - Run the single-step solver on the problem's `(A, b)`.
///    - Store `x` in the point's column.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], return the columns
///      solved so far.
/// 3. Return the full buffer.
///
/// # Errors
///
/// Returns an error if the config is invalid or if the single-step solve
/// fails at any grid point.
pub fn solve<T, Obs>(
    problem: &Problem<T>,
    config: &linear::Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    config.validate()?;

    let system = problem.system();
    let times = problem.grid().points();
    let mut states = DMatrix::zeros(problem.initial().len(), times.len());

    log::debug!(
        "solving {}-unknown system over {} grid points in [{}, {}]",
        system.dim(),
        times.len(),
        times[0],
        times[times.len() - 1],
    );

    for (step, &time) in times.iter().enumerate() {
        let solution = linear::solve_with(system.a(), system.b(), config)
            .map_err(|source| Error::Linear { step, time, source })?;

        states.set_column(step, &solution.x);

        let event = Event {
            step,
            time,
            solution: &solution,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let steps = step + 1;
            log::debug!("stopped by observer at t = {time} after {steps} grid points");

            return Ok(Solution {
                status: Status::StoppedByObserver,
                times: times[..steps].to_vec(),
                states: states.columns(0, steps).into_owned(),
                steps,
            });
        }
    }

    log::debug!("solved all {} grid points", times.len());

    Ok(Solution {
        status: Status::Complete,
        times: times.to_vec(),
        states,
        steps: times.len(),
    })
}

/// Solves the problem at every grid point without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the config is invalid or if the single-step solve
/// fails at any grid point.
pub fn solve_unobserved<T>(
    problem: &Problem<T>,
    config: &linear::Config<T>,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
{
    solve(problem, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use linsys_core::ShapeError;
    use nalgebra::{DVector, dmatrix, dvector};

    use crate::linear::Conditioning;

    fn diagonal_problem(t_end: f64, dt: f64) -> Problem<f64> {
        Problem::new(
            dmatrix![2.0, 0.0; 0.0, 2.0],
            dvector![4.0, 6.0],
            0.0,
            t_end,
            dt,
            dvector![0.0, 0.0],
        )
        .expect("valid problem")
    }

    #[test]
    fn one_identical_column_per_grid_point() {
        let solution = diagonal_problem(1.0, 0.5).solve().expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.times, vec![0.0, 0.5, 1.0]);
        assert_eq!(solution.states.shape(), (2, 3));

        for column in solution.states.column_iter() {
            assert_relative_eq!(column.into_owned(), dvector![2.0, 3.0]);
        }
    }

    #[test]
    fn initial_state_does_not_affect_solution() {
        let a = dmatrix![3.0, 1.0; 1.0, 2.0];
        let b = dvector![9.0, 8.0];

        let from_zero = Problem::new(a.clone(), b.clone(), 0.0, 1.0, 0.25, dvector![0.0, 0.0])
            .expect("valid problem")
            .solve()
            .expect("should solve");
        let from_other = Problem::new(a, b, 0.0, 1.0, 0.25, dvector![-7.0, 42.0])
            .expect("valid problem")
            .solve()
            .expect("should solve");

        assert_eq!(from_zero, from_other);
        assert_relative_eq!(
            from_zero.final_state().expect("has steps"),
            dvector![2.0, 3.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn singular_system_solves_through_pseudo_inverse() {
        let problem: Problem<f64> = Problem::new(
            DMatrix::zeros(2, 2),
            dvector![1.0, 1.0],
            0.0,
            0.2,
            0.1,
            DVector::zeros(2),
        )
        .expect("valid problem");

        let mut conditioning = Vec::new();
        let solution = solve(
            &problem,
            &linear::Config::default(),
            |event: &Event<'_, f64>| {
                conditioning.push(event.solution.conditioning);
                None
            },
        )
        .expect("should solve");

        assert_eq!(solution.steps, 3);
        assert_eq!(conditioning, vec![Conditioning::IllConditioned; 3]);
        assert!(solution.states.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn observer_sees_every_grid_point() {
        let problem = diagonal_problem(1.0, 0.25);

        let mut seen = Vec::new();
        solve(
            &problem,
            &linear::Config::default(),
            |event: &Event<'_, f64>| {
                seen.push((event.step, event.time));
                None
            },
        )
        .expect("should solve");

        assert_eq!(
            seen,
            vec![(0, 0.0), (1, 0.25), (2, 0.5), (3, 0.75), (4, 1.0)]
        );
    }

    #[test]
    fn observer_can_stop_early() {
        let problem = diagonal_problem(1.0, 0.1);

        let observer = |event: &Event<'_, f64>| {
            if event.step >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution =
            solve(&problem, &linear::Config::default(), observer).expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 4);
        assert_eq!(solution.times.len(), 4);
        assert_eq!(solution.states.shape(), (2, 4));
        assert!(solution.state(4).is_none());
        assert_relative_eq!(solution.state(3).expect("solved"), dvector![2.0, 3.0]);
    }

    #[test]
    fn linear_failure_reports_step_and_time() {
        let problem = diagonal_problem(1.0, 0.5);
        let config = linear::Config {
            singular_value_cutoff: -1.0,
            ..linear::Config::default()
        };

        let result = solve_unobserved(&problem, &config);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig(linear::ConfigError::Cutoff))
        ));

        // A NaN in A passes construction but fails the first solve.
        let problem = Problem::new(
            dmatrix![f64::NAN, 0.0; 0.0, 1.0],
            dvector![1.0, 1.0],
            0.0,
            1.0,
            0.5,
            dvector![0.0, 0.0],
        )
        .expect("shape is valid");

        let result = problem.solve();
        assert!(matches!(
            result,
            Err(Error::Linear {
                step: 0,
                source: linear::Error::NonFinite,
                ..
            })
        ));
    }

    #[test]
    fn errors_on_mismatched_initial_state() {
        let result = Problem::new(
            dmatrix![1.0, 0.0; 0.0, 1.0],
            dvector![1.0, 1.0],
            0.0,
            1.0,
            0.5,
            dvector![0.0, 0.0, 0.0],
        );

        assert!(matches!(
            result,
            Err(Error::InitialStateMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn errors_on_invalid_system_or_grid() {
        let result = Problem::new(
            dmatrix![1.0, 0.0],
            dvector![1.0],
            0.0,
            1.0,
            0.5,
            dvector![0.0],
        );
        assert!(matches!(
            result,
            Err(Error::Shape(ShapeError::NotSquare { .. }))
        ));

        let result = Problem::new(
            dmatrix![1.0],
            dvector![1.0],
            0.0,
            1.0,
            0.0,
            dvector![0.0],
        );
        assert!(matches!(result, Err(Error::InvalidStep { .. })));
    }
}
