use std::fmt::Display;

use linsys_core::Observer;
use linsys_solvers::transient::Event;
use log::Level;

/// Logs every grid point of a time-stepped solve.
///
/// Each record names the step, its time, the conditioning branch taken, and
/// the condition number. The observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<T: Display, A> Observer<Event<'_, T>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_, T>) -> Option<A> {
        log::log!(
            self.level,
            "step {} at t = {}: {:?} (condition number {}), {}",
            event.step,
            event.time,
            event.solution.conditioning,
            event.solution.condition_number,
            event.solution.method(),
        );
        None
    }
}
