use linsys_core::Observer;

use crate::traits::{CanStopEarly, HasStep, HasTime};

/// Stops a run once `max_steps` grid points have been solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimit {
    pub max_steps: usize,
}

impl StepLimit {
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.step() + 1 >= self.max_steps).then(A::stop_early)
    }
}

/// Stops a run at the first grid point whose time reaches `until`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLimit {
    pub until: f64,
}

impl TimeLimit {
    #[must_use]
    pub fn new(until: f64) -> Self {
        Self { until }
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.until).then(A::stop_early)
    }
}
