use crate::linear;

/// Event emitted by the driver after each grid point is solved.
#[derive(Debug, Clone)]
pub struct Event<'a, T> {
    /// Index of the grid point (0 for the first).
    pub step: usize,

    /// Time of the grid point.
    pub time: f64,

    /// Single-step result at this grid point.
    pub solution: &'a linear::Solution<T>,
}
