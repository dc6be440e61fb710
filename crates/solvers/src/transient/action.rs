/// Control actions supported by the time-stepping driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current grid point and return the columns solved so far.
    StopEarly,
}
