use nalgebra::DVector;

use super::{Conditioning, Method};

/// The result of a single-step linear solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Solution vector `x`.
    pub x: DVector<T>,
    /// Condition number of `A` computed by the conditioning check.
    pub condition_number: T,
    /// Classification that selected the solve method.
    pub conditioning: Conditioning,
}

impl<T> Solution<T> {
    /// Returns the method that produced `x`.
    #[must_use]
    pub fn method(&self) -> Method {
        self.conditioning.method()
    }
}
