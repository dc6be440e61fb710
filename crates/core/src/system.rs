use nalgebra::{DMatrix, DVector, RealField, Scalar};
use thiserror::Error;

/// Reasons a matrix and right-hand side cannot form a square linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("coefficient matrix is empty")]
    Empty,

    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Checks that `a` is a non-empty square matrix and returns its dimension.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] or [`ShapeError::NotSquare`].
pub fn check_square<T: Scalar>(a: &DMatrix<T>) -> Result<usize, ShapeError> {
    let (rows, cols) = a.shape();

    if rows == 0 || cols == 0 {
        return Err(ShapeError::Empty);
    }

    if rows != cols {
        return Err(ShapeError::NotSquare { rows, cols });
    }

    Ok(rows)
}

/// Checks that `a` is a non-empty square matrix and `b` matches its rows.
///
/// Returns the system dimension `n`.
///
/// # Errors
///
/// Returns a [`ShapeError`] describing the first mismatch found.
pub fn check_shape<T: Scalar>(a: &DMatrix<T>, b: &DVector<T>) -> Result<usize, ShapeError> {
    let rows = check_square(a)?;

    if b.len() != rows {
        return Err(ShapeError::DimensionMismatch {
            expected: rows,
            found: b.len(),
        });
    }

    Ok(rows)
}

/// A square linear system `A·x = b` with validated dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: Scalar> {
    a: DMatrix<T>,
    b: DVector<T>,
}

impl<T: Scalar> LinearSystem<T> {
    /// Creates a system from its coefficient matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `a` is empty or not square, or if `b`
    /// does not have one entry per row of `a`.
    pub fn new(a: DMatrix<T>, b: DVector<T>) -> Result<Self, ShapeError> {
        check_shape(&a, &b)?;
        Ok(Self { a, b })
    }

    /// Returns the coefficient matrix.
    pub fn a(&self) -> &DMatrix<T> {
        &self.a
    }

    /// Returns the right-hand side.
    pub fn b(&self) -> &DVector<T> {
        &self.b
    }

    /// Returns the number of unknowns.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Consumes the system and returns `(a, b)`.
    pub fn into_parts(self) -> (DMatrix<T>, DVector<T>) {
        (self.a, self.b)
    }
}

impl<T: RealField + Copy> LinearSystem<T> {
    /// Returns the residual `b - A·x` for a candidate solution.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DimensionMismatch`] if `x` has the wrong length.
    pub fn residual(&self, x: &DVector<T>) -> Result<DVector<T>, ShapeError> {
        if x.len() != self.dim() {
            return Err(ShapeError::DimensionMismatch {
                expected: self.dim(),
                found: x.len(),
            });
        }
        Ok(&self.b - &self.a * x)
    }
}
