use thiserror::Error;

/// Error type for checked vector and matrix operations.
///
/// Every variant names the operation that failed together with the offending
/// value and the bound it was checked against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Source data length does not match the fixed element count.
    ///
    /// Returned when bulk-assigning a slice to a vector or matrix whose
    /// element count differs from the slice length.
    ///
    /// # Example
    /// ```
    /// use scoop_math::{MathError, Vector};
    ///
    /// let err = Vector::<f32, 3>::from_slice(&[1.0, 2.0]).unwrap_err();
    /// assert_eq!(err, MathError::size_mismatch("Vector::from_slice", 3, 2));
    /// ```
    #[error("{op}: expected {expected} elements, but got {actual}")]
    SizeMismatch {
        /// Name of the failing operation
        op: &'static str,
        /// Fixed element count of the container
        expected: usize,
        /// Length of the provided data
        actual: usize,
    },

    /// Checked index exceeds the container bounds.
    ///
    /// Row/column accessors resolve to a flat column-major index first, so an
    /// out-of-range row or column is reported with its flat index.
    #[error("{op}: index {index} out of range for {size} elements")]
    IndexOutOfRange {
        /// Name of the failing operation
        op: &'static str,
        /// The invalid index that was attempted
        index: usize,
        /// Number of addressable elements
        size: usize,
    },

    /// Matrix shape is incompatible with the requested operation.
    ///
    /// Shapes are reported as `(rows, cols)`.
    #[error("{op}: expected a {}x{} matrix, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    ShapeMismatch {
        /// Name of the failing operation
        op: &'static str,
        /// Shape required by the operation
        expected: (usize, usize),
        /// Shape of the matrix the operation was applied to
        actual: (usize, usize),
    },
}

impl MathError {
    /// Creates a SizeMismatch error.
    pub fn size_mismatch(op: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            op,
            expected,
            actual,
        }
    }

    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(op: &'static str, index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { op, index, size }
    }

    /// Creates a ShapeMismatch error.
    pub fn shape_mismatch(
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            op,
            expected,
            actual,
        }
    }

    /// Name of the operation that produced the error.
    pub fn op(&self) -> &'static str {
        match self {
            Self::SizeMismatch { op, .. }
            | Self::IndexOutOfRange { op, .. }
            | Self::ShapeMismatch { op, .. } => op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::size_mismatch("Matrix::assign_slice", 4, 3);
        assert_eq!(
            err.to_string(),
            "Matrix::assign_slice: expected 4 elements, but got 3"
        );

        let err = MathError::index_out_of_range("Vector::at", 3, 3);
        assert_eq!(err.to_string(), "Vector::at: index 3 out of range for 3 elements");

        let err = MathError::shape_mismatch("Matrix::as_vector", (2, 1), (2, 2));
        assert_eq!(
            err.to_string(),
            "Matrix::as_vector: expected a 2x1 matrix, got 2x2"
        );
    }

    #[test]
    fn test_op() {
        assert_eq!(MathError::index_out_of_range("at", 0, 0).op(), "at");
        assert_eq!(MathError::size_mismatch("assign", 1, 2).op(), "assign");
        assert_eq!(
            MathError::shape_mismatch("Matrix::as_vector", (3, 1), (3, 2)).op(),
            "Matrix::as_vector"
        );
    }
}
