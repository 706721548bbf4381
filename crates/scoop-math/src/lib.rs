#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `scoop-math` provides two generic value types for graphics, physics and
//! simulation code:
//!
//! - [`Vector<T, N>`]: a fixed-length numeric tuple backed by `[T; N]`
//! - [`Matrix<T, R, C>`]: a fixed `R x C` grid stored column-major, where the
//!   element at row `r` and column `c` lives at flat index `c * R + r`
//!
//! Both are plain `Copy` values without heap allocation. Dimensions are const
//! generics, so shape compatibility of arithmetic is checked at compile time:
//! [`Vector::cross`] only exists for three-element vectors and
//! [`Matrix::translation`] / [`Matrix::scaling`] only for 4x4 matrices.
//! Runtime checks remain for operations whose input size is only known at run
//! time (slice assignment, checked indexing) and report a [`MathError`].
//!
//! # Quick Start
//!
//! ```rust
//! use scoop_math::{DMatrix4, DVector3, Matrix, Vector};
//!
//! let a: DVector3 = Vector::new([1.0, 2.0, 3.0]);
//! assert_eq!(a.magnitude(), 14f64.sqrt());
//!
//! let t = DMatrix4::translation(&a);
//! let s = DMatrix4::scaling(&Vector::splat(2.0));
//! let p = t * s * Vector::new([1.0, 1.0, 1.0, 1.0]);
//! assert_eq!(p, Vector::new([3.0, 4.0, 5.0, 1.0]));
//!
//! let m = Matrix::<f32, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! assert_eq!(m.transpose().shape(), (3, 2));
//! ```
//!
//! Checked access and assignment:
//!
//! ```rust
//! use scoop_math::{MathError, Vector};
//!
//! let mut v = Vector::<i32, 3>::zeros();
//! v.assign_slice(&[1, 2, 3])?;
//! assert_eq!(*v.at(2)?, 3);
//! assert!(matches!(v.at(3), Err(MathError::IndexOutOfRange { .. })));
//! # Ok::<(), MathError>(())
//! ```
//!
//! # Cargo features
//!
//! - `approx`: tolerance comparisons through the `approx` traits
//! - `serde`: serialization of vectors and matrices

/// Type aliases for common element types and dimensions.
pub mod aliases;

/// Tolerance comparisons for vectors and matrices.
///
/// Implements the `AbsDiffEq`, `RelativeEq` and `UlpsEq` traits of the
/// `approx` crate when the `approx` feature is enabled.
#[cfg(feature = "approx")]
mod approx;

/// Error types for checked operations.
///
/// Defines [`MathError`] returned by size-checked assignment and
/// bounds-checked access.
pub mod error;

/// Fixed-size column-major matrix.
pub mod matrix;

/// The element trait shared by vectors and matrices.
pub mod scalar;

/// Serde support for vectors and matrices when the `serde` feature is enabled.
#[cfg(feature = "serde")]
mod serde;

/// Fixed-length vector.
pub mod vector;

pub use crate::aliases::*;
pub use crate::error::MathError;
pub use crate::matrix::Matrix;
pub use crate::scalar::Scalar;
pub use crate::vector::Vector;
