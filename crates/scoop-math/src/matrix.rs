use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{error::MathError, scalar::Scalar, vector::Vector};

/// A fixed-size `R x C` numeric matrix stored in column-major order.
///
/// The storage is `C` columns of `R` contiguous elements, so the element at
/// row `r` and column `c` lives at flat index `c * R + r`. Every flat accessor
/// ([`Matrix::at`], [`Matrix::as_slice`], [`Matrix::from_slice`]) uses that
/// ordering.
///
/// Shape compatibility of the arithmetic operators is checked by the type
/// system: adding two matrices requires identical shapes and multiplying
/// requires matching inner dimensions.
///
/// # Example
///
/// ```
/// use scoop_math::{Matrix, Vector};
///
/// // column-major: first column is [1, 2], second is [3, 4]
/// let m = Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3, 4]).unwrap();
/// assert_eq!(m[(0, 1)], 3);
/// assert_eq!(m.transpose().as_slice(), &[1, 3, 2, 4]);
///
/// let v = m * Vector::new([1, 1]);
/// assert_eq!(v, Vector::new([4, 6]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    /// The matrix columns.
    pub data: [[T; R]; C],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a new matrix from its columns.
    #[inline]
    pub const fn from_cols(data: [[T; R]; C]) -> Self {
        Self { data }
    }

    /// Number of rows, always `R`.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns, always `C`.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Total number of elements, always `R * C`.
    #[inline]
    pub const fn len(&self) -> usize {
        R * C
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Shape of the matrix as `(rows, cols)`.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Get the elements as a flat column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Get the elements as a flat column-major mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Iterate over the elements in column-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Get a reference to the element at a flat column-major index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `index >= R * C`.
    pub fn at(&self, index: usize) -> Result<&T, MathError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Self::out_of_range("Matrix::at", index))
    }

    /// Get a mutable reference to the element at a flat column-major index.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `index >= R * C`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, MathError> {
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Self::out_of_range("Matrix::at_mut", index))
    }

    /// Get a reference to the element at `(row, col)`.
    ///
    /// The position is resolved to the flat index `col * R + row` and checked
    /// against the flat range, so only positions past the last element fail.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `col * R + row >= R * C` or
    /// the index overflows `usize`.
    pub fn at_rc(&self, row: usize, col: usize) -> Result<&T, MathError> {
        let index = Self::flat_index("Matrix::at_rc", row, col)?;
        self.as_slice()
            .get(index)
            .ok_or_else(|| Self::out_of_range("Matrix::at_rc", index))
    }

    /// Get a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `col * R + row >= R * C` or
    /// the index overflows `usize`.
    pub fn at_rc_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MathError> {
        let index = Self::flat_index("Matrix::at_rc_mut", row, col)?;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| Self::out_of_range("Matrix::at_rc_mut", index))
    }

    /// Apply a function to every element, producing a new matrix.
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix::from_cols(self.data.map(|col| col.map(&mut f)))
    }

    fn out_of_range(op: &'static str, index: usize) -> MathError {
        log::debug!("{op}: index {index} out of range for {R}x{C} matrix");
        MathError::index_out_of_range(op, index, R * C)
    }

    // an overflowing position is reported as index usize::MAX
    fn flat_index(op: &'static str, row: usize, col: usize) -> Result<usize, MathError> {
        col.checked_mul(R)
            .and_then(|i| i.checked_add(row))
            .ok_or_else(|| Self::out_of_range(op, usize::MAX))
    }

    fn check_len(op: &'static str, len: usize) -> Result<(), MathError> {
        if len != R * C {
            log::debug!("{op}: expected {} elements for {R}x{C} matrix, got {len}", R * C);
            return Err(MathError::size_mismatch(op, R * C, len));
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix of zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_cols([[T::zero(); R]; C])
    }

    /// Create a matrix with `value` on the diagonal and zero elsewhere.
    ///
    /// For non-square matrices the leading `min(R, C)` diagonal is filled.
    pub fn from_diagonal(value: T) -> Self {
        let mut m = Self::zeros();
        m.assign_diagonal(value);
        m
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(T::one())
    }

    /// Create a matrix from row-major rows.
    ///
    /// # Example
    ///
    /// ```
    /// use scoop_math::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_cols(std::array::from_fn(|c| std::array::from_fn(|r| rows[r][c])))
    }

    /// Create a matrix from a flat column-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SizeMismatch`] if `values.len() != R * C`.
    pub fn from_slice(values: &[T]) -> Result<Self, MathError> {
        Self::check_len("Matrix::from_slice", values.len())?;
        Ok(Self::from_cols(std::array::from_fn(|c| {
            std::array::from_fn(|r| values[c * R + r])
        })))
    }

    /// Set the diagonal to `value` and every other element to zero.
    pub fn assign_diagonal(&mut self, value: T) {
        for (c, col) in self.data.iter_mut().enumerate() {
            for (r, x) in col.iter_mut().enumerate() {
                *x = if r == c { value } else { T::zero() };
            }
        }
    }

    /// Copy every element from `other`.
    #[inline]
    pub fn assign(&mut self, other: &Self) {
        self.data = other.data;
    }

    /// Copy a flat column-major slice into this matrix.
    ///
    /// The matrix is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SizeMismatch`] if `values.len() != R * C`.
    pub fn assign_slice(&mut self, values: &[T]) -> Result<(), MathError> {
        Self::check_len("Matrix::assign_slice", values.len())?;
        self.as_mut_slice().copy_from_slice(values);
        Ok(())
    }

    /// Get a column as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `col >= C`.
    pub fn column(&self, col: usize) -> Result<Vector<T, R>, MathError> {
        self.data.get(col).map(|c| Vector::new(*c)).ok_or_else(|| {
            log::debug!("Matrix::column: column {col} out of range for {R}x{C} matrix");
            MathError::index_out_of_range("Matrix::column", col, C)
        })
    }

    /// Get a row as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `row >= R`.
    pub fn row(&self, row: usize) -> Result<Vector<T, C>, MathError> {
        if row >= R {
            log::debug!("Matrix::row: row {row} out of range for {R}x{C} matrix");
            return Err(MathError::index_out_of_range("Matrix::row", row, R));
        }
        Ok(Vector::new(std::array::from_fn(|c| self.data[c][row])))
    }

    /// Reinterpret a single-column matrix as a vector.
    ///
    /// For a matrix whose type already fixes one column, the infallible
    /// [`Matrix::column_vector`] or `Vector::from` are preferable.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ShapeMismatch`] if the matrix has more or fewer
    /// than one column.
    pub fn as_vector(&self) -> Result<Vector<T, R>, MathError> {
        match (C, self.data.first()) {
            (1, Some(col)) => Ok(Vector::new(*col)),
            _ => {
                log::debug!("Matrix::as_vector: {R}x{C} matrix is not a column");
                Err(MathError::shape_mismatch(
                    "Matrix::as_vector",
                    (R, 1),
                    (R, C),
                ))
            }
        }
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_cols(std::array::from_fn(|r| {
            std::array::from_fn(|c| self.data[c][r])
        }))
    }

    /// Apply a binary function element-wise against `other`.
    #[inline]
    pub fn zip_map<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self::from_cols(std::array::from_fn(|c| {
            std::array::from_fn(|r| f(self.data[c][r], other.data[c][r]))
        }))
    }

    fn for_each_with(&mut self, other: &Self, mut f: impl FnMut(&mut T, T)) {
        self.as_mut_slice()
            .iter_mut()
            .zip(other.as_slice().iter())
            .for_each(|(a, &b)| f(a, b));
    }

    /// Add `scalar` to every element.
    #[inline]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|x| x + scalar)
    }

    /// Subtract `scalar` from every element.
    #[inline]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|x| x - scalar)
    }

    /// Multiply every element by `scalar`.
    #[inline]
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Divide every element by `scalar`.
    ///
    /// Same semantics as [`Vector::div_scalar`]: a true per-element division.
    #[inline]
    pub fn div_scalar(&self, scalar: T) -> Self {
        self.map(|x| x / scalar)
    }

    /// Add `scalar` to every element in place.
    #[inline]
    pub fn add_scalar_in_place(&mut self, scalar: T) {
        self.iter_mut().for_each(|x| *x = *x + scalar);
    }

    /// Subtract `scalar` from every element in place.
    #[inline]
    pub fn sub_scalar_in_place(&mut self, scalar: T) {
        self.iter_mut().for_each(|x| *x = *x - scalar);
    }

    /// Multiply every element by `scalar` in place.
    #[inline]
    pub fn scale_in_place(&mut self, scalar: T) {
        self.iter_mut().for_each(|x| *x = *x * scalar);
    }

    /// Divide every element by `scalar` in place.
    #[inline]
    pub fn div_scalar_in_place(&mut self, scalar: T) {
        self.iter_mut().for_each(|x| *x = *x / scalar);
    }

    /// Element-wise sum of two matrices.
    #[inline]
    pub fn add_mat(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise difference of two matrices.
    #[inline]
    pub fn sub_mat(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two matrices.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    /// Element-wise sum with `other`, in place.
    #[inline]
    pub fn add_mat_in_place(&mut self, other: &Self) {
        self.for_each_with(other, |a, b| *a = *a + b);
    }

    /// Element-wise difference with `other`, in place.
    #[inline]
    pub fn sub_mat_in_place(&mut self, other: &Self) {
        self.for_each_with(other, |a, b| *a = *a - b);
    }

    /// Element-wise product with `other`, in place.
    #[inline]
    pub fn hadamard_in_place(&mut self, other: &Self) {
        self.for_each_with(other, |a, b| *a = *a * b);
    }

    /// Matrix product `self * other`.
    ///
    /// `result(row, col) = sum over m of self(row, m) * other(m, col)`.
    ///
    /// # Example
    ///
    /// ```
    /// use scoop_math::Matrix;
    ///
    /// let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let b = Matrix::from_rows([[7, 8], [9, 10], [11, 12]]);
    /// assert_eq!(a.mul_mat(&b), Matrix::from_rows([[58, 64], [139, 154]]));
    /// ```
    pub fn mul_mat<const K: usize>(&self, other: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix::from_cols(std::array::from_fn(|col| {
            std::array::from_fn(|row| {
                (0..C).fold(T::zero(), |acc, m| {
                    acc + self.data[m][row] * other.data[col][m]
                })
            })
        }))
    }

    /// Matrix-vector product, treating `vector` as a column.
    pub fn mul_vec(&self, vector: &Vector<T, C>) -> Vector<T, R> {
        Vector::new(std::array::from_fn(|row| {
            (0..C).fold(T::zero(), |acc, col| {
                acc + self.data[col][row] * vector.data[col]
            })
        }))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Replace `self` with the product `self * other`.
    pub fn mul_in_place(&mut self, other: &Self) {
        *self = self.mul_mat(other);
    }
}

impl<T: Scalar, const R: usize> Matrix<T, R, 1> {
    /// Convert a single-column matrix into a vector.
    #[inline]
    pub fn column_vector(&self) -> Vector<T, R> {
        let [col] = self.data;
        Vector::new(col)
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Homogeneous translation by `delta`.
    ///
    /// # Example
    ///
    /// ```
    /// use scoop_math::{Matrix, Vector};
    ///
    /// let t = Matrix::<f64, 4, 4>::translation(&Vector::new([1.0, 2.0, 3.0]));
    /// let p = t * Vector::new([0.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(p, Vector::new([1.0, 2.0, 3.0, 1.0]));
    /// ```
    pub fn translation(delta: &Vector<T, 3>) -> Self {
        let (o, z) = (T::one(), T::zero());
        let [dx, dy, dz] = delta.data;
        Self::from_cols([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, o, z],
            [dx, dy, dz, o],
        ])
    }

    /// Homogeneous scale by `multipliers` along each axis.
    pub fn scaling(multipliers: &Vector<T, 3>) -> Self {
        let (o, z) = (T::one(), T::zero());
        let [sx, sy, sz] = multipliers.data;
        Self::from_cols([
            [sx, z, z, z],
            [z, sy, z, z],
            [z, z, sz, z],
            [z, z, z, o],
        ])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[col][row]
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const R: usize> From<Vector<T, R>> for Matrix<T, R, 1> {
    #[inline]
    fn from(v: Vector<T, R>) -> Self {
        Self::from_cols([v.data])
    }
}

impl<T, const R: usize> From<Matrix<T, R, 1>> for Vector<T, R> {
    #[inline]
    fn from(m: Matrix<T, R, 1>) -> Self {
        let [col] = m.data;
        Vector::new(col)
    }
}

impl<T: Scalar, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = MathError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..R {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for c in 0..C {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[c][r])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// Scalar arithmetic operators.
impl<T: Scalar, const R: usize, const C: usize> Add<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar_in_place(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.sub_scalar_in_place(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.scale_in_place(rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.div_scalar_in_place(rhs);
    }
}

// Matrix arithmetic operators.
impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_mat(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_mat(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_mat_in_place(&rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_mat_in_place(&rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    #[inline]
    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        self.mul_mat(&rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.mul_vec(&rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        self.mul_in_place(&rhs);
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
