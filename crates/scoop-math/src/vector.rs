use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{AsPrimitive, Float};

use crate::{error::MathError, scalar::Scalar};

/// A fixed-length numeric vector.
///
/// The elements live inline in a `[T; N]` array, so a vector is a plain value:
/// copying it duplicates every element and no heap allocation ever happens.
/// Operations that combine two vectors require both to have the same `N`,
/// which is enforced by the type system.
///
/// # Example
///
/// ```
/// use scoop_math::Vector;
///
/// let a = Vector::new([1.0, 2.0, 3.0]);
/// let b = Vector::new([4.0, 5.0, 6.0]);
///
/// assert_eq!(a.dot(&b), 32.0);
/// assert_eq!(a + b, Vector::new([5.0, 7.0, 9.0]));
/// assert_eq!(a.cross(&b), Vector::new([-3.0, 6.0, -3.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    /// The vector elements in storage order.
    pub data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Create a new vector from an array of elements.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new(data)
    }

    /// Convert the vector to an array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Get a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T, MathError> {
        self.data
            .get(index)
            .ok_or_else(|| Self::out_of_range("Vector::at", index))
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::IndexOutOfRange`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, MathError> {
        self.data
            .get_mut(index)
            .ok_or_else(|| Self::out_of_range("Vector::at_mut", index))
    }

    /// Apply a function to every element, producing a new vector.
    ///
    /// # Example
    ///
    /// ```
    /// use scoop_math::Vector;
    ///
    /// let v = Vector::new([1u8, 2, 3]).map(|x| x as f32 * 0.5);
    /// assert_eq!(v, Vector::new([0.5, 1.0, 1.5]));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector::new(self.data.map(f))
    }

    fn out_of_range(op: &'static str, index: usize) -> MathError {
        log::debug!("{op}: index {index} out of range for {N} elements");
        MathError::index_out_of_range(op, index, N)
    }

    fn check_len(op: &'static str, len: usize) -> Result<(), MathError> {
        if len != N {
            log::debug!("{op}: expected {N} elements, got {len}");
            return Err(MathError::size_mismatch(op, N, len));
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Create a vector of zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Create a vector from a dynamically sized slice.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SizeMismatch`] if `values.len() != N`.
    pub fn from_slice(values: &[T]) -> Result<Self, MathError> {
        Self::check_len("Vector::from_slice", values.len())?;
        let mut data = [T::zero(); N];
        data.copy_from_slice(values);
        Ok(Self::new(data))
    }

    /// Set every element to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.data = [value; N];
    }

    /// Copy every element from `other`.
    #[inline]
    pub fn assign(&mut self, other: &Self) {
        self.data = other.data;
    }

    /// Copy the elements of a dynamically sized slice into this vector.
    ///
    /// The vector is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SizeMismatch`] if `values.len() != N`.
    pub fn assign_slice(&mut self, values: &[T]) -> Result<(), MathError> {
        Self::check_len("Vector::assign_slice", values.len())?;
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// Apply a binary function element-wise against `other`.
    #[inline]
    pub fn zip_map<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self::new(std::array::from_fn(|i| f(self.data[i], other.data[i])))
    }

    /// Sum of the elements in the element type's arithmetic.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Euclidean length of the vector.
    ///
    /// Always evaluated in `f64`, whatever the element type.
    pub fn magnitude(&self) -> f64 {
        self.data
            .iter()
            .map(|&x| {
                let x: f64 = x.as_();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Euclidean distance to `other`, evaluated in `f64`.
    pub fn distance(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| {
                let delta = AsPrimitive::<f64>::as_(a) - AsPrimitive::<f64>::as_(b);
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product between two vectors.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
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
    /// This is a true element-wise division: integer element types truncate
    /// per element and panic on a zero divisor, floating-point types yield
    /// infinities or NaN.
    #[inline]
    pub fn div_scalar(&self, scalar: T) -> Self {
        self.map(|x| x / scalar)
    }

    /// Add `scalar` to every element in place.
    #[inline]
    pub fn add_scalar_in_place(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x + scalar);
    }

    /// Subtract `scalar` from every element in place.
    #[inline]
    pub fn sub_scalar_in_place(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x - scalar);
    }

    /// Multiply every element by `scalar` in place.
    #[inline]
    pub fn scale_in_place(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x * scalar);
    }

    /// Divide every element by `scalar` in place.
    #[inline]
    pub fn div_scalar_in_place(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x / scalar);
    }

    /// Element-wise sum of two vectors.
    #[inline]
    pub fn add_vec(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise difference of two vectors.
    #[inline]
    pub fn sub_vec(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two vectors.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    /// Element-wise sum with `other`, in place.
    #[inline]
    pub fn add_vec_in_place(&mut self, other: &Self) {
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = *a + b);
    }

    /// Element-wise difference with `other`, in place.
    #[inline]
    pub fn sub_vec_in_place(&mut self, other: &Self) {
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = *a - b);
    }

    /// Element-wise product with `other`, in place.
    #[inline]
    pub fn hadamard_in_place(&mut self, other: &Self) {
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, &b)| *a = *a * b);
    }
}

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    /// Scale the vector to unit length.
    ///
    /// A zero vector has no direction; normalizing it yields NaN elements.
    #[inline]
    pub fn normalize(&self) -> Self {
        let magnitude = self.dot(self).sqrt();
        self.scale(T::one() / magnitude)
    }

    /// Scale the vector to unit length in place.
    #[inline]
    pub fn normalize_in_place(&mut self) {
        let magnitude = self.dot(self).sqrt();
        self.scale_in_place(T::one() / magnitude);
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product of two 3D vectors.
    ///
    /// Only defined for three-element vectors.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

// Conversions to and from arrays and slices.
impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = MathError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = MathError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

// Scalar arithmetic operators.
impl<T: Scalar, const N: usize> Add<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<T: Scalar, const N: usize> Sub<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign<T> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.add_scalar_in_place(rhs);
    }
}

impl<T: Scalar, const N: usize> SubAssign<T> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.sub_scalar_in_place(rhs);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.scale_in_place(rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.div_scalar_in_place(rhs);
    }
}

// Vector arithmetic operators.
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_vec(&rhs)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_vec(&rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_vec_in_place(&rhs);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_vec_in_place(&rhs);
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                #[inline]
                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construct() -> Result<(), MathError> {
        let v = Vector::<i32, 4>::splat(7);
        assert_eq!(v.data, [7, 7, 7, 7]);

        let v = Vector::<f64, 3>::default();
        assert_eq!(v, Vector::new([0.0, 0.0, 0.0]));

        let v = Vector::<u8, 3>::from_slice(&[1, 2, 3])?;
        assert_eq!(v.to_array(), [1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        Ok(())
    }

    #[test]
    fn test_assign() -> Result<(), MathError> {
        let mut v = Vector::<f32, 3>::zeros();
        v.fill(2.5);
        assert_eq!(v.data, [2.5; 3]);

        v.assign(&Vector::new([1.0, 2.0, 3.0]));
        assert_eq!(v.data, [1.0, 2.0, 3.0]);

        v.assign_slice(&[4.0, 5.0, 6.0])?;
        assert_eq!(*v.at(2)?, 6.0);
        Ok(())
    }

    #[test]
    fn test_assign_size_mismatch() {
        let mut v = Vector::new([1, 2, 3]);
        assert_eq!(
            v.assign_slice(&[1, 2]),
            Err(MathError::size_mismatch("Vector::assign_slice", 3, 2))
        );
        // untouched on failure
        assert_eq!(v.data, [1, 2, 3]);

        let err = Vector::<i32, 2>::try_from(vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, MathError::size_mismatch("Vector::from_slice", 2, 3));
    }

    #[test]
    fn test_at() -> Result<(), MathError> {
        let mut v = Vector::new([10u16, 20, 30]);
        assert_eq!(*v.at(0)?, 10);
        assert_eq!(*v.at(2)?, 30);
        assert_eq!(
            v.at(3),
            Err(MathError::index_out_of_range("Vector::at", 3, 3))
        );

        *v.at_mut(1)? = 25;
        assert_eq!(v[1], 25);
        assert!(v.at_mut(7).is_err());

        v[0] = 11;
        assert_eq!(v.data, [11, 25, 30]);
        Ok(())
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let v = Vector::new([1.0f32, 2.0]);
        let i = v.len();
        let _x = v[i];
    }

    #[test]
    fn test_iter() {
        let mut v = Vector::new([1, 2, 3, 4]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        for x in &mut v {
            *x *= 10;
        }

        let mut seen = Vec::new();
        for x in &v {
            seen.push(*x);
        }
        assert_eq!(seen, vec![10, 20, 30, 40]);

        // iteration is restartable
        assert_eq!(v.iter().count(), 4);
        assert_eq!(v.into_iter().sum::<i32>(), 100);
    }

    #[test]
    fn test_sum() {
        assert_eq!(Vector::new([1, -2, 3, 4]).sum(), 6);
        assert_eq!(Vector::new([0.5f32, 0.25]).sum(), 0.75);
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::new([1.0f64, 2.0, 3.0]);
        assert_relative_eq!(v.magnitude(), 14.0f64.sqrt());

        // integer elements are widened before squaring
        let v = Vector::new([200u8, 200]);
        assert_relative_eq!(v.magnitude(), (2.0f64 * 200.0 * 200.0).sqrt());
    }

    #[test]
    fn test_distance() {
        let a = Vector::new([1.0f32, 1.0, 1.0]);
        let b = Vector::new([4.0f32, 5.0, 1.0]);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);

        let a = Vector::new([1u32, 2]);
        let b = Vector::new([4u32, 6]);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a.dot(&b), 32);
        assert_eq!(b.dot(&a), 32);
    }

    #[test]
    fn test_cross() {
        let x = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y), Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(y.cross(&x), Vector::new([0.0, 0.0, -1.0]));

        let a = Vector::new([3, -1, 2]);
        assert_eq!(a.cross(&a), Vector::zeros());
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new([3.0f64, 0.0, 4.0]);
        let n = v.normalize();
        assert_relative_eq!(n.magnitude(), 1.0);
        assert_relative_eq!(n[0], 0.6);
        assert_relative_eq!(n[2], 0.8);

        let mut m = v;
        m.normalize_in_place();
        assert_eq!(m, n);

        let z = Vector::<f32, 2>::zeros().normalize();
        assert!(z.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let v = Vector::new([2.0f32, 4.0, 8.0]);
        assert_eq!(v.add_scalar(1.0).data, [3.0, 5.0, 9.0]);
        assert_eq!(v.sub_scalar(2.0).data, [0.0, 2.0, 6.0]);
        assert_eq!(v.scale(0.5).data, [1.0, 2.0, 4.0]);
        assert_eq!(v.div_scalar(2.0).data, [1.0, 2.0, 4.0]);

        assert_eq!(v + 1.0, v.add_scalar(1.0));
        assert_eq!(v - 1.0, v.sub_scalar(1.0));
        assert_eq!(v * 3.0, v.scale(3.0));
        assert_eq!(3.0 * v, v.scale(3.0));
        assert_eq!(v / 4.0, v.div_scalar(4.0));

        let mut w = v;
        w += 1.0;
        w -= 2.0;
        w *= 2.0;
        w /= 2.0;
        assert_eq!(w.data, [1.0, 3.0, 7.0]);
    }

    #[test]
    fn test_integer_division() {
        let v = Vector::new([7i32, -7, 9]);
        assert_eq!((v / 2).data, [3, -3, 4]);

        let mut w = v;
        w /= 3;
        assert_eq!(w.data, [2, -2, 3]);
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(a.add_vec(&b).data, [5, 7, 9]);
        assert_eq!(b.sub_vec(&a).data, [3, 3, 3]);
        assert_eq!(a.hadamard(&b).data, [4, 10, 18]);
        assert_eq!(a + b, a.add_vec(&b));
        assert_eq!(a - b, a.sub_vec(&b));
        assert_eq!(-a, Vector::new([-1, -2, -3]));

        let mut c = a;
        c.hadamard_in_place(&b);
        c.add_vec_in_place(&a);
        c.sub_vec_in_place(&b);
        assert_eq!(c.data, [1, 7, 15]);

        let mut d = a;
        d += b;
        d -= a;
        assert_eq!(d, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new([1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Vector::new([0.5f32]).to_string(), "[0.5]");
    }
}
