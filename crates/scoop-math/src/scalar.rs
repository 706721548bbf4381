use num_traits::{AsPrimitive, Num};

/// Element type of a [`Vector`](crate::Vector) or [`Matrix`](crate::Matrix).
///
/// Implemented for every primitive numeric type: `f32`, `f64` and the signed
/// and unsigned integers. Arithmetic follows the element type's own operators,
/// so integer overflow and division by zero behave exactly as they do on the
/// primitive. Lossless-or-rounding conversion to `f64` backs the
/// floating-point metrics ([`Vector::magnitude`](crate::Vector::magnitude),
/// [`Vector::distance`](crate::Vector::distance)).
pub trait Scalar: Num + Copy + std::fmt::Debug + AsPrimitive<f64> {}

impl<T> Scalar for T where T: Num + Copy + std::fmt::Debug + AsPrimitive<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts<T: Scalar>(value: T) -> f64 {
        value.as_()
    }

    #[test]
    fn test_primitive_scalars() {
        assert_eq!(accepts(3u8), 3.0);
        assert_eq!(accepts(-3i64), -3.0);
        assert_eq!(accepts(0.5f32), 0.5);
        assert_eq!(accepts(0.25f64), 0.25);
    }
}
