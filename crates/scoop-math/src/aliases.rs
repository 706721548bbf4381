//! Type aliases for common element types and dimensions.
//!
//! Every element type gets a dimension-generic vector and matrix alias plus
//! the fixed 2, 3 and 4 vector sizes and the 2x2, 3x3 and 4x4 square
//! matrices, e.g. [`FVector3`] or [`DMatrix4`].

use crate::{Matrix, Vector};

macro_rules! define_aliases {
    (
        $scalar:ty,
        $vec:ident, [$vec2:ident, $vec3:ident, $vec4:ident],
        $mat:ident, [$mat2:ident, $mat3:ident, $mat4:ident]
    ) => {
        #[doc = concat!("Vector of `", stringify!($scalar), "` elements.")]
        pub type $vec<const N: usize> = Vector<$scalar, N>;
        #[doc = concat!("2-element vector of `", stringify!($scalar), "`.")]
        pub type $vec2 = $vec<2>;
        #[doc = concat!("3-element vector of `", stringify!($scalar), "`.")]
        pub type $vec3 = $vec<3>;
        #[doc = concat!("4-element vector of `", stringify!($scalar), "`.")]
        pub type $vec4 = $vec<4>;

        #[doc = concat!("Matrix of `", stringify!($scalar), "` elements.")]
        pub type $mat<const R: usize, const C: usize> = Matrix<$scalar, R, C>;
        #[doc = concat!("2x2 matrix of `", stringify!($scalar), "`.")]
        pub type $mat2 = $mat<2, 2>;
        #[doc = concat!("3x3 matrix of `", stringify!($scalar), "`.")]
        pub type $mat3 = $mat<3, 3>;
        #[doc = concat!("4x4 matrix of `", stringify!($scalar), "`.")]
        pub type $mat4 = $mat<4, 4>;
    };
}

define_aliases!(f32, FVector, [FVector2, FVector3, FVector4], FMatrix, [FMatrix2, FMatrix3, FMatrix4]);
define_aliases!(f64, DVector, [DVector2, DVector3, DVector4], DMatrix, [DMatrix2, DMatrix3, DMatrix4]);

define_aliases!(i8, I8Vector, [I8Vector2, I8Vector3, I8Vector4], I8Matrix, [I8Matrix2, I8Matrix3, I8Matrix4]);
define_aliases!(i16, I16Vector, [I16Vector2, I16Vector3, I16Vector4], I16Matrix, [I16Matrix2, I16Matrix3, I16Matrix4]);
define_aliases!(i32, I32Vector, [I32Vector2, I32Vector3, I32Vector4], I32Matrix, [I32Matrix2, I32Matrix3, I32Matrix4]);
define_aliases!(i64, I64Vector, [I64Vector2, I64Vector3, I64Vector4], I64Matrix, [I64Matrix2, I64Matrix3, I64Matrix4]);

define_aliases!(u8, U8Vector, [U8Vector2, U8Vector3, U8Vector4], U8Matrix, [U8Matrix2, U8Matrix3, U8Matrix4]);
define_aliases!(u16, U16Vector, [U16Vector2, U16Vector3, U16Vector4], U16Matrix, [U16Matrix2, U16Matrix3, U16Matrix4]);
define_aliases!(u32, U32Vector, [U32Vector2, U32Vector3, U32Vector4], U32Matrix, [U32Matrix2, U32Matrix3, U32Matrix4]);
define_aliases!(u64, U64Vector, [U64Vector2, U64Vector3, U64Vector4], U64Matrix, [U64Matrix2, U64Matrix3, U64Matrix4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        let v: FVector3 = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);

        let m = DMatrix4::identity();
        assert_eq!(m.shape(), (4, 4));

        let r: I16Matrix<2, 3> = Matrix::zeros();
        assert_eq!(r.shape(), (2, 3));

        let u = U8Vector::<5>::splat(1);
        assert_eq!(u.sum(), 5);
    }
}
