use ::serde::ser::SerializeStruct;
use ::serde::{Deserialize, Serialize};

use crate::{Matrix, Scalar, Vector};

// Vectors serialize as a plain sequence of elements.
impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let data = Vec::<T>::deserialize(deserializer)?;
        Vector::from_slice(&data).map_err(::serde::de::Error::custom)
    }
}

// Matrices serialize their shape alongside the column-major elements so that
// a payload for the wrong shape is rejected instead of silently reinterpreted.
impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &R)?;
        state.serialize_field("cols", &C)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            rows: usize,
            cols: usize,
            data: Vec<T>,
        }

        let MatrixData { rows, cols, data } = MatrixData::<T>::deserialize(deserializer)?;

        if (rows, cols) != (R, C) {
            return Err(::serde::de::Error::custom(format!(
                "expected a {R}x{C} matrix, got {rows}x{cols}"
            )));
        }

        Matrix::from_slice(&data).map_err(::serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_vector() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vector::new([1.5f32, -2.0, 3.25]);
        let serialized = serde_json::to_string(&v)?;
        assert_eq!(serialized, "[1.5,-2.0,3.25]");

        let deserialized: Vector<f32, 3> = serde_json::from_str(&serialized)?;
        assert_eq!(deserialized, v);

        assert!(serde_json::from_str::<Vector<f32, 2>>(&serialized).is_err());
        Ok(())
    }

    #[test]
    fn test_serde_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows([[1u16, 2, 3], [4, 5, 6]]);
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(serialized, r#"{"rows":2,"cols":3,"data":[1,4,2,5,3,6]}"#);

        let deserialized: Matrix<u16, 2, 3> = serde_json::from_str(&serialized)?;
        assert_eq!(deserialized, m);

        // same element count, different shape
        assert!(serde_json::from_str::<Matrix<u16, 3, 2>>(&serialized).is_err());
        // wrong element count
        let truncated = r#"{"rows":2,"cols":3,"data":[1,4,2,5,3]}"#;
        assert!(serde_json::from_str::<Matrix<u16, 2, 3>>(truncated).is_err());
        Ok(())
    }
}
