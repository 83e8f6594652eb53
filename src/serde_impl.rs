//! Serialization as flat tuples.
//!
//! A `Vector<T, N>` is a tuple of its `N` components and a `Matrix<T, C, R>`
//! a tuple of its `C * R` fields in column-major order, so
//! `Matrix::new([[1, 2], [3, 4]])` serializes to `[1,2,3,4]` in JSON.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeTuple;

use crate::traits::Element;
use crate::{Matrix, Vector};

impl<T: serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tup = serializer.serialize_tuple(N)?;
        for c in self.iter() {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

impl<T: serde::Serialize, const C: usize, const R: usize> serde::Serialize for Matrix<T, C, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut tup = serializer.serialize_tuple(C * R)?;
        for f in self.iter() {
            tup.serialize_element(f)?;
        }
        tup.end()
    }
}

/// Reads exactly `L` elements into a fixed array.
struct FlatVisitor<T, const L: usize>(PhantomData<T>);

impl<'de, T, const L: usize> Visitor<'de> for FlatVisitor<T, L>
where
    T: Element + serde::Deserialize<'de>,
{
    type Value = [T; L];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} elements", L)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = [T::ZERO; L];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(i, &self))?;
        }
        // Longer sequences are rejected too.
        if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(A::Error::invalid_length(L + 1, &self));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: Element + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = deserializer.deserialize_tuple(N, FlatVisitor::<T, N>(PhantomData))?;
        Ok(Vector::new(data))
    }
}

impl<'de, T, const C: usize, const R: usize> serde::Deserialize<'de> for Matrix<T, C, R>
where
    T: Element + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // `[T; C * R]` needs generic const expressions, so fill a zero matrix instead.
        struct MatrixVisitor<T, const C: usize, const R: usize>(PhantomData<T>);

        impl<'de, T, const C: usize, const R: usize> Visitor<'de> for MatrixVisitor<T, C, R>
        where
            T: Element + serde::Deserialize<'de>,
        {
            type Value = Matrix<T, C, R>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} elements", C * R)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut m = Matrix::<T, C, R>::zero();
                for i in 0..C * R {
                    m[i] = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(A::Error::invalid_length(C * R + 1, &self));
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(C * R, MatrixVisitor::<T, C, R>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_is_a_flat_tuple() {
        let v = Vector::new([1.5_f64, -2.0, 3.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,3.0]");
        let back: Vector<f64, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn matrix_is_column_major() {
        let m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[1,2,3,4,5,6]");
        let back: Matrix<i32, 3, 2> = serde_json::from_str("[1,2,3,4,5,6]").unwrap();
        assert_eq!(back, m);
        assert_eq!(back[(2, 0)], 5);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(serde_json::from_str::<Vector<f32, 3>>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector<f32, 2>>("[1.0,2.0,3.0]").is_err());
        let err = serde_json::from_str::<Matrix<u32, 2, 2>>("[1,2,3]").unwrap_err();
        assert!(err.to_string().contains("invalid length 3"));
    }
}
