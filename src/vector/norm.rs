use num_traits::Float;

use crate::traits::{FieldScalar, LinalgScalar, Scalar};
use crate::Vector;

// ── Vector norms ────────────────────────────────────────────────────
//
// All norms are taken over component moduli, so they are real-valued for
// every domain: integers measure in f64, Complex<T> in T.

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Sum of all components.
    ///
    /// ```
    /// use fixalg::Vector;
    /// assert_eq!(Vector::new([1, 2, 3, 4]).sum(), 10);
    /// ```
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &c| acc + c)
    }
}

impl<T: LinalgScalar, const N: usize> Vector<T, N> {
    /// Squared euclidean length, `Σ |c|²`.
    pub fn length_squared(&self) -> T::Real {
        self.fold_moduli(|acc, c| acc + c.modulus_squared())
    }

    /// Euclidean length, `sqrt(Σ |c|²)`.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([3, -4]);
    /// assert_eq!(v.length(), 5.0);
    /// ```
    pub fn length(&self) -> T::Real {
        self.length_squared().sqrt()
    }

    /// Euclidean norm. Same as [`Vector::length`].
    pub fn norm(&self) -> T::Real {
        self.length()
    }

    /// One-norm, `Σ |c|`.
    pub fn norm1(&self) -> T::Real {
        self.fold_moduli(|acc, c| acc + c.modulus())
    }

    /// Two-norm. Same as [`Vector::length`].
    pub fn norm2(&self) -> T::Real {
        self.length()
    }

    /// Max-norm, `max |c|`. A NaN component makes the result NaN.
    pub fn norm_max(&self) -> T::Real {
        self.fold_moduli(|acc, c| {
            let m = c.modulus();
            if m.is_nan() || m > acc {
                m
            } else {
                acc
            }
        })
    }

    /// Minkowski p-norm, `(Σ |c|^p)^(1/p)`.
    ///
    /// `p` is not validated; `p <= 0` yields whatever `powf` produces.
    pub fn norm_p(&self, p: T::Real) -> T::Real {
        self.fold_moduli(|acc, c| acc + c.modulus().powf(p))
            .powf(num_traits::one::<T::Real>() / p)
    }

    /// Euclidean distance between two vectors.
    pub fn distance(&self, rhs: &Self) -> T::Real {
        (*self - *rhs).length()
    }

    /// Squared euclidean distance between two vectors.
    pub fn distance_squared(&self, rhs: &Self) -> T::Real {
        (*self - *rhs).length_squared()
    }

    fn fold_moduli(&self, f: impl Fn(T::Real, T) -> T::Real) -> T::Real {
        self.data.iter().fold(num_traits::zero(), |acc, &c| f(acc, c))
    }
}

impl<T: FieldScalar, const N: usize> Vector<T, N> {
    /// Copy scaled to unit length.
    ///
    /// Not guarded: a zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        *self / T::from_real(self.length())
    }

    /// Like [`Vector::normalized`], but the zero vector maps to itself.
    ///
    /// ```
    /// use fixalg::DVec3;
    /// assert_eq!(DVec3::zero().normalized_safe(), DVec3::zero());
    /// assert!(DVec3::zero().normalized()[0].is_nan());
    /// ```
    pub fn normalized_safe(&self) -> Self {
        if *self == Self::zero() {
            Self::zero()
        } else {
            self.normalized()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_of_sample_vector() {
        let v = Vector::new([3.5_f64, 8.5]);
        assert_eq!(v.length(), (3.5_f64 * 3.5 + 8.5 * 8.5).sqrt());
        assert_eq!(v.norm(), v.length());
        assert_eq!(v.norm2(), v.length());
    }

    #[test]
    fn norm1_and_max() {
        let v = Vector::new([1.0_f64, -2.0, 3.0]);
        assert_eq!(v.norm1(), 6.0);
        assert_eq!(v.norm_max(), 3.0);
        assert_eq!(v.length_squared(), 14.0);
    }

    #[test]
    fn norm_max_keeps_nan() {
        assert!(Vector::new([f64::NAN, 1.0]).norm_max().is_nan());
        assert!(Vector::new([1.0, f64::NAN]).norm_max().is_nan());
        assert!(Vector::new([2.0_f32, f32::NAN, 5.0]).norm_max().is_nan());
    }

    #[test]
    fn norm_p_matches_norm2() {
        let v = Vector::new([1.0_f64, -2.0, 3.0, 0.5]);
        assert_relative_eq!(v.norm_p(2.0), v.norm2(), epsilon = 1e-12);
        assert_relative_eq!(v.norm_p(1.0), v.norm1(), epsilon = 1e-12);
    }

    #[test]
    fn integer_norms_are_real() {
        let v = Vector::new([-3_i64, 4]);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.norm1(), 7.0);
        assert_eq!(v.norm_max(), 4.0);
        assert_eq!(v.sum(), 1);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vector::new([3.0_f64, 4.0]);
        let u = v.normalized();
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(u[1], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn normalized_zero_is_nan() {
        let u = Vector::<f32, 3>::zero().normalized();
        assert!(u.iter().all(|c| c.is_nan()));
        assert_eq!(Vector::<f32, 3>::zero().normalized_safe(), Vector::zero());
    }

    #[test]
    fn distance() {
        let a = Vector::new([1.0_f64, 1.0]);
        let b = Vector::new([4.0_f64, 5.0]);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }
}
