use num_traits::Float;

use crate::traits::LinalgScalar;
use crate::Matrix;

// ── Matrix norms ────────────────────────────────────────────────────
//
// Same definitions as the vector norms, taken over every field.

impl<T: LinalgScalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Sum of squared field moduli. No sqrt.
    pub fn length_squared(&self) -> T::Real {
        self.fold_moduli(|acc, x| acc + x.modulus_squared())
    }

    /// Euclidean length over all fields (the Frobenius norm).
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.length(), 30.0_f64.sqrt());
    /// ```
    pub fn length(&self) -> T::Real {
        self.length_squared().sqrt()
    }

    /// One-norm over all fields, `Σ |x|`.
    pub fn norm1(&self) -> T::Real {
        self.fold_moduli(|acc, x| acc + x.modulus())
    }

    /// Two-norm over all fields. Same as [`Matrix::length`].
    pub fn norm2(&self) -> T::Real {
        self.length()
    }

    /// Largest field modulus. A NaN field makes the result NaN.
    pub fn norm_max(&self) -> T::Real {
        self.fold_moduli(|acc, x| {
            let m = x.modulus();
            if m.is_nan() || m > acc {
                m
            } else {
                acc
            }
        })
    }

    /// Minkowski p-norm over all fields. `p` is not validated.
    pub fn norm_p(&self, p: T::Real) -> T::Real {
        self.fold_moduli(|acc, x| acc + x.modulus().powf(p))
            .powf(num_traits::one::<T::Real>() / p)
    }

    fn fold_moduli(&self, f: impl Fn(T::Real, T) -> T::Real) -> T::Real {
        self.iter().fold(num_traits::zero(), |acc, &x| f(acc, x))
    }
}
