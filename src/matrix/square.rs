use crate::error::LinalgError;
use crate::traits::{Element, FieldScalar, LinalgScalar, Scalar};
use crate::{Matrix, Vector};

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        self.diagonal().sum()
    }

    /// `self` multiplied by itself `n` times, by repeated squaring.
    ///
    /// `pow(0)` is the identity.
    pub fn pow(&self, n: u32) -> Self {
        let (mut acc, mut base, mut n) = (Self::identity(), *self, n);
        while n != 0 {
            if n % 2 == 1 {
                acc = acc * base;
            }
            n /= 2;
            if n != 0 {
                base = base * base;
            }
        }
        acc
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    /// Main diagonal, `out[i] == self[(i, i)]`.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.cols[i][i])
    }

    /// Square matrix with `v` on the diagonal and zeros elsewhere.
    pub fn from_diagonal(v: &Vector<T, N>) -> Self {
        Self::from_fn(|c, r| if c == r { v[c] } else { T::ZERO })
    }

    /// `true` if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        *self == self.transposed()
    }
}

/// Packed LU factors of a square matrix, with row pivoting.
///
/// Column `k` holds U on and above the diagonal and the L multipliers below
/// it (L has an implied unit diagonal). Row `i` of the factored matrix is row
/// `perm[i]` of the input.
struct Lu<T, const N: usize> {
    cols: [Vector<T, N>; N],
    perm: [usize; N],
    odd_swaps: bool,
}

impl<T: FieldScalar, const N: usize> Lu<T, N> {
    fn factor(m: &Matrix<T, N, N>) -> Result<Self, LinalgError> {
        let mut cols = m.cols;
        let mut perm: [usize; N] = core::array::from_fn(|i| i);
        let mut odd_swaps = false;
        let zero: <T as LinalgScalar>::Real = num_traits::zero();

        for k in 0..N {
            // Largest modulus on or below the diagonal, first one on ties.
            let pivot = (k + 1..N).fold(k, |best, r| {
                if cols[k][r].modulus() > cols[k][best].modulus() {
                    r
                } else {
                    best
                }
            });
            if cols[k][pivot].modulus() == zero {
                return Err(LinalgError::Singular);
            }
            if pivot != k {
                for col in cols.iter_mut() {
                    col.data.swap(k, pivot);
                }
                perm.swap(k, pivot);
                odd_swaps = !odd_swaps;
            }

            let inv_pivot = T::one() / cols[k][k];
            for r in k + 1..N {
                cols[k][r] = cols[k][r] * inv_pivot;
            }
            let l = cols[k];
            for col in cols[k + 1..].iter_mut() {
                let u = col[k];
                for r in k + 1..N {
                    col[r] = col[r] - l[r] * u;
                }
            }
        }

        Ok(Self {
            cols,
            perm,
            odd_swaps,
        })
    }

    fn determinant(&self) -> T {
        let product = (0..N).fold(T::one(), |acc, k| acc * self.cols[k][k]);
        if self.odd_swaps {
            -product
        } else {
            product
        }
    }

    fn solve(&self, b: &Vector<T, N>) -> Vector<T, N> {
        let mut x = Vector::from_fn(|i| b[self.perm[i]]);
        // L y = P b, column by column
        for k in 0..N {
            let xk = x[k];
            for r in k + 1..N {
                x[r] = x[r] - self.cols[k][r] * xk;
            }
        }
        // U x = y
        for k in (0..N).rev() {
            x[k] = x[k] / self.cols[k][k];
            let xk = x[k];
            for r in 0..k {
                x[r] = x[r] - self.cols[k][r] * xk;
            }
        }
        x
    }
}

impl<T: FieldScalar, const N: usize> Matrix<T, N, N> {
    /// Determinant from an LU factorization with partial pivoting.
    ///
    /// A singular matrix gives zero.
    ///
    /// ```
    /// use fixalg::DMat2;
    /// let m = DMat2::new([[3.0, 4.0], [8.0, 6.0]]);
    /// assert_eq!(m.determinant(), -14.0);
    /// ```
    pub fn determinant(&self) -> T {
        Lu::factor(self).map_or(T::zero(), |lu| lu.determinant())
    }

    /// Matrix inverse.
    ///
    /// Fails with [`LinalgError::Singular`] when a zero pivot is met.
    ///
    /// ```
    /// use fixalg::{DMat2, LinalgError};
    /// let m = DMat2::new([[4.0, 2.0], [7.0, 6.0]]);
    /// let inv = m.inverse().unwrap();
    /// assert!(((m * inv)[(1, 0)]).abs() < 1e-12);
    ///
    /// let singular = DMat2::new([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(singular.inverse(), Err(LinalgError::Singular));
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let lu = Lu::factor(self)?;
        Ok(Matrix::from_columns(core::array::from_fn(|c| {
            lu.solve(&Vector::unit(c))
        })))
    }

    /// Solve `A x = b` for `x`.
    ///
    /// ```
    /// use fixalg::{DMat2, DVec2};
    /// let a = DMat2::from_rows([DVec2::new([2.0, 1.0]), DVec2::new([5.0, 3.0])]);
    /// let x = a.solve(&DVec2::new([4.0, 11.0])).unwrap();
    /// assert!((x - DVec2::new([1.0, 2.0])).length() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T, N>) -> Result<Vector<T, N>, LinalgError> {
        Ok(Lu::factor(self)?.solve(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);

        let id: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn trace_integer() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn diagonal_and_from_diagonal() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let d = m.diagonal();
        assert_eq!(d, Vector::new([1.0, 5.0, 9.0]));

        let m2 = Matrix::from_diagonal(&d);
        assert_eq!(m2[(1, 1)], 5.0);
        assert_eq!(m2[(0, 1)], 0.0);
        assert_eq!(m2.diagonal(), d);
    }

    #[test]
    fn pow() {
        // Shear: columns (1, 0) and (1, 1).
        let m = Matrix::new([[1, 0], [1, 1]]);
        assert_eq!(m.pow(0), Matrix::identity());
        assert_eq!(m.pow(1), m);
        assert_eq!(m.pow(3), Matrix::new([[1, 0], [3, 1]]));
    }

    #[test]
    fn pow_does_not_square_past_last_bit() {
        // 40_000² fits in i32, 40_000⁴ does not.
        let m = Matrix::new([[50_000_i32, 0], [0, 50_000]]);
        assert_eq!(m.pow(1), m);
        let m = Matrix::new([[40_000_i32, 0], [0, -40_000]]);
        assert_eq!(m.pow(2), Matrix::new([[1_600_000_000, 0], [0, 1_600_000_000]]));
    }

    #[test]
    fn is_symmetric() {
        let sym = Matrix::new([[1.0, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 9.0]]);
        assert!(sym.is_symmetric());

        let asym = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert!(!asym.is_symmetric());

        assert!(Matrix::<bool, 4, 4>::identity().is_symmetric());
    }

    #[test]
    fn determinant_needs_row_swap() {
        // Zero in the leading position forces a pivot.
        let m = Matrix::new([[0.0_f64, 3.0, 1.0], [2.0, -1.0, 4.0], [5.0, 2.0, 0.0]]);
        assert_relative_eq!(m.determinant(), 69.0, epsilon = 1e-10);
        assert_relative_eq!(m.transposed().determinant(), 69.0, epsilon = 1e-10);
    }

    #[test]
    fn determinant_of_identity_and_rank_deficient() {
        assert_eq!(Matrix::<f64, 4, 4>::identity().determinant(), 1.0);
        assert_eq!(Matrix::new([[3.0_f32, 6.0], [1.0, 2.0]]).determinant(), 0.0);
    }

    #[test]
    fn inverse_times_self_is_identity() {
        let m: Matrix<f64, 4, 4> =
            Matrix::from_fn(|c, r| if c == r { 10.0 } else { c as f64 - r as f64 * 0.5 });
        let inv = m.inverse().unwrap();
        let id = Matrix::<f64, 4, 4>::identity();
        for (got, want) in (inv * m).iter().zip(id.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_inverse_and_solve_fail() {
        let m: Matrix<f64, 3, 3> = Matrix::ones();
        assert_eq!(m.inverse(), Err(LinalgError::Singular));
        assert_eq!(m.solve(&Vector::ones()), Err(LinalgError::Singular));
    }

    #[test]
    fn solve_recovers_known_solution() {
        let a = Matrix::from_rows([
            Vector::new([1.0_f64, 2.0, 0.0]),
            Vector::new([0.0, 1.0, 4.0]),
            Vector::new([3.0, 0.0, 1.0]),
        ]);
        let x0 = Vector::new([2.0, -1.0, 0.5]);
        let x = a.solve(&(a * x0)).unwrap();
        for i in 0..3 {
            assert_relative_eq!(x[i], x0[i], epsilon = 1e-12);
        }
    }
}
