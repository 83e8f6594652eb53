use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::traits::Scalar;
use crate::{Matrix, Vector};

// ── Element-wise addition / subtraction ─────────────────────────────

macro_rules! impl_fieldwise_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident) => {
        impl<T: Scalar, const C: usize, const R: usize> $Op for Matrix<T, C, R> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Matrix::from_fn(|c, r| self.cols[c][r].$method(rhs.cols[c][r]))
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $OpAssign for Matrix<T, C, R> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $OpAssign<&Matrix<T, C, R>>
            for Matrix<T, C, R>
        {
            #[inline]
            fn $assign(&mut self, rhs: &Matrix<T, C, R>) {
                *self = (*self).$method(*rhs);
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $Op<Matrix<T, C, R>>
            for &Matrix<T, C, R>
        {
            type Output = Matrix<T, C, R>;

            fn $method(self, rhs: Matrix<T, C, R>) -> Matrix<T, C, R> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $Op<&Matrix<T, C, R>>
            for Matrix<T, C, R>
        {
            type Output = Matrix<T, C, R>;

            fn $method(self, rhs: &Matrix<T, C, R>) -> Matrix<T, C, R> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $Op<&Matrix<T, C, R>>
            for &Matrix<T, C, R>
        {
            type Output = Matrix<T, C, R>;

            fn $method(self, rhs: &Matrix<T, C, R>) -> Matrix<T, C, R> {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_fieldwise_binop!(Add, add, AddAssign, add_assign);
impl_fieldwise_binop!(Sub, sub, SubAssign, sub_assign);

// ── Scalar broadcast: matrix ⊕ scalar ───────────────────────────────

macro_rules! impl_scalar_rhs {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident) => {
        impl<T: Scalar, const C: usize, const R: usize> $Op<T> for Matrix<T, C, R> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| a.$method(rhs))
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $Op<T> for &Matrix<T, C, R> {
            type Output = Matrix<T, C, R>;

            fn $method(self, rhs: T) -> Matrix<T, C, R> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const C: usize, const R: usize> $OpAssign<T> for Matrix<T, C, R> {
            #[inline]
            fn $assign(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_scalar_rhs!(Add, add, AddAssign, add_assign);
impl_scalar_rhs!(Sub, sub, SubAssign, sub_assign);
impl_scalar_rhs!(Mul, mul, MulAssign, mul_assign);
impl_scalar_rhs!(Div, div, DivAssign, div_assign);
impl_scalar_rhs!(Rem, rem, RemAssign, rem_assign);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Scalar + Neg<Output = T>, const C: usize, const R: usize> Neg for &Matrix<T, C, R> {
    type Output = Matrix<T, C, R>;

    fn neg(self) -> Matrix<T, C, R> {
        (*self).neg()
    }
}

// ── Matrix product: (K cols × R rows) * (C cols × K rows) → (C × R) ──
//
// out[(c, r)] = Σ_t self[(t, r)] · rhs[(c, t)]

impl<T: Scalar, const K: usize, const R: usize, const C: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, K, R>
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, C, R> {
        Matrix::from_fn(|c, r| {
            let mut sum = T::zero();
            for t in 0..K {
                sum = sum + self.cols[t][r] * rhs.cols[c][t];
            }
            sum
        })
    }
}

impl<T: Scalar, const K: usize, const R: usize, const C: usize> Mul<Matrix<T, C, K>>
    for &Matrix<T, K, R>
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, C, R> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const K: usize, const R: usize, const C: usize> Mul<&Matrix<T, C, K>>
    for Matrix<T, K, R>
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: &Matrix<T, C, K>) -> Matrix<T, C, R> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const K: usize, const R: usize, const C: usize> Mul<&Matrix<T, C, K>>
    for &Matrix<T, K, R>
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: &Matrix<T, C, K>) -> Matrix<T, C, R> {
        (*self).mul(*rhs)
    }
}

// ── Matrix-vector products ──────────────────────────────────────────

/// `M * v`: `v` is a column vector with one entry per column of `M`.
impl<T: Scalar, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        let mut out = Vector::zero();
        for c in 0..C {
            out += self.cols[c] * rhs[c];
        }
        out
    }
}

impl<T: Scalar, const C: usize, const R: usize> Mul<&Vector<T, C>> for &Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: &Vector<T, C>) -> Vector<T, R> {
        (*self).mul(*rhs)
    }
}

/// `v * M`: `v` is a row vector with one entry per row of `M`.
impl<T: Scalar, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R>) -> Vector<T, C> {
        Vector::from_fn(|c| self.dot(&rhs.cols[c]))
    }
}

// ── Component-wise product and quotient ─────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Field-by-field product (Hadamard product).
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let a = Matrix::new([[1, 2], [3, 4]]);
    /// let b = Matrix::new([[5, 6], [7, 8]]);
    /// assert_eq!(a.component_mul(&b), Matrix::new([[5, 12], [21, 32]]));
    /// ```
    pub fn component_mul(&self, rhs: &Self) -> Self {
        Matrix::from_fn(|c, r| self.cols[c][r] * rhs.cols[c][r])
    }

    /// Field-by-field quotient.
    pub fn component_div(&self, rhs: &Self) -> Self {
        Matrix::from_fn(|c, r| self.cols[c][r] / rhs.cols[c][r])
    }
}

// ── scalar ⊕ matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl_scalar_lhs!(@op $t, Add, add);
            impl_scalar_lhs!(@op $t, Sub, sub);
            impl_scalar_lhs!(@op $t, Mul, mul);
            impl_scalar_lhs!(@op $t, Div, div);
        )*
    };
    (@op $t:ty, $Op:ident, $method:ident) => {
        impl<const C: usize, const R: usize> $Op<Matrix<$t, C, R>> for $t {
            type Output = Matrix<$t, C, R>;

            fn $method(self, rhs: Matrix<$t, C, R>) -> Matrix<$t, C, R> {
                rhs.map(|b| self.$method(b))
            }
        }

        impl<const C: usize, const R: usize> $Op<&Matrix<$t, C, R>> for $t {
            type Output = Matrix<$t, C, R>;

            fn $method(self, rhs: &Matrix<$t, C, R>) -> Matrix<$t, C, R> {
                self.$method(*rhs)
            }
        }
    };
}

impl_scalar_lhs!(f32, f64, i32, i64, u32, u64);

#[cfg(feature = "complex")]
impl_scalar_lhs!(Complex<f32>, Complex<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_neg() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b - a, Matrix::splat(4.0));
        assert_eq!(-a, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));
        assert_eq!(&a + &b, a + b);
    }

    #[test]
    fn assign_ops() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        m += Matrix::ones();
        assert_eq!(m, Matrix::new([[2, 3], [4, 5]]));
        m -= &Matrix::ones();
        m *= 3;
        assert_eq!(m, Matrix::new([[3, 6], [9, 12]]));
        m %= 5;
        assert_eq!(m, Matrix::new([[3, 1], [4, 2]]));
    }

    #[test]
    fn scalar_broadcast_both_sides() {
        let m = Matrix::new([[2.0_f32, 4.0], [6.0, 8.0]]);
        assert_eq!(m * 0.5, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(0.5 * m, m * 0.5);
        assert_eq!(m + 1.0, Matrix::new([[3.0, 5.0], [7.0, 9.0]]));
        assert_eq!(10.0 - m, Matrix::new([[8.0, 6.0], [4.0, 2.0]]));
        assert_eq!(8.0 / m, Matrix::new([[4.0, 2.0], [8.0 / 6.0, 1.0]]));
        assert_eq!(m / 2.0, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn square_product() {
        // Rows (1 2; 3 4) times rows (5 6; 7 8) is rows (19 22; 43 50).
        let a = Matrix::from_rows([Vector::new([1, 2]), Vector::new([3, 4])]);
        let b = Matrix::from_rows([Vector::new([5, 6]), Vector::new([7, 8])]);
        let c = a * b;
        assert_eq!(c.row(0), Vector::new([19, 22]));
        assert_eq!(c.row(1), Vector::new([43, 50]));
    }

    #[test]
    fn product_shapes() {
        // 3 columns × 2 rows times 4 columns × 3 rows → 4 columns × 2 rows.
        let a: Matrix<i32, 3, 2> = Matrix::from_fn(|c, r| (c + 2 * r) as i32);
        let b: Matrix<i32, 4, 3> = Matrix::from_fn(|c, r| (c as i32) - (r as i32));
        let p: Matrix<i32, 4, 2> = a * b;
        for c in 0..4 {
            for r in 0..2 {
                let expected: i32 = (0..3).map(|t| a[(t, r)] * b[(c, t)]).sum();
                assert_eq!(p[(c, r)], expected);
            }
        }
    }

    #[test]
    fn identity_is_neutral() {
        let m: Matrix<f64, 3, 2> = Matrix::from_fn(|c, r| (c * 2 + r) as f64 + 0.5);
        let left: Matrix<f64, 2, 2> = Matrix::identity();
        let right: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(left * m, m);
        assert_eq!(m * right, m);
    }

    #[test]
    fn matrix_vector_products() {
        let m = Matrix::from_rows([Vector::new([1, 2, 3]), Vector::new([4, 5, 6])]);
        let v = Vector::new([1, 0, -1]);
        assert_eq!(m * v, Vector::new([-2, -2]));
        assert_eq!(&m * &v, m * v);

        let w = Vector::new([1, 1]);
        assert_eq!(w * m, Vector::new([5, 7, 9]));
        assert_eq!(w * m, m.transposed() * w);
    }

    #[test]
    fn component_products() {
        let a = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
        let b = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a.component_div(&b), Matrix::splat(2.0));
        assert_eq!(b.component_mul(&b), Matrix::new([[1.0, 4.0], [9.0, 16.0]]));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_scalar_lhs() {
        let i = Complex::new(0.0_f64, 1.0);
        let m: Matrix<Complex<f64>, 2, 2> = Matrix::identity();
        assert_eq!((i * m)[(1, 1)], i);
    }
}
