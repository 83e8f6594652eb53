use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::traits::Scalar;
use crate::Vector;

// ── Component-wise binary operators ─────────────────────────────────
//
// Each operator comes in vector ⊕ vector and vector ⊕ scalar forms, with
// reference variants and compound assignment. Vector is Copy, so &Vector
// ops just deref and delegate.

macro_rules! impl_componentwise_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident) => {
        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a.$method(b))
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| a.$method(rhs))
            }
        }

        impl<T: Scalar, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                (*self).$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<T> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $method(self, rhs: T) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: &Vector<T, N>) {
                *self = (*self).$method(*rhs);
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<T> for Vector<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_componentwise_binop!(Add, add, AddAssign, add_assign);
impl_componentwise_binop!(Sub, sub, SubAssign, sub_assign);
impl_componentwise_binop!(Mul, mul, MulAssign, mul_assign);
impl_componentwise_binop!(Div, div, DivAssign, div_assign);
impl_componentwise_binop!(Rem, rem, RemAssign, rem_assign);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> {
        (*self).neg()
    }
}

// ── scalar ⊕ vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl_scalar_lhs!(@op $t, Add, add);
            impl_scalar_lhs!(@op $t, Sub, sub);
            impl_scalar_lhs!(@op $t, Mul, mul);
            impl_scalar_lhs!(@op $t, Div, div);
            impl_scalar_lhs!(@op $t, Rem, rem);
        )*
    };
    (@op $t:ty, $Op:ident, $method:ident) => {
        impl<const N: usize> $Op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|b| self.$method(b))
            }
        }

        impl<const N: usize> $Op<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                self.$method(*rhs)
            }
        }
    };
}

impl_scalar_lhs!(f32, f64, i32, i64, u32, u64);

#[cfg(feature = "complex")]
impl_scalar_lhs!(Complex<f32>, Complex<f64>);
