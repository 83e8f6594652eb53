use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::traits::Element;
use crate::Matrix;

// ── Boolean reductions ──────────────────────────────────────────────

impl<const C: usize, const R: usize> Matrix<bool, C, R> {
    /// `true` if every field is `true`.
    pub fn all(&self) -> bool {
        self.cols.iter().all(|c| c.all())
    }

    /// `true` if any field is `true`.
    pub fn any(&self) -> bool {
        self.cols.iter().any(|c| c.any())
    }
}

impl<T: Element + PartialOrd, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Smallest field. For booleans this is the AND of all fields.
    pub fn min_element(&self) -> T {
        self.cols[1..].iter().fold(self.cols[0].min_element(), |m, c| {
            let x = c.min_element();
            if x < m {
                x
            } else {
                m
            }
        })
    }

    /// Largest field. For booleans this is the OR of all fields.
    pub fn max_element(&self) -> T {
        self.cols[1..].iter().fold(self.cols[0].max_element(), |m, c| {
            let x = c.max_element();
            if x > m {
                x
            } else {
                m
            }
        })
    }
}

impl<T: Element, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Field-wise equality mask.
    pub fn cmp_eq(&self, rhs: &Self) -> Matrix<bool, C, R> {
        self.zip_map(*rhs, |a, b| a == b)
    }

    /// Field-wise inequality mask.
    pub fn cmp_ne(&self, rhs: &Self) -> Matrix<bool, C, R> {
        self.zip_map(*rhs, |a, b| a != b)
    }
}

// ── Logical / bitwise operators ─────────────────────────────────────

macro_rules! impl_bitwise_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident) => {
        impl<T: Element + $Op<Output = T>, const C: usize, const R: usize> $Op for Matrix<T, C, R> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a.$method(b))
            }
        }

        impl<T: Element + $Op<Output = T>, const C: usize, const R: usize> $Op<T>
            for Matrix<T, C, R>
        {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|a| a.$method(rhs))
            }
        }

        impl<T: Element + $Op<Output = T>, const C: usize, const R: usize> $OpAssign
            for Matrix<T, C, R>
        {
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_bitwise_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T: Element + Not<Output = T>, const C: usize, const R: usize> Not for Matrix<T, C, R> {
    type Output = Self;

    fn not(self) -> Self {
        self.map(|a| !a)
    }
}
