use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::traits::Element;
use crate::Vector;

// ── Boolean reductions ──────────────────────────────────────────────

impl<const N: usize> Vector<bool, N> {
    /// `true` if every component is `true` (AND-reduction).
    ///
    /// ```
    /// use fixalg::BVec3;
    /// assert!(BVec3::ones().all());
    /// assert!(!BVec3::unit_y().all());
    /// assert!(BVec3::unit_y().any());
    /// ```
    #[inline]
    pub fn all(&self) -> bool {
        self.data.iter().all(|&c| c)
    }

    /// `true` if any component is `true` (OR-reduction).
    #[inline]
    pub fn any(&self) -> bool {
        self.data.iter().any(|&c| c)
    }
}

// ── Ordering ────────────────────────────────────────────────────────
//
// Booleans order `false < true`, so `min_element` on a boolean vector is
// its AND-reduction and `max_element` its OR-reduction.

impl<T: Element + PartialOrd, const N: usize> Vector<T, N> {
    /// Smallest component.
    pub fn min_element(&self) -> T {
        self.data[1..]
            .iter()
            .fold(self.data[0], |m, &c| if c < m { c } else { m })
    }

    /// Largest component.
    pub fn max_element(&self) -> T {
        self.data[1..]
            .iter()
            .fold(self.data[0], |m, &c| if c > m { c } else { m })
    }

    /// Component-wise minimum. Each operand may be a vector or a scalar.
    pub fn min(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        lhs.into()
            .zip_map(rhs.into(), |a, b| if b < a { b } else { a })
    }

    /// Component-wise maximum. Each operand may be a vector or a scalar.
    pub fn max(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        lhs.into()
            .zip_map(rhs.into(), |a, b| if b > a { b } else { a })
    }

    /// Component-wise `min(max(v, lo), hi)`.
    ///
    /// ```
    /// use fixalg::IVec3;
    /// let v = IVec3::new([-5, 3, 12]);
    /// assert_eq!(IVec3::clamp(v, 0, 10), IVec3::new([0, 3, 10]));
    /// ```
    pub fn clamp(v: impl Into<Self>, lo: impl Into<Self>, hi: impl Into<Self>) -> Self {
        Self::min(Self::max(v, lo), hi)
    }

    #[inline]
    pub fn cmp_lt(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a < b)
    }

    #[inline]
    pub fn cmp_le(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a <= b)
    }

    #[inline]
    pub fn cmp_gt(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a > b)
    }

    #[inline]
    pub fn cmp_ge(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a >= b)
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Component-wise equality mask.
    #[inline]
    pub fn cmp_eq(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a == b)
    }

    /// Component-wise inequality mask.
    #[inline]
    pub fn cmp_ne(&self, rhs: &Self) -> Vector<bool, N> {
        self.zip_map(*rhs, |a, b| a != b)
    }
}

// ── Logical / bitwise operators ─────────────────────────────────────
//
// `&`, `|` and `^` act as logical AND, OR and XOR on boolean vectors and as
// bitwise operators on integer vectors.

macro_rules! impl_bitwise_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident) => {
        impl<T: Element + $Op<Output = T>, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a.$method(b))
            }
        }

        impl<T: Element + $Op<Output = T>, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| a.$method(rhs))
            }
        }

        impl<T: Element + $Op<Output = T>, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_bitwise_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T: Element + Not<Output = T>, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}
