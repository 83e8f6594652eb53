use core::fmt::Debug;
use num_traits::{Float, Num};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be stored in a vector or matrix.
///
/// This is the minimal capability every scalar domain provides: a zero, a
/// one, and a component hash consistent with `PartialEq`. Booleans are
/// elements but not [`Scalar`]s; their zero is `false` and their one `true`.
pub trait Element: Copy + PartialEq + Debug + 'static {
    /// Additive identity (`false` for booleans).
    const ZERO: Self;
    /// Multiplicative identity (`true` for booleans).
    const ONE: Self;

    /// Hash of a single component. Equal values must produce equal bits.
    fn hash_bits(self) -> u64;
}

/// Trait for arithmetic matrix elements.
///
/// Blanket-implemented for every [`Element`] that is also a `num_traits::Num`:
/// the real, integer and complex domains.
pub trait Scalar: Element + Num {}

impl<T: Element + Num> Scalar for T {}

/// Trait for elements that have a real-valued modulus, used by norms.
///
/// Integers report their modulus as `f64`, reals as themselves, and
/// `Complex<T>` as `T`.
pub trait LinalgScalar: Scalar {
    /// The real type norms are measured in.
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Squared modulus, without the square root.
    fn modulus_squared(self) -> Self::Real;
}

/// Trait for elements closed under division: real floats and complex numbers.
///
/// Required by normalization, matrix inversion and interpolation weights.
pub trait FieldScalar: LinalgScalar + core::ops::Neg<Output = Self> {
    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;
}

/// Trait for floating-point elements.
///
/// Required by the real-domain function set (`sqrt`, `sin`, `floor`, ...).
/// Implies `FieldScalar<Real = Self>` since real floats are their own real type.
pub trait FloatScalar: FieldScalar<Real = Self> + Float {}

impl<T: FieldScalar<Real = T> + Float> FloatScalar for T {}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: $t = 0.0;
                const ONE: $t = 1.0;

                // 0.0 and -0.0 compare equal, so they must hash equal.
                #[inline]
                fn hash_bits(self) -> u64 {
                    if self == 0.0 { 0 } else { self.to_bits() as u64 }
                }
            }

            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn modulus_squared(self) -> $t { self * self }
            }

            impl FieldScalar for $t {
                #[inline] fn from_real(r: $t) -> $t { r }
                #[inline] fn conj(self) -> $t { self }
            }
        )*
    };
}

impl_element_float!(f32, f64);

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: $t = 0;
                const ONE: $t = 1;

                #[inline]
                fn hash_bits(self) -> u64 {
                    self as u64
                }
            }

            impl LinalgScalar for $t {
                type Real = f64;

                #[inline] fn modulus(self) -> f64 { Float::abs(self as f64) }
                #[inline] fn modulus_squared(self) -> f64 { (self as f64) * (self as f64) }
            }
        )*
    };
}

impl_element_int!(i32, i64, u32, u64);

impl Element for bool {
    const ZERO: bool = false;
    const ONE: bool = true;

    #[inline]
    fn hash_bits(self) -> u64 {
        self as u64
    }
}

#[cfg(feature = "complex")]
macro_rules! impl_element_complex {
    ($($t:ty),*) => {
        $(
            impl Element for Complex<$t> {
                const ZERO: Self = Complex::new(0.0, 0.0);
                const ONE: Self = Complex::new(1.0, 0.0);

                #[inline]
                fn hash_bits(self) -> u64 {
                    self.re.hash_bits().wrapping_mul(397) ^ self.im.hash_bits()
                }
            }

            impl LinalgScalar for Complex<$t> {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { self.norm() }
                #[inline] fn modulus_squared(self) -> $t { self.norm_sqr() }
            }

            impl FieldScalar for Complex<$t> {
                #[inline] fn from_real(r: $t) -> Self { Complex::new(r, 0.0) }
                #[inline] fn conj(self) -> Self { Complex::conj(&self) }
            }
        )*
    };
}

#[cfg(feature = "complex")]
impl_element_complex!(f32, f64);
