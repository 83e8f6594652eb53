use num_complex::Complex;

use crate::{Matrix, Vector};

/// Unary functions that forward to the `num_complex::Complex` method of the
/// same name.
macro_rules! complex_unary {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Component-wise complex `", stringify!($name), "`.")]
            #[inline]
            pub fn $name(&self) -> Self {
                self.map(|z| z.$name())
            }
        )*
    };
}

macro_rules! impl_complex_functions {
    ($($f:ty),*) => {
        $(
            impl<const N: usize> Vector<Complex<$f>, N> {
                /// Every component set to `i`.
                pub fn imaginary_ones() -> Self {
                    Self::splat(Complex::i())
                }

                /// `i` along `axis`, zero elsewhere. Panics if `axis >= N`.
                pub fn imaginary_unit(axis: usize) -> Self {
                    let mut v = Self::zero();
                    v[axis] = Complex::i();
                    v
                }

                pub fn imaginary_unit_x() -> Self {
                    Self::imaginary_unit(0)
                }

                pub fn imaginary_unit_y() -> Self {
                    Self::imaginary_unit(1)
                }

                /// Component moduli `|z|`.
                ///
                /// ```
                /// use fixalg::{CVec2, DVec2};
                /// use num_complex::Complex;
                /// let v = CVec2::new([Complex::new(3.0, 4.0), Complex::new(0.0, -2.0)]);
                /// assert_eq!(v.magnitude(), DVec2::new([5.0, 2.0]));
                /// ```
                pub fn magnitude(&self) -> Vector<$f, N> {
                    self.map(|z| z.norm())
                }

                /// Component arguments, in `(-π, π]`.
                pub fn phase(&self) -> Vector<$f, N> {
                    self.map(|z| z.arg())
                }

                /// Real parts.
                pub fn real(&self) -> Vector<$f, N> {
                    self.map(|z| z.re)
                }

                /// Imaginary parts.
                pub fn imaginary(&self) -> Vector<$f, N> {
                    self.map(|z| z.im)
                }

                /// Same as [`magnitude`](Self::magnitude).
                pub fn abs(&self) -> Vector<$f, N> {
                    self.magnitude()
                }

                /// Component-wise complex conjugate.
                pub fn conjugate(&self) -> Self {
                    self.map(|z| z.conj())
                }

                complex_unary!(
                    sin, cos, tan, sinh, cosh, tanh, asin, acos, atan,
                    exp, ln, sqrt,
                );

                /// Component-wise base-2 logarithm.
                pub fn log2(&self) -> Self {
                    self.map(|z| z.log(2.0))
                }

                /// Component-wise base-10 logarithm.
                pub fn log10(&self) -> Self {
                    self.map(|z| z.log(10.0))
                }

                /// Component-wise `1 / z`.
                pub fn reciprocal(&self) -> Self {
                    self.map(|z| z.inv())
                }

                /// Component-wise square.
                pub fn sqr(&self) -> Self {
                    self.map(|z| z * z)
                }

                /// Component-wise complex power `base^exp`.
                pub fn pow(base: impl Into<Self>, exp: impl Into<Self>) -> Self {
                    base.into().zip_map(exp.into(), |b, e| b.powc(e))
                }

                /// Component-wise power with a real exponent.
                pub fn pow_real(base: impl Into<Self>, exp: impl Into<Vector<$f, N>>) -> Self {
                    base.into().zip_map(exp.into(), |b, e| b.powf(e))
                }

                /// Component-wise power of a real base to a complex exponent.
                ///
                /// ```
                /// use fixalg::CVec2;
                /// use num_complex::Complex;
                /// let v = CVec2::pow_real_base(2.0, CVec2::new([Complex::new(3.0, 0.0), Complex::new(0.0, 0.0)]));
                /// assert!((v[0].re - 8.0).abs() < 1e-12);
                /// assert_eq!(v[1], Complex::new(1.0, 0.0));
                /// ```
                pub fn pow_real_base(base: impl Into<Vector<$f, N>>, exp: impl Into<Self>) -> Self {
                    base.into().zip_map(exp.into(), |b, e| e.expf(b))
                }

                /// Component-wise logarithm of `v` in a real `base`.
                pub fn log(v: impl Into<Self>, base: impl Into<Vector<$f, N>>) -> Self {
                    v.into().zip_map(base.into(), |z, b| z.log(b))
                }

                /// Build complex components from moduli and arguments.
                pub fn from_polar_coordinates(
                    magnitude: impl Into<Vector<$f, N>>,
                    phase: impl Into<Vector<$f, N>>,
                ) -> Self {
                    magnitude
                        .into()
                        .zip_map(phase.into(), |r, theta| Complex::from_polar(r, theta))
                }
            }

            impl<const N: usize> Vector<$f, N> {
                /// Promote to complex components with zero imaginary parts.
                pub fn to_complex(&self) -> Vector<Complex<$f>, N> {
                    self.map(|x| Complex::new(x, 0.0))
                }
            }

            impl<const C: usize, const R: usize> Matrix<Complex<$f>, C, R> {
                /// Field-wise complex conjugate.
                pub fn conjugate(&self) -> Self {
                    self.map(|z| z.conj())
                }

                /// Field moduli `|z|`.
                pub fn magnitude(&self) -> Matrix<$f, C, R> {
                    self.map(|z| z.norm())
                }

                /// Real parts.
                pub fn real(&self) -> Matrix<$f, C, R> {
                    self.map(|z| z.re)
                }

                /// Imaginary parts.
                pub fn imaginary(&self) -> Matrix<$f, C, R> {
                    self.map(|z| z.im)
                }

                /// Conjugate transpose (Hermitian adjoint).
                pub fn conjugate_transposed(&self) -> Matrix<Complex<$f>, R, C> {
                    self.transposed().conjugate()
                }
            }
        )*
    };
}

impl_complex_functions!(f32, f64);

macro_rules! impl_imaginary_z {
    ($($n:literal),*) => {
        $(
            impl Vector<Complex<f32>, $n> {
                pub fn imaginary_unit_z() -> Self {
                    Self::imaginary_unit(2)
                }
            }

            impl Vector<Complex<f64>, $n> {
                pub fn imaginary_unit_z() -> Self {
                    Self::imaginary_unit(2)
                }
            }
        )*
    };
}

impl_imaginary_z!(3, 4);

impl Vector<Complex<f32>, 4> {
    pub fn imaginary_unit_w() -> Self {
        Self::imaginary_unit(3)
    }
}

impl Vector<Complex<f64>, 4> {
    pub fn imaginary_unit_w() -> Self {
        Self::imaginary_unit(3)
    }
}
