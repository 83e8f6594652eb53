use num_traits::Float;

use crate::Vector;

/// Unary functions that forward straight to `num_traits::Float`.
macro_rules! float_unary {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Component-wise `", stringify!($name), "`.")]
            #[inline]
            pub fn $name(&self) -> Self {
                self.map(|x| Float::$name(x))
            }
        )*
    };
}

macro_rules! impl_real_functions {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Vector<$t, N> {
                float_unary!(
                    abs, sqrt, exp, exp2, ln, log2, log10,
                    sin, cos, tan, asin, acos, atan, sinh, cosh, tanh,
                    floor, ceil, round, trunc, fract, recip,
                );

                /// Component-wise `1 / sqrt(x)`.
                #[inline]
                pub fn inverse_sqrt(&self) -> Self {
                    self.map(|x| Float::sqrt(x).recip())
                }

                /// Component-wise square.
                #[inline]
                pub fn sqr(&self) -> Self {
                    self.map(|x| x * x)
                }

                /// Component-wise sign: `-1`, `0` or `1`. Zero of either sign maps
                /// to zero and NaN stays NaN.
                pub fn signum(&self) -> Self {
                    self.map(|x| if x == 0.0 { 0.0 } else { Float::signum(x) })
                }

                /// Component-wise `base^exp`.
                pub fn pow(base: impl Into<Self>, exp: impl Into<Self>) -> Self {
                    base.into().zip_map(exp.into(), Float::powf)
                }

                /// Component-wise logarithm of `v` in `base`.
                pub fn log(v: impl Into<Self>, base: impl Into<Self>) -> Self {
                    v.into().zip_map(base.into(), Float::log)
                }

                /// Component-wise four-quadrant arctangent of `y / x`.
                pub fn atan2(y: impl Into<Self>, x: impl Into<Self>) -> Self {
                    y.into().zip_map(x.into(), Float::atan2)
                }

                /// Component-wise `0` where `x < edge`, else `1`.
                pub fn step(edge: impl Into<Self>, x: impl Into<Self>) -> Self {
                    edge.into()
                        .zip_map(x.into(), |e, x| if x < e { 0.0 } else { 1.0 })
                }

                /// Component-wise fused multiply-add `a * b + c`.
                pub fn fma(a: impl Into<Self>, b: impl Into<Self>, c: impl Into<Self>) -> Self {
                    a.into()
                        .zip_map(b.into(), |a, b| (a, b))
                        .zip_map(c.into(), |(a, b), c| Float::mul_add(a, b, c))
                }

                /// Cubic Hermite step between `edge0` and `edge1`.
                ///
                /// `v` is first mapped to `[0, 1]` by clamping
                /// `(v - edge0) / (edge1 - edge0)`. Equal edges are not guarded.
                pub fn smoothstep(
                    edge0: impl Into<Self>,
                    edge1: impl Into<Self>,
                    v: impl Into<Self>,
                ) -> Self {
                    let t = Self::unit_interval(edge0.into(), edge1.into(), v.into());
                    Self::hermite_interpolation_order3(t)
                }

                /// Quintic Hermite step between `edge0` and `edge1`.
                pub fn smootherstep(
                    edge0: impl Into<Self>,
                    edge1: impl Into<Self>,
                    v: impl Into<Self>,
                ) -> Self {
                    let t = Self::unit_interval(edge0.into(), edge1.into(), v.into());
                    Self::hermite_interpolation_order5(t)
                }

                fn unit_interval(edge0: Self, edge1: Self, v: Self) -> Self {
                    let zero: $t = 0.0;
                    let one: $t = 1.0;
                    Self::clamp((v - edge0) / (edge1 - edge0), zero, one)
                }
            }
        )*
    };
}

impl_real_functions!(f32, f64);
