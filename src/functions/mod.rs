//! Domain-specific element-wise functions.
//!
//! Each scalar domain extends [`Vector`](crate::Vector) (and, for complex
//! numbers, [`Matrix`](crate::Matrix)) with the functions that make sense for
//! it:
//!
//! | Domain | Functions |
//! |--------|-----------|
//! | `f32`, `f64` | `abs sqrt inverse_sqrt exp exp2 ln log2 log10`, trigonometric and hyperbolic functions, `floor ceil round trunc fract signum recip sqr`, binary `pow log atan2 step`, ternary `fma smoothstep smootherstep` |
//! | `i32`, `i64` | `abs signum` |
//! | `Complex<f32>`, `Complex<f64>` | `magnitude phase real imaginary conjugate abs`, trigonometric and hyperbolic functions, `exp ln log2 log10 sqrt reciprocal sqr`, `pow pow_real pow_real_base log from_polar_coordinates` |
//!
//! Binary and ternary functions are associated functions whose operands may
//! each be a vector or a scalar; scalars are broadcast. Name the concrete type
//! at the call site so the scalar's domain is known:
//!
//! ```
//! use fixalg::DVec3;
//!
//! let v = DVec3::new([1.0, 4.0, 9.0]);
//! assert_eq!(v.sqrt(), DVec3::new([1.0, 2.0, 3.0]));
//! assert_eq!(DVec3::pow(v, 2.0), DVec3::new([1.0, 16.0, 81.0]));
//! assert_eq!(DVec3::pow(2.0, DVec3::new([0.0, 1.0, 3.0])), DVec3::new([1.0, 2.0, 8.0]));
//! ```
//!
//! Inputs outside a function's mathematical domain are not validated: the
//! result is whatever the scalar function produces (NaN or infinity).

#[cfg(feature = "complex")]
mod complex;
mod integer;
mod real;
