//! # fixalg
//!
//! Fixed-size vectors (2 to 4 components) and matrices (up to 4×4) over real,
//! integer, boolean and complex scalars. Everything is a stack-allocated
//! `Copy` value; no heap allocation, `no_std` compatible.
//!
//! ## Quick start
//!
//! ```
//! use fixalg::{DMat3, DVec3, Vector};
//!
//! // Columns first: this is the matrix with rows [2 1 -1], [-3 -1 2], [-2 1 2].
//! let a = DMat3::new([
//!     [2.0, -3.0, -2.0],
//!     [1.0, -1.0, 1.0],
//!     [-1.0, 2.0, 2.0],
//! ]);
//! let b = DVec3::new([8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x - DVec3::new([2.0, 3.0, -1.0])).length() < 1e-12);
//!
//! let v = Vector::new([1, 2, 3]);
//! assert_eq!(v.swizzle().zyx(), Vector::new([3, 2, 1]));
//! assert_eq!(v.dot(&v), 14);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: `Vector<T, N>`, component access, arithmetic with scalar
//!   broadcast on either side, norms, geometry (`dot`, `cross`, `reflect`,
//!   ...), interpolation and component-wise comparisons.
//!
//! - [`matrix`]: `Matrix<T, C, R>` stored as `C` column vectors of length `R`.
//!   Column-major field order, matrix products, transpose, norms and, for
//!   square shapes, determinant, inverse and solve. Shape aliases
//!   (`Mat4`, `DMat2x3`, ...) live in [`matrix::aliases`].
//!
//! - [`functions`]: per-domain element-wise functions (`sin`, `pow`,
//!   `smoothstep`, complex `phase` and `from_polar_coordinates`, ...).
//!
//! - [`swizzle`]: `xyzw` reordering shortcuts.
//!
//! - [`traits`]: scalar domain capabilities:
//!   - [`Element`]: anything storable, including `bool`
//!   - [`Scalar`]: arithmetic elements (`Element + Num`)
//!   - [`LinalgScalar`]: elements with a real modulus, used by norms
//!   - [`FieldScalar`]: real floats and complex numbers, used by inversion
//!   - [`FloatScalar`]: real floats, used by the transcendental set
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `std`     | yes     | Hardware FPU via system libm |
//! | `libm`    | no      | Pure-Rust software float fallback for `no_std` |
//! | `complex` | yes     | `Complex<f32>` / `Complex<f64>` domain via `num-complex` |
//! | `serde`   | no      | Flat tuple (de)serialization |
//! | `all`     | no      | `std` + `complex` + `serde` |

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod functions;
pub mod matrix;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod swizzle;
pub mod traits;
pub mod vector;

pub use error::{IndexError, LinalgError};
pub use matrix::aliases::*;
pub use matrix::Matrix;
pub use swizzle::Swizzle;
pub use traits::{Element, FieldScalar, FloatScalar, LinalgScalar, Scalar};
pub use vector::{Joined, Vector};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
