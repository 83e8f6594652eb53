//! Pre-defined type aliases for every vector size and matrix shape.
//!
//! Matrix shapes are named columns first: `Matrix2x3<T>` has 2 columns of 3
//! rows. Concrete families fix the scalar domain:
//!
//! | Prefix | Domain |
//! |--------|--------|
//! | `Vec`, `Mat` | `f32` |
//! | `DVec`, `DMat` | `f64` |
//! | `IVec`, `IMat` | `i32` |
//! | `LVec`, `LMat` | `i64` |
//! | `UVec`, `UMat` | `u32` |
//! | `ULVec`, `ULMat` | `u64` |
//! | `BVec`, `BMat` | `bool` |
//! | `CVec`, `CMat` | `Complex<f64>` (feature `complex`) |

use paste::paste;

use crate::{Matrix, Vector};

// ── Generic aliases ────────────────────────────────────────────────

/// 2-component vector.
pub type Vector2<T> = Vector<T, 2>;
/// 3-component vector.
pub type Vector3<T> = Vector<T, 3>;
/// 4-component vector.
pub type Vector4<T> = Vector<T, 4>;

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// 2 columns × 3 rows.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2 columns × 4 rows.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// 3 columns × 2 rows.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3 columns × 4 rows.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4 columns × 2 rows.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4 columns × 3 rows.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

// ── Concrete domain families ───────────────────────────────────────

macro_rules! domain_aliases {
    ($(#[$attr:meta])* $vec:ident, $mat:ident, $t:ty) => {
        paste! {
            $(#[$attr])* pub type [<$vec 2>] = Vector<$t, 2>;
            $(#[$attr])* pub type [<$vec 3>] = Vector<$t, 3>;
            $(#[$attr])* pub type [<$vec 4>] = Vector<$t, 4>;

            $(#[$attr])* pub type [<$mat 2>] = Matrix<$t, 2, 2>;
            $(#[$attr])* pub type [<$mat 3>] = Matrix<$t, 3, 3>;
            $(#[$attr])* pub type [<$mat 4>] = Matrix<$t, 4, 4>;
            $(#[$attr])* pub type [<$mat 2 x 3>] = Matrix<$t, 2, 3>;
            $(#[$attr])* pub type [<$mat 2 x 4>] = Matrix<$t, 2, 4>;
            $(#[$attr])* pub type [<$mat 3 x 2>] = Matrix<$t, 3, 2>;
            $(#[$attr])* pub type [<$mat 3 x 4>] = Matrix<$t, 3, 4>;
            $(#[$attr])* pub type [<$mat 4 x 2>] = Matrix<$t, 4, 2>;
            $(#[$attr])* pub type [<$mat 4 x 3>] = Matrix<$t, 4, 3>;
        }
    };
}

domain_aliases!(Vec, Mat, f32);
domain_aliases!(DVec, DMat, f64);
domain_aliases!(IVec, IMat, i32);
domain_aliases!(LVec, LMat, i64);
domain_aliases!(UVec, UMat, u32);
domain_aliases!(ULVec, ULMat, u64);
domain_aliases!(BVec, BMat, bool);
domain_aliases!(#[cfg(feature = "complex")] CVec, CMat, num_complex::Complex<f64>);
