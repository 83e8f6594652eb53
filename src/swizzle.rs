//! Component reordering.
//!
//! [`Vector::swizzle`] returns a [`Swizzle`] holding a copy of the vector.
//! Besides index-based [`select`](Swizzle::select), it carries one named
//! method per `xyzw` spelling of length 2, 3 and 4 that only reads components
//! the source actually has:
//!
//! ```
//! use fixalg::{IVec2, IVec3, IVec4};
//!
//! let v = IVec3::new([1, 2, 3]);
//! assert_eq!(v.swizzle().zyx(), IVec3::new([3, 2, 1]));
//! assert_eq!(v.swizzle().xxzz(), IVec4::new([1, 1, 3, 3]));
//! assert_eq!(IVec2::new([5, 6]).swizzle().yx(), IVec2::new([6, 5]));
//! ```

use paste::paste;

use crate::error::IndexError;
use crate::Vector;

/// Reordering accessor returned by [`Vector::swizzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swizzle<T, const N: usize> {
    v: Vector<T, N>,
}

impl<T: Copy, const N: usize> Swizzle<T, N> {
    #[inline]
    pub(crate) fn new(v: Vector<T, N>) -> Self {
        Self { v }
    }

    /// The vector being reordered.
    #[inline]
    pub fn vector(&self) -> Vector<T, N> {
        self.v
    }

    /// Same as [`Vector::select`].
    #[inline]
    pub fn select<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M> {
        self.v.select(indices)
    }

    /// Same as [`Vector::try_select`].
    #[inline]
    pub fn try_select<const M: usize>(&self, indices: [usize; M]) -> Result<Vector<T, M>, IndexError> {
        self.v.try_select(indices)
    }
}

// Cartesian product of the alphabet, `depth` letters deep. The prefix and the
// alphabet travel as single token trees so nested repetitions never mix.
macro_rules! swizzle_fns {
    (@emit $m:tt [$($l:ident $i:tt)*]) => {
        paste! {
            #[inline]
            pub fn [<$($l)*>](&self) -> Vector<T, $m> {
                Vector::new([$(self.v.data[$i]),*])
            }
        }
    };
    (@step $m:tt $prefix:tt [] $alpha:tt) => {
        swizzle_fns!(@emit $m $prefix);
    };
    (@step $m:tt $prefix:tt [_ $($depth:tt)*] $alpha:tt) => {
        swizzle_fns!(@each $m $prefix [$($depth)*] $alpha $alpha);
    };
    (@each $m:tt $prefix:tt $depth:tt $alpha:tt [$($l:ident $i:tt)*]) => {
        $( swizzle_fns!(@push $m $prefix $l $i $depth $alpha); )*
    };
    (@push $m:tt [$($p:tt)*] $l:ident $i:tt $depth:tt $alpha:tt) => {
        swizzle_fns!(@step $m [$($p)* $l $i] $depth $alpha);
    };
    ($n:tt: $alpha:tt) => {
        impl<T: Copy> Swizzle<T, $n> {
            swizzle_fns!(@step 2 [] [_ _] $alpha);
            swizzle_fns!(@step 3 [] [_ _ _] $alpha);
            swizzle_fns!(@step 4 [] [_ _ _ _] $alpha);
        }
    };
}

swizzle_fns!(2: [x 0 y 1]);
swizzle_fns!(3: [x 0 y 1 z 2]);
swizzle_fns!(4: [x 0 y 1 z 2 w 3]);
