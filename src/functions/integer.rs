use crate::Vector;

macro_rules! impl_signed_functions {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Vector<$t, N> {
                /// Component-wise absolute value. `MIN` wraps to itself.
                #[inline]
                pub fn abs(&self) -> Self {
                    self.map(<$t>::wrapping_abs)
                }

                /// Component-wise sign: `-1`, `0` or `1`.
                #[inline]
                pub fn signum(&self) -> Self {
                    self.map(<$t>::signum)
                }
            }
        )*
    };
}

impl_signed_functions!(i32, i64);
