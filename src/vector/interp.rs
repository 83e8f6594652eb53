use crate::traits::Scalar;
use crate::Vector;

/// Small integer constant built from `one`, for domains without `NumCast`.
#[inline]
fn small<T: Scalar>(n: u8) -> T {
    (0..n).fold(T::zero(), |acc, _| acc + T::one())
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Linear interpolation `min·(1−a) + max·a`, component-wise.
    ///
    /// Each operand may be a vector or a scalar; scalars are broadcast.
    ///
    /// ```
    /// use fixalg::DVec2;
    /// let lo = DVec2::new([0.0, 10.0]);
    /// let hi = DVec2::new([4.0, 20.0]);
    /// assert_eq!(DVec2::mix(lo, hi, 0.5), DVec2::new([2.0, 15.0]));
    /// assert_eq!(DVec2::mix(lo, 8.0, DVec2::new([0.5, 1.0])), DVec2::new([4.0, 8.0]));
    /// ```
    pub fn mix(min: impl Into<Self>, max: impl Into<Self>, a: impl Into<Self>) -> Self {
        let (min, max, a) = (min.into(), max.into(), a.into());
        min * (Self::ones() - a) + max * a
    }

    /// Cubic Hermite smoothing polynomial `(3 − 2v)·v²`, component-wise.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::<f64, 3>::hermite_interpolation_order3(Vector::new([0.0, 0.5, 1.0]));
    /// assert_eq!(v, Vector::new([0.0, 0.5, 1.0]));
    /// ```
    pub fn hermite_interpolation_order3(v: impl Into<Self>) -> Self {
        v.into().map(|x| (small::<T>(3) - small::<T>(2) * x) * x * x)
    }

    /// Quintic Hermite smoothing polynomial `((6v − 15)·v + 10)·v³`,
    /// component-wise.
    pub fn hermite_interpolation_order5(v: impl Into<Self>) -> Self {
        v.into()
            .map(|x| ((small::<T>(6) * x - small::<T>(15)) * x + small::<T>(10)) * x * x * x)
    }
}
