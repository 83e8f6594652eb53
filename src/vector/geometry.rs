use crate::traits::{FloatScalar, Scalar};
use crate::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Inner product, `Σ aᵢ·bᵢ`.
    ///
    /// No conjugation is applied for complex vectors.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let a = Vector::new([1.0, 2.0, 3.0]);
    /// let b = Vector::new([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i] * rhs.data[i];
        }
        sum
    }

    /// Reflection of incident `i` about the normal `n`: `i - 2·dot(n, i)·n`.
    ///
    /// `n` is expected to be normalized already; it is used as given.
    pub fn reflect(i: &Self, n: &Self) -> Self {
        let two = T::one() + T::one();
        *i - *n * (two * n.dot(i))
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Signed area spanned by two 2-vectors, `a.x·b.y − a.y·b.x`.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let x = Vector::new([1, 0]);
    /// let y = Vector::new([0, 1]);
    /// assert_eq!(x.cross(&y), 1);
    /// assert_eq!(y.cross(&x), -1);
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> T {
        self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0]
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let x = Vector::new([1.0, 0.0, 0.0]);
    /// let y = Vector::new([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y), Vector::new([0.0, 0.0, 1.0]));
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = rhs.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Refraction of incident `i` through a surface with normal `n` and
    /// ratio of indices of refraction `eta`.
    ///
    /// Returns the zero vector on total internal reflection. `i` and `n` are
    /// expected to be normalized.
    pub fn refract(i: &Self, n: &Self, eta: T) -> Self {
        let d = n.dot(i);
        let k = T::one() - eta * eta * (T::one() - d * d);
        if k < T::zero() {
            Self::zero()
        } else {
            *i * eta - *n * (eta * d + k.sqrt())
        }
    }

    /// `n` if it faces against the incident `i` (as measured by `nref`),
    /// otherwise `-n`.
    pub fn face_forward(n: &Self, i: &Self, nref: &Self) -> Self {
        if nref.dot(i) < T::zero() {
            *n
        } else {
            -*n
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dot_product() {
        let a = Vector::new([1, 2, 3, 4]);
        let b = Vector::new([4, 3, 2, 1]);
        assert_eq!(a.dot(&b), 20);
    }

    #[test]
    fn cross_2d_is_signed_area() {
        let a = Vector::new([2.0, 1.0]);
        let b = Vector::new([1.0, 3.0]);
        assert_eq!(a.cross(&b), 5.0);
        assert_eq!(b.cross(&a), -5.0);
        assert_eq!(a.cross(&a), 0.0);
    }

    #[test]
    fn cross_3d_anticommutative() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([4.0, 5.0, 6.0]);
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.cross(&a), Vector::zero());
        assert_eq!(a.cross(&b).dot(&a), 0.0);
    }

    #[test]
    fn reflect_off_floor() {
        let i = Vector::new([1.0, -1.0]);
        let n = Vector::new([0.0, 1.0]);
        assert_eq!(Vector::reflect(&i, &n), Vector::new([1.0, 1.0]));
    }

    #[test]
    fn reflect_uses_normal_as_given() {
        // An unnormalized normal is not corrected.
        let i = Vector::new([1, -1]);
        let n = Vector::new([0, 2]);
        assert_eq!(Vector::reflect(&i, &n), Vector::new([1, 7]));
    }

    #[test]
    fn refract_straight_through() {
        let i = Vector::new([0.0_f64, -1.0, 0.0]);
        let n = Vector::new([0.0_f64, 1.0, 0.0]);
        let r = Vector::refract(&i, &n, 1.0);
        assert_relative_eq!(r[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn refract_total_internal_reflection() {
        let i = Vector::new([1.0_f64, -0.1]).normalized();
        let n = Vector::new([0.0_f64, 1.0]);
        assert_eq!(Vector::refract(&i, &n, 1.5), Vector::zero());
    }

    #[test]
    fn face_forward_flips() {
        let n = Vector::new([0.0, 1.0]);
        let i = Vector::new([0.0, -1.0]);
        assert_eq!(Vector::face_forward(&n, &i, &n), n);
        assert_eq!(Vector::face_forward(&n, &(-i), &n), -n);
    }
}
