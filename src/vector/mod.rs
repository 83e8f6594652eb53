mod fmt;
mod geometry;
mod interp;
mod logic;
mod norm;
mod ops;

use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use num_traits::{AsPrimitive, Bounded, Float};

use crate::error::IndexError;
use crate::swizzle::Swizzle;
use crate::traits::{Element, FloatScalar};

pub use fmt::Joined;

/// Fixed-size vector of `N` components, `N` ∈ {2, 3, 4}.
///
/// Components are ordered `x, y[, z][, w]` and stored inline, so a vector is
/// a plain `Copy` value: every operation returns a new vector, and the only
/// way to change a component is indexed assignment on an owned binding.
/// Instantiating a dimension outside 2..=4 fails at compile time.
///
/// # Examples
///
/// ```
/// use fixalg::{Vector, DVec2};
///
/// let a = DVec2::new([3.5, 8.5]);
/// let b = a + DVec2::ones();
/// assert_eq!(b, DVec2::new([4.5, 9.5]));
/// assert_eq!(a.length(), (3.5_f64 * 3.5 + 8.5 * 8.5).sqrt());
///
/// let v: Vector<i32, 4> = Vector::splat(7);
/// assert_eq!(v[3], 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    const DIMENSION_CHECK: () = assert!(N >= 2 && N <= 4, "vector dimension must be 2, 3 or 4");

    /// Create a vector from its full component list.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([1, 2, 3]);
    /// assert_eq!(v[2], 3);
    /// ```
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIMENSION_CHECK;
        Self { data }
    }

    /// Alias of [`Vector::new`].
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self::new(data)
    }

    /// Create a vector by calling `f(i)` for each component index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(core::array::from_fn(f))
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Components as a slice, in `x, y, z, w` order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Apply a function to every component, producing a new vector.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([1.5_f64, -2.5]);
    /// assert_eq!(v.map(|x| x > 0.0), Vector::new([true, false]));
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::new(self.data.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Copy of the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data
    }

    /// Combine two vectors component by component.
    #[inline]
    pub fn zip_map<U: Copy, V>(self, rhs: Vector<U, N>, mut f: impl FnMut(T, U) -> V) -> Vector<V, N> {
        Vector::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Checked component read. Valid indices are `0..N`.
    ///
    /// ```
    /// use fixalg::{IndexError, Vector};
    /// let v = Vector::new([true, false, true, true]);
    /// assert_eq!(v.get(1), Ok(false));
    /// assert_eq!(v.get(4), Err(IndexError::Component { index: 4, len: 4 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        self.data
            .get(index)
            .copied()
            .ok_or(IndexError::Component { index, len: N })
    }

    /// Checked component write. Valid indices are `0..N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(IndexError::Component { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Build a vector of any supported size from the components at `indices`.
    ///
    /// Indices may repeat and appear in any order. Panics on an index
    /// outside `0..N`; see [`Vector::try_select`].
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([1, 2]);
    /// assert_eq!(v.select([1, 1, 0, 1]), Vector::new([2, 2, 1, 2]));
    /// ```
    #[inline]
    pub fn select<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M> {
        Vector::new(indices.map(|i| self[i]))
    }

    /// Like [`Vector::select`], but reports the first bad index.
    pub fn try_select<const M: usize>(&self, indices: [usize; M]) -> Result<Vector<T, M>, IndexError> {
        for &i in &indices {
            self.get(i)?;
        }
        Ok(self.select(indices))
    }

    /// Accessor for `xyzw` reordering shortcuts, see [`Swizzle`].
    #[inline]
    pub fn swizzle(&self) -> Swizzle<T, N> {
        Swizzle::new(*self)
    }

    /// `x` component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// `y` component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// All-zero vector (all-`false` for booleans).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// All-one vector (all-`true` for booleans).
    #[inline]
    pub fn ones() -> Self {
        Self::splat(T::ONE)
    }

    /// Unit vector along `axis`. Panics if `axis >= N`.
    #[inline]
    pub fn unit(axis: usize) -> Self {
        let mut v = Self::zero();
        v[axis] = T::ONE;
        v
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::unit(0)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::unit(1)
    }

    /// Copy into a vector of another size.
    ///
    /// A larger target zero-fills the trailing components; a smaller target
    /// drops them.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([3.0, -1.5]);
    /// assert_eq!(v.resize::<3>(), Vector::new([3.0, -1.5, 0.0]));
    /// assert_eq!(Vector::new([6, 9, 0, 7]).resize::<3>(), Vector::new([6, 9, 0]));
    /// ```
    #[inline]
    pub fn resize<const M: usize>(&self) -> Vector<T, M> {
        Vector::from_fn(|i| if i < N { self.data[i] } else { T::ZERO })
    }

    /// Order-sensitive combination of the component hashes.
    ///
    /// Equal vectors always produce equal codes. This is what the `Hash`
    /// implementation feeds to the hasher.
    pub fn hash_code(&self) -> u64 {
        self.data[1..]
            .iter()
            .fold(self.data[0].hash_bits(), |h, c| h.wrapping_mul(397) ^ c.hash_bits())
    }

    /// Convert each component with an `as` cast.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([1.9_f64, -2.7]);
    /// assert_eq!(v.cast::<i32>(), Vector::new([1, -2]));
    /// ```
    #[inline]
    pub fn cast<U: Copy + 'static>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|x| x.as_())
    }
}

impl<T: Element + Bounded, const N: usize> Vector<T, N> {
    /// Every component set to the domain's largest value.
    pub fn max_value() -> Self {
        Self::splat(T::max_value())
    }

    /// Every component set to the domain's smallest value.
    pub fn min_value() -> Self {
        Self::splat(T::min_value())
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Every component set to the smallest positive subnormal value
    /// (`1.4e-45` for `f32`), not the machine epsilon.
    pub fn epsilon() -> Self {
        // 2^-126 * 2^-23 for f32, 2^-1022 * 2^-52 for f64; both exact.
        Self::splat(T::min_positive_value() * <T as Float>::epsilon())
    }

    pub fn nan() -> Self {
        Self::splat(<T as Float>::nan())
    }

    pub fn infinity() -> Self {
        Self::splat(<T as Float>::infinity())
    }

    pub fn neg_infinity() -> Self {
        Self::splat(<T as Float>::neg_infinity())
    }
}

// ── Size-specific constructors and accessors ────────────────────────

impl<T: Copy> Vector<T, 2> {
    /// Append a `z` component.
    #[inline]
    pub fn extend(&self, z: T) -> Vector<T, 3> {
        Vector::new([self.data[0], self.data[1], z])
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Append a `w` component.
    #[inline]
    pub fn extend(&self, w: T) -> Vector<T, 4> {
        Vector::new([self.data[0], self.data[1], self.data[2], w])
    }

    /// Drop the `z` component.
    #[inline]
    pub fn truncate(&self) -> Vector<T, 2> {
        Vector::new([self.data[0], self.data[1]])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Drop the `w` component.
    #[inline]
    pub fn truncate(&self) -> Vector<T, 3> {
        Vector::new([self.data[0], self.data[1], self.data[2]])
    }

    /// `w` component.
    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }
}

impl<T: Element> Vector<T, 4> {
    #[inline]
    pub fn unit_w() -> Self {
        Self::unit(3)
    }
}

macro_rules! impl_z_axis {
    ($($n:literal),*) => {
        $(
            impl<T: Copy> Vector<T, $n> {
                /// `z` component.
                #[inline]
                pub fn z(&self) -> T {
                    self.data[2]
                }
            }

            impl<T: Element> Vector<T, $n> {
                #[inline]
                pub fn unit_z() -> Self {
                    Self::unit(2)
                }
            }
        )*
    };
}

impl_z_axis!(3, 4);

// ── Trait plumbing ──────────────────────────────────────────────────

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(c) => c,
            None => panic!("{}", IndexError::Component { index, len: N }),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(c) => c,
            None => panic!("{}", IndexError::Component { index, len: N }),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

/// Scalar broadcast: every component takes the value.
impl<T: Copy, const N: usize> From<T> for Vector<T, N> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
