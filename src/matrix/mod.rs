pub mod aliases;
mod logic;
mod norm;
mod ops;
mod square;
mod util;

use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use num_traits::AsPrimitive;

use crate::error::IndexError;
use crate::traits::Element;
use crate::Vector;

/// Fixed-size matrix with `C` columns and `R` rows, `C, R` ∈ {2, 3, 4}.
///
/// Storage is column-major: `C` column vectors of length `R`. A cell is
/// addressed as `(col, row)` and the flattened field index of that cell is
/// `col * R + row`; both views always agree.
///
/// # Examples
///
/// ```
/// use fixalg::{Matrix, Vector};
///
/// // Two columns of three rows each.
/// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m[(1, 0)], 4);
/// assert_eq!(m[3], 4);
/// assert_eq!(m.column(1), Vector::new([4, 5, 6]));
/// assert_eq!(m.row(2), Vector::new([3, 6]));
///
/// let id: Matrix<f64, 3, 3> = Matrix::identity();
/// assert_eq!(id[(1, 1)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<T, const C: usize, const R: usize> {
    pub(crate) cols: [Vector<T, R>; C],
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    const DIMENSION_CHECK: () = assert!(C >= 2 && C <= 4, "matrix column count must be 2, 3 or 4");

    /// Create a matrix from its column vectors.
    #[inline]
    pub const fn from_columns(cols: [Vector<T, R>; C]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIMENSION_CHECK;
        Self { cols }
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of fields, `C * R`.
    #[inline]
    pub const fn len(&self) -> usize {
        C * R
    }

    /// Column vectors, in order.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.cols
    }

    /// Iterate over all fields in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cols.iter().flat_map(|c| c.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cols.iter_mut().flat_map(|c| c.iter_mut())
    }
}

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Create a matrix from a column-major 2D array.
    ///
    /// The input is `[[col0], [col1], ...]`: `C` arrays of `R` fields each.
    #[inline]
    pub fn new(cols: [[T; R]; C]) -> Self {
        Self::from_columns(cols.map(Vector::new))
    }

    /// Create a matrix from its row vectors.
    ///
    /// ```
    /// use fixalg::{Matrix, Vector};
    /// let m = Matrix::from_rows([Vector::new([1, 2]), Vector::new([3, 4]), Vector::new([5, 6])]);
    /// assert_eq!(m, Matrix::new([[1, 3, 5], [2, 4, 6]]));
    /// ```
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self::from_fn(|c, r| rows[r][c])
    }

    /// Create a matrix by calling `f(col, row)` for each cell.
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m: Matrix<i32, 3, 2> = Matrix::from_fn(|c, r| (10 * c + r) as i32);
    /// assert_eq!(m[(2, 1)], 21);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_columns(core::array::from_fn(|c| Vector::from_fn(|r| f(c, r))))
    }

    /// Every field set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_columns([Vector::splat(value); C])
    }

    /// Copy of the fields as a column-major 2D array.
    pub fn to_cols_array_2d(&self) -> [[T; R]; C] {
        self.cols.map(|c| c.to_array())
    }

    /// Checked read of the flattened field `index` (`col * R + row`).
    ///
    /// ```
    /// use fixalg::{IndexError, Matrix};
    /// let m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
    /// assert_eq!(m.get(5), Ok(6));
    /// assert_eq!(m.get(6), Err(IndexError::Field { index: 6, len: 6 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<T, IndexError> {
        if index < C * R {
            Ok(self.cols[index / R][index % R])
        } else {
            Err(IndexError::Field { index, len: C * R })
        }
    }

    /// Checked write of the flattened field `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index < C * R {
            self.cols[index / R][index % R] = value;
            Ok(())
        } else {
            Err(IndexError::Field { index, len: C * R })
        }
    }

    /// Checked read of cell `(col, row)`.
    pub fn get_cell(&self, col: usize, row: usize) -> Result<T, IndexError> {
        Self::check_cell(col, row)?;
        Ok(self.cols[col][row])
    }

    /// Checked write of cell `(col, row)`.
    pub fn set_cell(&mut self, col: usize, row: usize, value: T) -> Result<(), IndexError> {
        Self::check_cell(col, row)?;
        self.cols[col][row] = value;
        Ok(())
    }

    fn check_cell(col: usize, row: usize) -> Result<(), IndexError> {
        if col < C && row < R {
            Ok(())
        } else {
            Err(IndexError::Cell {
                col,
                row,
                cols: C,
                rows: R,
            })
        }
    }

    /// Column `k` as a fresh vector. Panics if `k >= C`.
    #[inline]
    pub fn column(&self, k: usize) -> Vector<T, R> {
        match self.cols.get(k) {
            Some(c) => *c,
            None => panic!("{}", IndexError::Component { index: k, len: C }),
        }
    }

    /// Row `k` as a fresh vector. Panics if `k >= R`.
    pub fn row(&self, k: usize) -> Vector<T, C> {
        if k >= R {
            panic!("{}", IndexError::Component { index: k, len: R });
        }
        Vector::from_fn(|c| self.cols[c][k])
    }

    /// Replace column `k`. Panics if `k >= C`.
    pub fn set_column(&mut self, k: usize, v: Vector<T, R>) {
        match self.cols.get_mut(k) {
            Some(c) => *c = v,
            None => panic!("{}", IndexError::Component { index: k, len: C }),
        }
    }

    /// Replace row `k`. Panics if `k >= R`.
    pub fn set_row(&mut self, k: usize, v: Vector<T, C>) {
        if k >= R {
            panic!("{}", IndexError::Component { index: k, len: R });
        }
        for c in 0..C {
            self.cols[c][k] = v[c];
        }
    }

    /// Transpose: `out[(r, c)] == self[(c, r)]`.
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let t = m.transposed();
    /// assert_eq!(t, Matrix::new([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transposed(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|c, r| self.cols[r][c])
    }
}

impl<T: Element, const C: usize, const R: usize> Matrix<T, C, R> {
    /// All-zero matrix (all-`false` for booleans).
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// All-one matrix (all-`true` for booleans).
    #[inline]
    pub fn ones() -> Self {
        Self::splat(T::ONE)
    }

    /// Ones on the main diagonal, zeros elsewhere.
    ///
    /// Non-square shapes get ones on the leading `min(C, R)` diagonal cells.
    pub fn identity() -> Self {
        Self::from_fn(|c, r| if c == r { T::ONE } else { T::ZERO })
    }

    /// Copy into a matrix of another shape.
    ///
    /// Cells inside both shapes are copied; cells outside the source are
    /// filled from the identity.
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m = Matrix::new([[2, 3], [4, 5]]);
    /// let big: Matrix<i32, 3, 3> = m.resize();
    /// assert_eq!(big, Matrix::new([[2, 3, 0], [4, 5, 0], [0, 0, 1]]));
    /// let back: Matrix<i32, 2, 2> = big.resize();
    /// assert_eq!(back, m);
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(&self) -> Matrix<T, C2, R2> {
        Matrix::from_fn(|c, r| {
            if c < C && r < R {
                self.cols[c][r]
            } else if c == r {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Order-sensitive combination of all field hashes, in column-major
    /// order. Equal matrices always produce equal codes.
    pub fn hash_code(&self) -> u64 {
        let mut fields = self.iter();
        let first = fields.next().map_or(0, |c| c.hash_bits());
        fields.fold(first, |h, c| h.wrapping_mul(397) ^ c.hash_bits())
    }

    /// Convert each field with an `as` cast.
    pub fn cast<U: Copy + 'static>(&self) -> Matrix<U, C, R>
    where
        T: AsPrimitive<U>,
    {
        Matrix::from_columns(self.cols.map(|c| c.cast()))
    }
}

impl<T: Element, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const C: usize, const R: usize> Hash for Matrix<T, C, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

// Index by flattened field
impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        if index >= C * R {
            panic!("{}", IndexError::Field { index, len: C * R });
        }
        &self.cols[index / R].data[index % R]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index >= C * R {
            panic!("{}", IndexError::Field { index, len: C * R });
        }
        &mut self.cols[index / R].data[index % R]
    }
}

// Index by (col, row) tuple
impl<T, const C: usize, const R: usize> Index<(usize, usize)> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &T {
        if col >= C || row >= R {
            panic!("{}", IndexError::Cell { col, row, cols: C, rows: R });
        }
        &self.cols[col].data[row]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        if col >= C || row >= R {
            panic!("{}", IndexError::Cell { col, row, cols: C, rows: R });
        }
        &mut self.cols[col].data[row]
    }
}

impl<T: Copy, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    fn from(cols: [[T; R]; C]) -> Self {
        Self::new(cols)
    }
}

impl<T: Copy, const C: usize, const R: usize> From<[Vector<T, R>; C]> for Matrix<T, C, R> {
    fn from(cols: [Vector<T, R>; C]) -> Self {
        Self::from_columns(cols)
    }
}

/// Scalar broadcast: every field takes the value.
impl<T: Copy, const C: usize, const R: usize> From<T> for Matrix<T, C, R> {
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

pub use aliases::*;
