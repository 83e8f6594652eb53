use core::fmt::{self, Write as _};

use crate::traits::Scalar;
use crate::{Matrix, Vector};

// ── Mapping ─────────────────────────────────────────────────────────

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Apply a function to every field, producing a new matrix.
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, C, R> {
        Matrix::from_columns(self.cols.map(|c| c.map(&mut f)))
    }
}

impl<T: Copy, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Combine two matrices field by field.
    pub fn zip_map<U: Copy, V>(
        self,
        rhs: Matrix<U, C, R>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Matrix<V, C, R> {
        let mut c = 0;
        Matrix::from_columns(self.cols.map(|col| {
            let out = col.zip_map(rhs.cols[c], &mut f);
            c += 1;
            out
        }))
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Sum of all fields.
    ///
    /// ```
    /// use fixalg::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        self.cols
            .iter()
            .fold(T::zero(), |acc, c| acc + c.sum())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const C: usize, const R: usize> fmt::Display for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; C];
        for (c, width) in widths.iter_mut().enumerate() {
            for r in 0..R {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(c, r)]));
                *width = (*width).max(w);
            }
        }

        for r in 0..R {
            write!(f, "│")?;
            for (c, width) in widths.iter().enumerate() {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(c, r)], width = width)?;
            }
            write!(f, "│")?;
            if r + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

// ── Conversions to and from column arrays of vectors ────────────────

impl<T, const C: usize, const R: usize> From<Matrix<T, C, R>> for [Vector<T, R>; C] {
    fn from(m: Matrix<T, C, R>) -> Self {
        m.cols
    }
}
