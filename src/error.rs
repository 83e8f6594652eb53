use core::fmt;

/// Errors from checked component and field access.
///
/// Returned by [`Vector::get`](crate::Vector::get),
/// [`Matrix::get`](crate::Matrix::get) and their setters. The panicking
/// `Index` implementations report the same message.
///
/// ```
/// use fixalg::{IndexError, Vec3};
///
/// let v = Vec3::new([1.0, 2.0, 3.0]);
/// assert_eq!(v.get(3), Err(IndexError::Component { index: 3, len: 3 }));
/// assert_eq!(v.get(usize::MAX).unwrap_err().to_string(),
///            format!("component index {} out of range for length 3", usize::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexError {
    /// Vector component index outside `[0, len)`.
    Component { index: usize, len: usize },
    /// Flattened matrix field index outside `[0, len)`.
    Field { index: usize, len: usize },
    /// Matrix `(col, row)` outside `cols × rows`.
    Cell {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IndexError::Component { index, len } => {
                write!(f, "component index {index} out of range for length {len}")
            }
            IndexError::Field { index, len } => {
                write!(f, "field index {index} out of range for length {len}")
            }
            IndexError::Cell {
                col,
                row,
                cols,
                rows,
            } => write!(
                f,
                "cell ({col}, {row}) out of range for {cols}x{rows} matrix"
            ),
        }
    }
}

impl core::error::Error for IndexError {}

/// Errors from square-matrix algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular (a zero pivot was met during elimination).
    Singular,
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl core::error::Error for LinalgError {}
