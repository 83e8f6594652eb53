use core::fmt;

use crate::Vector;

/// Components joined with a custom separator, see [`Vector::display_with`].
///
/// Formatter flags (width, precision, sign) are applied to each component.
pub struct Joined<'a, T, const N: usize> {
    vector: &'a Vector<T, N>,
    sep: &'a str,
}

impl<T, const N: usize> Vector<T, N> {
    /// Display adapter joining the components with `sep`.
    ///
    /// ```
    /// use fixalg::Vector;
    /// let v = Vector::new([1.5, -2.0, 0.25]);
    /// assert_eq!(format!("{}", v.display_with("; ")), "1.5; -2; 0.25");
    /// assert_eq!(format!("{:.2}", v.display_with(" ")), "1.50 -2.00 0.25");
    /// ```
    pub fn display_with<'a>(&'a self, sep: &'a str) -> Joined<'a, T, N> {
        Joined { vector: self, sep }
    }
}

fn write_joined<T: fmt::Display>(items: &[T], sep: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, c) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        fmt::Display::fmt(c, f)?;
    }
    Ok(())
}

impl<T: fmt::Display, const N: usize> fmt::Display for Joined<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(&self.vector.data, self.sep, f)
    }
}

/// Components in `x, y, z, w` order, separated by `", "`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(&self.data, ", ", f)
    }
}
