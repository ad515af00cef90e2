//! Space-separated text output.

use std::fmt;

use crate::{OutOfRange, Sequence};

fn write_spaced<'a, T, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// Writes the values separated by single spaces, with no trailing newline.
///
/// ```
/// use nexus_sequence::Sequence;
///
/// let seq = Sequence::from([1, 2, 3]);
/// assert_eq!(seq.to_string(), "1 2 3");
/// ```
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

/// A bounds-checked `start..end` window of a sequence, formatted like the
/// sequence itself.
///
/// Created by [`Sequence::display_range`].
pub struct DisplayRange<'a, T> {
    seq: &'a Sequence<T>,
    start: usize,
    end: usize,
}

impl<T: fmt::Display> fmt::Display for DisplayRange<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.seq.iter().skip(self.start).take(self.end - self.start);
        write_spaced(f, values)
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Returns a displayable view of positions `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `start >= len`, `end > len`, or
    /// `start > end`. An empty sequence therefore has no valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_sequence::Sequence;
    ///
    /// let seq = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(seq.display_range(1, 3).unwrap().to_string(), "2 3");
    /// assert!(seq.display_range(4, 4).is_err());
    /// ```
    pub fn display_range(&self, start: usize, end: usize) -> Result<DisplayRange<'_, T>, OutOfRange> {
        if start >= self.len || end > self.len || start > end {
            return Err(OutOfRange::range("display_range", start, end, self.len));
        }
        Ok(DisplayRange {
            seq: self,
            start,
            end,
        })
    }

    /// Writes the whole sequence and a newline to stdout.
    pub fn print(&self) {
        println!("{self}");
    }

    /// Writes positions `start..end` and a newline to stdout.
    ///
    /// # Errors
    ///
    /// Same bounds as [`display_range`](Self::display_range); nothing is
    /// written on error.
    pub fn print_range(&self, start: usize, end: usize) -> Result<(), OutOfRange> {
        let range = self.display_range(start, end)?;
        println!("{range}");
        Ok(())
    }
}
