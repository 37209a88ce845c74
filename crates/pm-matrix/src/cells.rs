use std::fmt;

use crate::element::Element;

/// Read-only logical access to a grid of cells.
///
/// Implemented by owned matrices and by borrowed reinterpretation views, so
/// multiplication and comparison do not care which one they are handed.
pub trait CellSource<T: Element> {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Value of the logical cell `(row, column)`.
    ///
    /// Coordinates outside the shape are a contract violation.
    fn cell(&self, row: usize, column: usize) -> T;
}

/// Structural equality: same shape and same value in every logical cell.
///
/// Physical layout plays no part.
pub fn cells_equal<T, A, B>(a: &A, b: &B) -> bool
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    if a.row_count() != b.row_count() || a.column_count() != b.column_count() {
        return false;
    }
    for i in 0..a.row_count() {
        for j in 0..a.column_count() {
            if a.cell(i, j) != b.cell(i, j) {
                return false;
            }
        }
    }
    true
}

/// Writes one line per row, values separated by `", "`, or `(empty)` when
/// there are no cells.
pub(crate) fn write_cells<T, S>(f: &mut fmt::Formatter<'_>, source: &S) -> fmt::Result
where
    T: Element + fmt::Display,
    S: CellSource<T> + ?Sized,
{
    if source.cell_count() == 0 {
        return writeln!(f, "(empty)");
    }
    for i in 0..source.row_count() {
        write!(f, "{}", source.cell(i, 0))?;
        for j in 1..source.column_count() {
            write!(f, ", {}", source.cell(i, j))?;
        }
        writeln!(f)?;
    }
    Ok(())
}
