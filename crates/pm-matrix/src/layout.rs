use std::fmt;

/// Per-axis multipliers mapping a logical `(row, column)` to a flat offset.
///
/// `offset(r, c) = r * row_multiplier + c * column_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    row_multiplier: usize,
    column_multiplier: usize,
}

impl Layout {
    /// Row-major layout for a matrix with `column_count` columns.
    ///
    /// Elements of a row are contiguous: multipliers are `(column_count, 1)`.
    pub fn row_major(column_count: usize) -> Self {
        Layout {
            row_multiplier: column_count,
            column_multiplier: 1,
        }
    }

    /// Column-major layout for a matrix with `row_count` rows.
    ///
    /// Elements of a column are contiguous: multipliers are `(1, row_count)`.
    pub fn column_major(row_count: usize) -> Self {
        Layout {
            row_multiplier: 1,
            column_multiplier: row_count,
        }
    }

    pub fn row_multiplier(&self) -> usize {
        self.row_multiplier
    }

    pub fn column_multiplier(&self) -> usize {
        self.column_multiplier
    }

    /// Flat buffer offset of the logical cell `(row, column)`.
    #[inline]
    pub fn offset(&self, row: usize, column: usize) -> usize {
        row * self.row_multiplier + column * self.column_multiplier
    }

    pub fn is_row_major(&self) -> bool {
        self.column_multiplier == 1
    }

    pub fn is_column_major(&self) -> bool {
        self.row_multiplier == 1
    }

    /// The same multipliers with their roles exchanged.
    ///
    /// Paired with swapping the row and column counts this turns a buffer
    /// into its transpose view without moving any element.
    pub fn swapped(&self) -> Self {
        Layout {
            row_multiplier: self.column_multiplier,
            column_multiplier: self.row_multiplier,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match (self.is_row_major(), self.is_column_major()) {
            (true, true) => "vector",
            (true, false) => "row-major",
            (false, true) => "column-major",
            (false, false) => "strided",
        };
        write!(
            f,
            "{} ({}, {})",
            kind, self.row_multiplier, self.column_multiplier
        )
    }
}
