use std::fmt;

use crate::cells::{write_cells, CellSource};
use crate::element::Element;
use crate::layout::Layout;
use crate::matrix::Matrix;

/// A read-only logical view over a borrowed matrix buffer.
///
/// Produced by [`Matrix::reinterpreted`]: the shape and the layout
/// multipliers are swapped relative to the owner, so the view reads the
/// owner's buffer as its transpose. The owner cannot be mutated while the
/// view is alive.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    row_count: usize,
    column_count: usize,
    layout: Layout,
    values: &'a [T],
}

impl<'a, T: Element> MatrixView<'a, T> {
    pub(crate) fn new(
        row_count: usize,
        column_count: usize,
        layout: Layout,
        values: &'a [T],
    ) -> Self {
        MatrixView {
            row_count,
            column_count,
            layout,
            values,
        }
    }

    #[inline]
    pub fn element_at(&self, row: usize, column: usize) -> &'a T {
        debug_assert!(row < self.row_count && column < self.column_count);
        &self.values[self.layout.offset(row, column)]
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_row_major(&self) -> bool {
        self.layout.is_row_major()
    }

    pub fn is_column_major(&self) -> bool {
        self.layout.is_column_major()
    }

    /// Copies the viewed buffer into an owned matrix with the view's shape
    /// and layout.
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from_parts(
            self.row_count,
            self.column_count,
            self.layout,
            self.values.to_vec(),
        )
    }
}

impl<T: Element> CellSource<T> for MatrixView<'_, T> {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn cell_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn cell(&self, row: usize, column: usize) -> T {
        *self.element_at(row, column)
    }
}

impl<T: Element + fmt::Display> fmt::Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cells::<T, _>(f, self)
    }
}
