use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cells::{cells_equal, write_cells, CellSource};
use crate::element::Element;
use crate::layout::Layout;
use crate::view::MatrixView;

/// A dense matrix owning a flat, contiguous buffer.
///
/// The buffer is addressed through a [`Layout`], so the same logical
/// interface serves row-major and column-major storage. Equality compares
/// logical cells only: a row-major and a column-major matrix holding the same
/// values are equal.
///
/// `Matrix` is not `Copy`; duplicating storage is always an explicit
/// [`Clone::clone`]. Taking a matrix with [`std::mem::take`] leaves an empty
/// matrix behind (zero rows, columns and multipliers).
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    row_count: usize,
    column_count: usize,
    layout: Layout,
    values: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            row_count: 0,
            column_count: 0,
            layout: Layout::default(),
            values: Vec::new(),
        }
    }
}

impl<T: Element> Matrix<T> {
    /// # Panics
    /// Panics if `row_count * column_count` overflows `usize`.
    fn zeroed(row_count: usize, column_count: usize, layout: Layout) -> Self {
        let cells = row_count
            .checked_mul(column_count)
            .expect("matrix cell count overflows usize");
        Matrix {
            row_count,
            column_count,
            layout,
            values: vec![T::zero(); cells],
        }
    }

    /// Zero-filled matrix whose rows are contiguous in memory.
    ///
    /// # Panics
    /// Panics if the cell count overflows `usize`.
    pub fn row_major(row_count: usize, column_count: usize) -> Self {
        Self::zeroed(row_count, column_count, Layout::row_major(column_count))
    }

    /// Zero-filled matrix whose columns are contiguous in memory.
    ///
    /// # Panics
    /// Panics if the cell count overflows `usize`.
    pub fn column_major(row_count: usize, column_count: usize) -> Self {
        Self::zeroed(row_count, column_count, Layout::column_major(row_count))
    }

    pub(crate) fn from_parts(
        row_count: usize,
        column_count: usize,
        layout: Layout,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_count * column_count);
        Matrix {
            row_count,
            column_count,
            layout,
            values,
        }
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        debug_assert!(
            row < self.row_count && column < self.column_count,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            column,
            self.row_count,
            self.column_count
        );
        self.layout.offset(row, column)
    }

    /// Reference to the logical cell `(row, column)`.
    ///
    /// Coordinates outside the shape are a caller error. They are only
    /// caught by a debug assertion; in release builds an out-of-range pair
    /// may silently alias another cell.
    #[inline]
    pub fn element_at(&self, row: usize, column: usize) -> &T {
        &self.values[self.index_of(row, column)]
    }

    #[inline]
    pub fn element_at_mut(&mut self, row: usize, column: usize) -> &mut T {
        let i = self.index_of(row, column);
        &mut self.values[i]
    }

    /// Reference to the element at physical buffer offset `index`.
    #[inline]
    pub fn flat_element_at(&self, index: usize) -> &T {
        &self.values[index]
    }

    #[inline]
    pub fn flat_element_at_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }

    /// The whole buffer in physical order.
    pub fn as_flat_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_flat_slice_mut(&mut self) -> &mut [T] {
        &mut self.values
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

    /// Reinterprets a row-major buffer as the column-major transpose.
    ///
    /// Swaps the row and column counts together with the two layout
    /// multipliers. No element moves, so every logical `(row, column)` now
    /// names what used to be `(column, row)`. This is a cache-locality
    /// experiment, not a transpose: it is only meaningful when the stored
    /// data already is the transpose the caller wants to read.
    pub fn reinterpret_as_column_major(&mut self) {
        debug_assert!(
            self.cell_count() == 0 || self.is_row_major(),
            "reinterpret_as_column_major on a {} matrix",
            self.layout
        );
        self.swap_axes();
    }

    /// Reinterprets a column-major buffer as the row-major transpose.
    ///
    /// The mirror of [`Matrix::reinterpret_as_column_major`], with the same
    /// caveats.
    pub fn reinterpret_as_row_major(&mut self) {
        debug_assert!(
            self.cell_count() == 0 || self.is_column_major(),
            "reinterpret_as_row_major on a {} matrix",
            self.layout
        );
        self.swap_axes();
    }

    fn swap_axes(&mut self) {
        std::mem::swap(&mut self.row_count, &mut self.column_count);
        self.layout = self.layout.swapped();
    }

    /// A borrowed view of this buffer with shape and multipliers swapped.
    ///
    /// Same trick as the in-place reinterpretation, but the matrix itself is
    /// left untouched and the view cannot outlive it.
    pub fn reinterpreted(&self) -> MatrixView<'_, T> {
        MatrixView::new(
            self.column_count,
            self.row_count,
            self.layout.swapped(),
            &self.values,
        )
    }
}

impl<T: Element> CellSource<T> for Matrix<T> {
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

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        self.element_at(row, column)
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        self.element_at_mut(row, column)
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        cells_equal::<T, _, _>(self, other)
    }
}

impl<T: Element + Eq> Eq for Matrix<T> {}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cells::<T, _>(f, self)
    }
}
