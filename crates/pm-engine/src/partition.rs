/// A contiguous span of output cells, numbered in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    start: usize,
    len: usize,
}

impl CellRange {
    pub fn new(start: usize, len: usize) -> Self {
        CellRange { start, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// One past the last cell of the range.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(row, column)` of the first cell in a matrix with `columns` columns.
    ///
    /// # Panics
    /// Panics if `columns == 0`.
    pub fn first_cell(&self, columns: usize) -> (usize, usize) {
        (self.start / columns, self.start % columns)
    }
}

/// The `index`-th of `workers` ranges over `total` cells.
///
/// `workers` must already be at least one.
fn nth_range(total: usize, workers: usize, index: usize) -> CellRange {
    let base = total / workers;
    let remainder = total % workers;
    let start = index * base + index.min(remainder);
    CellRange::new(start, base + usize::from(index < remainder))
}

/// Splits `total` cells into `workers` contiguous ranges laid end to end
/// from cell 0.
///
/// The first `total % workers` ranges get one extra cell, so lengths differ
/// by at most one. When `workers > total` the trailing ranges are empty.
/// A worker count of zero is treated as one.
pub fn partition(total: usize, workers: usize) -> Vec<CellRange> {
    let workers = workers.max(1);
    (0..workers).map(|i| nth_range(total, workers, i)).collect()
}

/// The non-empty ranges of [`partition`], in order, without materialising
/// the empty tail. Safe for any worker count.
pub fn working_ranges(total: usize, workers: usize) -> impl Iterator<Item = CellRange> {
    let workers = workers.max(1);
    (0..spawned_worker_count(total, workers)).map(move |i| nth_range(total, workers, i))
}

/// Number of non-empty ranges [`partition`] produces, i.e. how many
/// threads a parallel multiply over `total` cells actually spawns.
pub fn spawned_worker_count(total: usize, workers: usize) -> usize {
    total.min(workers.max(1))
}
