use std::thread;

use log::{debug, trace};
use pm_matrix::{CellSource, Element, Matrix, Result};

use crate::partition::{spawned_worker_count, working_ranges, CellRange};
use crate::sequential::{check_operands, dot};

/// Outcome of a parallel multiply.
#[derive(Debug, Clone)]
pub struct ParallelRun<T> {
    /// Row-major product.
    pub product: Matrix<T>,
    /// Threads actually spawned; workers with an empty range never start.
    pub spawned: usize,
}

/// Multiplies `a` by `b` on `workers` scoped threads.
///
/// The output cells are split as by
/// [`partition`](crate::partition::partition) and each non-empty range is
/// handed to its own thread as a disjoint slice of the result buffer. The
/// operands are shared read-only. Every thread is joined before returning;
/// a panicking worker is re-raised here and no partial result escapes.
///
/// A `workers` of zero is treated as one.
///
/// # Errors
/// Same preconditions as [`try_multiply`](crate::try_multiply).
pub fn try_multiply_parallel_with_report<T, A, B>(
    a: &A,
    b: &B,
    workers: usize,
) -> Result<ParallelRun<T>>
where
    T: Element,
    A: CellSource<T> + Sync + ?Sized,
    B: CellSource<T> + Sync + ?Sized,
{
    check_operands(a, b)?;

    let workers = workers.max(1);
    let columns = b.column_count();
    let mut product = Matrix::row_major(a.row_count(), columns);
    let total = product.cell_count();
    let mut rest = product.as_flat_slice_mut();

    let spawned = thread::scope(|s| {
        let mut handles = Vec::with_capacity(spawned_worker_count(total, workers));

        for range in working_ranges(total, workers) {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            handles.push(s.spawn(move || fill_range(a, b, range, columns, chunk)));
        }

        let spawned = handles.len();
        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        spawned
    });

    debug!(
        "parallel multiply: {} cells, {} workers requested, {} spawned",
        product.cell_count(),
        workers,
        spawned
    );
    Ok(ParallelRun { product, spawned })
}

/// [`try_multiply_parallel_with_report`] without the report.
pub fn try_multiply_parallel<T, A, B>(a: &A, b: &B, workers: usize) -> Result<Matrix<T>>
where
    T: Element,
    A: CellSource<T> + Sync + ?Sized,
    B: CellSource<T> + Sync + ?Sized,
{
    try_multiply_parallel_with_report(a, b, workers).map(|run| run.product)
}

/// Parallel counterpart of [`multiply`](crate::multiply): malformed input
/// yields the empty matrix.
pub fn multiply_parallel<T, A, B>(a: &A, b: &B, workers: usize) -> Matrix<T>
where
    T: Element,
    A: CellSource<T> + Sync + ?Sized,
    B: CellSource<T> + Sync + ?Sized,
{
    try_multiply_parallel(a, b, workers).unwrap_or_else(|e| {
        debug!("multiply_parallel returned empty: {}", e);
        Matrix::default()
    })
}

/// Computes the cells of `range` into `out`, walking row-major from the
/// range's first cell.
///
/// `out` holds exactly the range's cells of a row-major result with
/// `columns` columns.
fn fill_range<T, A, B>(a: &A, b: &B, range: CellRange, columns: usize, out: &mut [T])
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    debug_assert_eq!(out.len(), range.len());
    trace!(
        "worker {:?}: cells {}..{}",
        thread::current().id(),
        range.start(),
        range.end()
    );

    let (first_row, mut column) = range.first_cell(columns);
    let mut remaining = range.len();
    let mut written = 0;

    'rows: for i in first_row..a.row_count() {
        for j in column..columns {
            if remaining == 0 {
                break 'rows;
            }
            remaining -= 1;
            out[written] = dot(a, b, i, j);
            written += 1;
        }
        column = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequential::multiply;

    fn counting(rows: usize, cols: usize) -> Matrix<i64> {
        let mut m = Matrix::row_major(rows, cols);
        for i in 0..m.cell_count() {
            *m.flat_element_at_mut(i) = i as i64 - 3;
        }
        m
    }

    #[test]
    fn test_matches_sequential() {
        let a = counting(5, 4);
        let b = counting(4, 3);
        let expected = multiply(&a, &b);
        for workers in [1, 2, 3, 4, 15, 16] {
            assert_eq!(multiply_parallel(&a, &b, workers), expected);
        }
    }

    #[test]
    fn test_spawned_count() {
        let a = counting(2, 2);
        let b = counting(2, 2);
        let run = try_multiply_parallel_with_report(&a, &b, 100).unwrap();
        assert_eq!(run.spawned, 4);
        assert_eq!(run.product, multiply(&a, &b));

        let run = try_multiply_parallel_with_report(&a, &b, 3).unwrap();
        assert_eq!(run.spawned, 3);
    }

    #[test]
    fn test_zero_workers_clamped() {
        let a = counting(3, 3);
        let b = counting(3, 3);
        let run = try_multiply_parallel_with_report(&a, &b, 0).unwrap();
        assert_eq!(run.spawned, 1);
        assert_eq!(run.product, multiply(&a, &b));
    }

    #[test]
    fn test_huge_worker_count() {
        let a = counting(2, 2);
        let run = try_multiply_parallel_with_report(&a, &a, usize::MAX / 2).unwrap();
        assert_eq!(run.spawned, 4);
        assert_eq!(run.product, multiply(&a, &a));
        assert_eq!(multiply_parallel(&a, &a, usize::MAX), multiply(&a, &a));
    }

    #[test]
    fn test_mismatch_is_empty() {
        let a = counting(3, 2);
        let b = counting(3, 2);
        assert_eq!(multiply_parallel(&a, &b, 4).cell_count(), 0);
        assert!(try_multiply_parallel(&a, &b, 4).is_err());
    }

    #[test]
    fn test_fill_range_mid_row() {
        let a = counting(3, 2);
        let b = counting(2, 3);
        let expected = multiply(&a, &b);
        // cells 4..7 start at (1, 1) and wrap into row 2
        let mut out = [0i64; 3];
        fill_range(&a, &b, CellRange::new(4, 3), 3, &mut out);
        assert_eq!(out, [expected[(1, 1)], expected[(1, 2)], expected[(2, 0)]]);
    }
}
