use std::num::NonZeroUsize;
use std::thread;

use log::debug;
use pm_matrix::{CellSource, Element, Matrix, Result};

use crate::parallel::try_multiply_parallel;
use crate::sequential;

/// A multiplication strategy.
///
/// Both strategies compute the same naive product into a fresh row-major
/// matrix; they differ only in how the output cells are scheduled. Drivers
/// are generic over the strategy, so the choice is static dispatch.
pub trait Multiplier {
    /// Returns the name of this strategy (e.g., "sequential", "threaded").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A * B.
    ///
    /// - `a`: shape [m, k], any layout
    /// - `b`: shape [k, n], any layout
    /// - Returns: row-major [m, n]
    fn try_multiply<T, A, B>(&self, a: &A, b: &B) -> Result<Matrix<T>>
    where
        T: Element,
        A: CellSource<T> + Sync + ?Sized,
        B: CellSource<T> + Sync + ?Sized;

    /// Like `try_multiply`, but returns the empty matrix on malformed input.
    fn multiply<T, A, B>(&self, a: &A, b: &B) -> Matrix<T>
    where
        T: Element,
        A: CellSource<T> + Sync + ?Sized,
        B: CellSource<T> + Sync + ?Sized,
    {
        self.try_multiply(a, b).unwrap_or_else(|e| {
            debug!("{} multiply returned empty: {}", self.name(), e);
            Matrix::default()
        })
    }
}

/// Single-threaded reference strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMultiplier;

impl SequentialMultiplier {
    pub fn new() -> Self {
        SequentialMultiplier
    }
}

impl Multiplier for SequentialMultiplier {
    fn name(&self) -> &str {
        "sequential"
    }

    fn try_multiply<T, A, B>(&self, a: &A, b: &B) -> Result<Matrix<T>>
    where
        T: Element,
        A: CellSource<T> + Sync + ?Sized,
        B: CellSource<T> + Sync + ?Sized,
    {
        sequential::try_multiply(a, b)
    }
}

/// Fork/join strategy over a fixed number of scoped worker threads.
#[derive(Debug, Clone, Copy)]
pub struct ThreadedMultiplier {
    workers: usize,
}

impl ThreadedMultiplier {
    /// A worker count of zero is raised to one.
    pub fn new(workers: usize) -> Self {
        ThreadedMultiplier {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ThreadedMultiplier {
    /// One worker per available core, or 4 if that cannot be determined.
    fn default() -> Self {
        Self::new(
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(4),
        )
    }
}

impl Multiplier for ThreadedMultiplier {
    fn name(&self) -> &str {
        "threaded"
    }

    fn try_multiply<T, A, B>(&self, a: &A, b: &B) -> Result<Matrix<T>>
    where
        T: Element,
        A: CellSource<T> + Sync + ?Sized,
        B: CellSource<T> + Sync + ?Sized,
    {
        try_multiply_parallel(a, b, self.workers)
    }
}
