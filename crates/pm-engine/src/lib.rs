//! `pm-engine` - Matrix multiplication engine for parmul.
//!
//! This crate provides:
//! - A single-threaded reference multiply (naive triple loop)
//! - A flat-range partitioner that balances output cells across workers
//! - A parallel multiply on scoped threads, one per non-empty range
//! - A `Multiplier` trait with sequential and threaded strategies
//!
//! Malformed operands (empty, or mismatched inner dimensions) make the
//! `multiply*` functions return the empty matrix; the `try_*` variants report
//! the reason as a [`MatrixError`].

pub mod backend;
pub mod parallel;
pub mod partition;
pub mod sequential;

pub use backend::{Multiplier, SequentialMultiplier, ThreadedMultiplier};
pub use parallel::{
    multiply_parallel, try_multiply_parallel, try_multiply_parallel_with_report, ParallelRun,
};
pub use partition::{partition, spawned_worker_count, working_ranges, CellRange};
pub use pm_matrix::MatrixError;
pub use sequential::{check_operands, multiply, try_multiply};
