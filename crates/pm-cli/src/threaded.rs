use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use log::{info, warn};
use pm_engine::{spawned_worker_count, Multiplier, SequentialMultiplier, ThreadedMultiplier};
use pm_matrix::Matrix;

use crate::fill::{fill_pair, rng};
use crate::timing::timed_multiply;

#[derive(Args, Debug)]
pub struct CliArgs {
    /// Edge length of the square matrices. Zero is raised to one.
    pub matrix_edge: usize,

    /// Number of worker threads. Zero is raised to one.
    pub thread_count: usize,

    /// Recompute the product on one thread and compare the two results.
    #[arg(long)]
    pub check: bool,

    /// Seed of the random fill.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// What a threaded run did.
#[derive(Debug, Clone)]
pub struct Report {
    /// Threads actually spawned.
    pub spawned: usize,
    pub elapsed: Duration,
    /// `None` unless `--check` was given.
    pub correct: Option<bool>,
}

/// Multiplies a random row-major A by a random column-major B on
/// `thread_count` threads.
///
/// With `--check` a mismatch dumps A, B, the expected and the actual
/// product to `out`.
pub fn main(args: CliArgs, out: &mut impl Write) -> Result<Report> {
    let edge = args.matrix_edge.max(1);
    let threaded = ThreadedMultiplier::new(args.thread_count);

    let mut a = Matrix::<i32>::row_major(edge, edge);
    let mut b = Matrix::<i32>::column_major(edge, edge);
    fill_pair(&mut a, &mut b, &mut rng(Some(args.seed)))?;

    let (product, elapsed) = timed_multiply(&threaded, &a, &b)?;
    let spawned = spawned_worker_count(product.cell_count(), threaded.workers());
    info!("Used {} of {} requested threads.", spawned, threaded.workers());

    let correct = if args.check {
        info!("Checking answer...");
        let expected = SequentialMultiplier::new().multiply(&a, &b);
        let correct = product == expected;
        if correct {
            info!("Answer is correct.");
        } else {
            warn!("Answer is wrong.");
            write!(
                out,
                "[A]\n{}[B]\n{}[EXPECTED]\n{}[ACTUAL]\n{}",
                a, b, expected, product
            )?;
        }
        Some(correct)
    } else {
        None
    };

    Ok(Report {
        spawned,
        elapsed,
        correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(edge: usize, threads: usize, check: bool) -> CliArgs {
        CliArgs {
            matrix_edge: edge,
            thread_count: threads,
            check,
            seed: 17,
        }
    }

    #[test]
    fn test_check_passes() {
        let mut out = Vec::new();
        let report = main(args(9, 4, true), &mut out).unwrap();
        assert_eq!(report.spawned, 4);
        assert_eq!(report.correct, Some(true));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_sizes_clamped() {
        let mut out = Vec::new();
        let report = main(args(0, 0, true), &mut out).unwrap();
        assert_eq!(report.spawned, 1);
        assert_eq!(report.correct, Some(true));
    }

    #[test]
    fn test_huge_thread_count() {
        let mut out = Vec::new();
        let report = main(args(10, usize::MAX, true), &mut out).unwrap();
        assert_eq!(report.spawned, 100);
        assert_eq!(report.correct, Some(true));
    }

    #[test]
    fn test_more_threads_than_cells() {
        let mut out = Vec::new();
        let report = main(args(2, 100, false), &mut out).unwrap();
        assert_eq!(report.spawned, 4);
        assert_eq!(report.correct, None);
    }
}
