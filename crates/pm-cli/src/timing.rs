use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use pm_engine::Multiplier;
use pm_matrix::Matrix;

/// Multiplies `a` by `b` with `multiplier`, returning the product and the
/// wall-clock time the multiply took.
pub fn timed_multiply<M: Multiplier>(
    multiplier: &M,
    a: &Matrix<i32>,
    b: &Matrix<i32>,
) -> Result<(Matrix<i32>, Duration)> {
    info!(
        "Multiplying {}x{} by {}x{} ({})...",
        a.row_count(),
        a.column_count(),
        b.row_count(),
        b.column_count(),
        multiplier.name()
    );
    let start = Instant::now();
    let product = multiplier
        .try_multiply(a, b)
        .with_context(|| format!("{} multiply rejected its operands", multiplier.name()))?;
    let elapsed = start.elapsed();
    info!("Finished in {:.6} seconds.", elapsed.as_secs_f64());
    Ok((product, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_engine::{SequentialMultiplier, ThreadedMultiplier};

    #[test]
    fn test_strategies_agree() {
        let mut a = Matrix::row_major(3, 2);
        let mut b = Matrix::column_major(2, 4);
        for i in 0..6 {
            *a.flat_element_at_mut(i) = i as i32 - 2;
        }
        for i in 0..8 {
            *b.flat_element_at_mut(i) = 3 * i as i32;
        }
        let (seq, _) = timed_multiply(&SequentialMultiplier::new(), &a, &b).unwrap();
        let (par, _) = timed_multiply(&ThreadedMultiplier::new(5), &a, &b).unwrap();
        assert_eq!(seq, par);
        assert_eq!((seq.row_count(), seq.column_count()), (3, 4));
    }

    #[test]
    fn test_mismatch_is_an_error() {
        let a = Matrix::row_major(3, 2);
        let err = timed_multiply(&ThreadedMultiplier::new(2), &a, &a).unwrap_err();
        assert!(err.to_string().starts_with("threaded multiply rejected"));
    }
}
