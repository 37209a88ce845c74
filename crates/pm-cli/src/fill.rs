use anyhow::{ensure, Result};
use pm_matrix::Matrix;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest value of a random fill.
pub const MIN_VALUE: i32 = -255;
/// Largest value of a random fill.
pub const MAX_VALUE: i32 = 255;

/// A seeded generator, or one seeded from OS entropy.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fills `a` and `b` by physical offset with values uniform in
/// `[MIN_VALUE, MAX_VALUE]`, alternating between the two buffers.
pub fn fill_pair<R: Rng>(a: &mut Matrix<i32>, b: &mut Matrix<i32>, rng: &mut R) -> Result<()> {
    ensure!(
        a.cell_count() == b.cell_count(),
        "cannot fill {} and {} cells in lockstep",
        a.cell_count(),
        b.cell_count()
    );
    let values = Uniform::new_inclusive(MIN_VALUE, MAX_VALUE);
    for i in 0..a.cell_count() {
        *a.flat_element_at_mut(i) = values.sample(rng);
        *b.flat_element_at_mut(i) = values.sample(rng);
    }
    Ok(())
}
