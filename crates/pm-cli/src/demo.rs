use std::io::Write;

use anyhow::Result;
use pm_matrix::Matrix;

/// Writes `[[1,2,3],[4,5,6]] * [[7,8],[9,10],[11,12]]` to `out`.
pub fn main(out: &mut impl Write) -> Result<()> {
    let mut a = Matrix::<i32>::row_major(2, 3);
    let mut b = Matrix::<i32>::row_major(3, 2);
    for i in 0..6 {
        *a.flat_element_at_mut(i) = i as i32 + 1;
        *b.flat_element_at_mut(i) = i as i32 + 7;
    }
    write!(out, "{}", pm_engine::multiply(&a, &b))?;
    Ok(())
}
