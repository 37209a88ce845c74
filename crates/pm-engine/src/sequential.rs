use log::debug;
use pm_matrix::{CellSource, Element, Matrix, MatrixError, Result};

/// Checks that `a * b` is defined: both operands have cells and the inner
/// dimensions agree.
pub fn check_operands<T, A, B>(a: &A, b: &B) -> Result<()>
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    if a.cell_count() == 0 {
        return Err(MatrixError::EmptyOperand {
            rows: a.row_count(),
            cols: a.column_count(),
        });
    }
    if b.cell_count() == 0 {
        return Err(MatrixError::EmptyOperand {
            rows: b.row_count(),
            cols: b.column_count(),
        });
    }
    if a.column_count() != b.row_count() {
        return Err(MatrixError::ShapeMismatch {
            a_rows: a.row_count(),
            a_cols: a.column_count(),
            b_rows: b.row_count(),
            b_cols: b.column_count(),
        });
    }
    Ok(())
}

/// `sum over k of a(row, k) * b(k, column)`, accumulated from zero.
#[inline]
pub(crate) fn dot<T, A, B>(a: &A, b: &B, row: usize, column: usize) -> T
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    let mut total = T::zero();
    for k in 0..a.column_count() {
        total = total + a.cell(row, k) * b.cell(k, column);
    }
    total
}

/// Single-threaded reference multiply.
///
/// `a` is [m, k], `b` is [k, n], the result is a row-major [m, n] matrix
/// filled in row-major order with the naive triple loop.
///
/// # Errors
/// [`MatrixError::EmptyOperand`] if either side has no cells,
/// [`MatrixError::ShapeMismatch`] if the inner dimensions differ.
pub fn try_multiply<T, A, B>(a: &A, b: &B) -> Result<Matrix<T>>
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    check_operands(a, b)?;

    let mut result = Matrix::row_major(a.row_count(), b.column_count());
    for i in 0..result.row_count() {
        for j in 0..result.column_count() {
            *result.element_at_mut(i, j) = dot(a, b, i, j);
        }
    }
    Ok(result)
}

/// Like [`try_multiply`], but malformed input yields the empty matrix.
///
/// Callers tell a mismatch apart from a real product by checking
/// `cell_count()`.
pub fn multiply<T, A, B>(a: &A, b: &B) -> Matrix<T>
where
    T: Element,
    A: CellSource<T> + ?Sized,
    B: CellSource<T> + ?Sized,
{
    try_multiply(a, b).unwrap_or_else(|e| {
        debug!("multiply returned empty: {}", e);
        Matrix::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn from_rows<T: Element, const C: usize>(
        rows: &[[T; C]],
        column_major: bool,
    ) -> Matrix<T> {
        let (r, c) = (rows.len(), C);
        let mut m = if column_major {
            Matrix::column_major(r, c)
        } else {
            Matrix::row_major(r, c)
        };
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                m[(i, j)] = v;
            }
        }
        m
    }

    #[test]
    fn test_multiply_basic() {
        let a = from_rows(&[[1, 2, 3], [4, 5, 6]], false);
        let b = from_rows(&[[7, 8], [9, 10], [11, 12]], false);
        let c = multiply(&a, &b);
        assert_eq!(c.row_count(), 2);
        assert_eq!(c.column_count(), 2);
        assert!(c.is_row_major());
        assert_eq!(c, from_rows(&[[58, 64], [139, 154]], false));
    }

    #[test]
    fn test_multiply_mixed_layouts() {
        for (a_cm, b_cm) in [(false, true), (true, false), (true, true)] {
            let a = from_rows(&[[1, 2, 3], [4, 5, 6]], a_cm);
            let b = from_rows(&[[7, 8], [9, 10], [11, 12]], b_cm);
            assert_eq!(multiply(&a, &b), from_rows(&[[58, 64], [139, 154]], false));
        }
    }

    #[test]
    fn test_multiply_identity() {
        let i = from_rows(&[[1.0, 0.0], [0.0, 1.0]], false);
        let x = from_rows(&[[1.0, 2.0], [3.0, 4.0]], true);
        let c = multiply(&i, &x);
        assert_relative_eq!(c[(0, 1)], 2.0);
        assert_relative_eq!(c[(1, 0)], 3.0);
        assert_eq!(c, x);
    }

    #[test]
    fn test_shape_law() {
        let a = Matrix::<i32>::row_major(4, 3);
        let b = Matrix::<i32>::column_major(3, 5);
        let c = multiply(&a, &b);
        assert_eq!((c.row_count(), c.column_count()), (4, 5));
    }

    #[test]
    fn test_mismatch_is_empty() {
        let a = Matrix::<i32>::row_major(2, 3);
        let b = Matrix::<i32>::row_major(2, 2);
        let c = multiply(&a, &b);
        assert_eq!(c.cell_count(), 0);
        assert_eq!(c.row_count(), 0);
        assert_eq!(
            try_multiply(&a, &b).unwrap_err(),
            MatrixError::ShapeMismatch {
                a_rows: 2,
                a_cols: 3,
                b_rows: 2,
                b_cols: 2
            }
        );
    }

    #[test]
    fn test_empty_operand() {
        let a = Matrix::<i32>::row_major(2, 0);
        let b = Matrix::<i32>::row_major(0, 2);
        assert_eq!(multiply(&a, &b).cell_count(), 0);
        assert_eq!(
            try_multiply(&a, &b).unwrap_err(),
            MatrixError::EmptyOperand { rows: 2, cols: 0 }
        );
        let empty = Matrix::<i32>::default();
        assert!(try_multiply(&empty, &Matrix::<i32>::row_major(1, 1)).is_err());
    }

    #[test]
    fn test_multiply_views() {
        // A^T where A is stored as [[1,4],[2,5],[3,6]]
        let stored = from_rows(&[[1, 4], [2, 5], [3, 6]], false);
        let a = stored.reinterpreted();
        let b = from_rows(&[[7, 8], [9, 10], [11, 12]], false);
        assert_eq!(multiply(&a, &b), from_rows(&[[58, 64], [139, 154]], false));
    }
}
