use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{a_rows}x{a_cols}] @ [{b_rows}x{b_cols}]")]
    ShapeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    #[error("empty operand: [{rows}x{cols}] has no cells")]
    EmptyOperand { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
