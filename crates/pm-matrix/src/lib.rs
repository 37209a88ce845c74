//! `pm-matrix` - Dense matrices with selectable physical layout for parmul.
//!
//! This crate provides:
//! - A generic `Matrix<T>` stored row-major or column-major behind one
//!   logical `(row, column)` interface
//! - `Layout` multipliers converting logical coordinates to flat offsets
//! - Zero-copy reinterpretation (in place or as a borrowed `MatrixView`)
//! - The `CellSource` trait shared by matrices and views
//! - Layout-independent equality and a plain-text dump

pub mod cells;
pub mod element;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use cells::{cells_equal, CellSource};
pub use element::Element;
pub use error::{MatrixError, Result};
pub use layout::Layout;
pub use matrix::Matrix;
pub use view::MatrixView;
