mod arithmetic;
mod display;
mod matrix;
mod serde;

use std::fmt::Display;

pub use display::Dense;
pub use matrix::SparseMatrix;

/// Dimensions of a matrix, `rows x cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
