pub mod driver;
pub mod loader;
mod matrix;
mod options;
mod util;

pub use matrix::{Dense, Shape, SparseMatrix};
pub use options::*;
pub use util::{random_matrix, Location, MatrixError, Result};
