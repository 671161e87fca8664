mod error_handling;
mod random;

pub use error_handling::{Location, MatrixError, Result};
pub use random::random_matrix;
