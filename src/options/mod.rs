mod multiply_method;
mod operation;

use std::path::PathBuf;

pub use multiply_method::MultiplyMethod;
pub use operation::Operation;

#[derive(Debug, Clone)]
pub struct Options {
    pub multiply_method: MultiplyMethod,
    /// Where the driver writes a successful result.
    pub output: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            multiply_method: MultiplyMethod::default(),
            output: PathBuf::from("output.txt"),
        }
    }
}
