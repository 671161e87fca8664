use std::fmt::Display;

use thiserror::Error;

use crate::{matrix::Shape, options::Operation};

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Position of a line inside a textual matrix source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub origin: String,
    pub line: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} of {}", self.line, self.origin)
    }
}

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Failed to read input file: {path} ({source})")]
    InputError {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    OutputError(#[source] std::io::Error),
    #[error("Failed to (de)serialize matrix: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file has wrong format: {reason} in {origin}")]
    FormatError { origin: String, reason: String },
    #[error(
        "Index ({row}, {col}) is out of bounds for a {shape} matrix{}",
        location_suffix(.location)
    )]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: Shape,
        location: Option<Location>,
    },

    #[error(
        "Matrix dimensions must match for {}: got {left} and {right}",
        .operation.noun()
    )]
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },
    #[error(
        "Number of columns in first matrix must equal number of rows in second: {left} and {right}"
    )]
    InnerDimensionMismatch { left: Shape, right: Shape },
    #[error("Invalid matrix dimensions {rows}x{cols}: rows and cols must be non-negative")]
    InvalidDimension { rows: i64, cols: i64 },
    #[error("Invalid operation \"{0}\". Use \"add\", \"subtract\", or \"multiply\".")]
    InvalidOperation(String),
    #[error("Integer overflow while computing entry ({row}, {col})")]
    OverflowError { row: usize, col: usize },
    #[error("A {rows}x{cols} matrix has more cells than can be addressed")]
    CapacityError { rows: usize, cols: usize },
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" in {location}"),
        None => String::new(),
    }
}
