use std::collections::BTreeMap;

use super::{Dense, Shape};
use crate::util::{MatrixError, Result};

/// A matrix of `i64` values that only stores its non-zero entries.
///
/// Entries are kept ordered by `(row, col)`, so iterating them is always row-major.
/// No stored entry is ever zero, and every stored coordinate lies inside the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) entries: BTreeMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Creates an empty `rows x cols` matrix.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triples.
    ///
    /// Zero values are skipped. A later non-zero triple for the same coordinate overwrites an
    /// earlier one.
    pub fn from_triples<I>(rows: usize, cols: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = SparseMatrix::with_shape(rows, cols);
        for (row, col, value) in triples {
            matrix.check_bounds(row, col)?;
            if value != 0 {
                matrix.entries.insert((row, col), value);
            }
        }
        Ok(matrix)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        self.check_bounds(row, col)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(0))
    }

    /// Writes `value` at `(row, col)`. Writing zero removes the entry.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        self.check_bounds(row, col)?;
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the non-zero entries in row-major order.
    pub fn entries(
        &self,
    ) -> impl DoubleEndedIterator<Item = ((usize, usize), i64)> + ExactSizeIterator + Clone + '_ {
        self.entries.iter().map(|(&key, &value)| (key, value))
    }

    /// Renders the matrix as a dense grid, zeros included.
    pub fn dense(&self) -> Dense<'_> {
        Dense(self)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
                location: None,
            });
        }
        Ok(())
    }
}

impl TryFrom<(i64, i64)> for SparseMatrix {
    type Error = MatrixError;

    fn try_from((rows, cols): (i64, i64)) -> Result<Self> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Ok(SparseMatrix::with_shape(r, c)),
            _ => Err(MatrixError::InvalidDimension { rows, cols }),
        }
    }
}
