use core::fmt::Display;
use std::fmt::Result;

use super::SparseMatrix;

/// The text format: `rows=`, `cols=`, then one `(row, col, value)` line per entry, row-major.
impl Display for SparseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        for (&(row, col), value) in &self.entries {
            writeln!(f, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}

impl SparseMatrix {
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Dense grid view of a [`SparseMatrix`], see [`SparseMatrix::dense`].
pub struct Dense<'a>(pub(super) &'a SparseMatrix);

impl Display for Dense<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        let matrix = self.0;
        if matrix.rows == 0 || matrix.cols == 0 {
            return write!(f, "[[]]");
        }
        let lpad = matrix
            .entries
            .values()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(1);

        let mut string_repr: Vec<String> = vec![];
        for i in 0..matrix.rows {
            if i != 0 {
                string_repr.push(" ".to_string());
            } else {
                string_repr.push("[".to_string());
            }
            string_repr.push("[".to_string());
            let row = (0..matrix.cols)
                .map(|j| {
                    let elem = matrix.entries.get(&(i, j)).copied().unwrap_or(0);
                    format!("{:>lpad$}", elem, lpad = lpad)
                })
                .collect::<Vec<_>>();
            string_repr.push(row.join(", "));
            string_repr.push("]".to_string());
            if i == matrix.rows - 1 {
                string_repr.push("]".to_string());
            } else {
                string_repr.push("\n".to_string());
            }
        }
        write!(f, "{}", string_repr.join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_row_major() {
        let mut matrix = SparseMatrix::with_shape(3, 4);
        matrix.set(2, 0, 8).unwrap();
        matrix.set(0, 3, -1).unwrap();
        matrix.set(0, 1, 5).unwrap();
        assert_eq!(
            matrix.to_text(),
            "rows=3\ncols=4\n(0, 1, 5)\n(0, 3, -1)\n(2, 0, 8)\n"
        );
    }

    #[test]
    fn test_text_of_empty_matrix() {
        assert_eq!(SparseMatrix::with_shape(0, 5).to_text(), "rows=0\ncols=5\n");
    }

    #[test]
    fn test_dense() {
        let matrix =
            SparseMatrix::from_triples(2, 3, vec![(0, 0, 1), (1, 2, -10), (1, 1, 4)]).unwrap();
        assert_eq!(
            matrix.dense().to_string(),
            "[[  1,   0,   0]\n [  0,   4, -10]]"
        );
        assert_eq!(SparseMatrix::with_shape(0, 0).dense().to_string(), "[[]]");
        assert_eq!(
            SparseMatrix::with_shape(1, 2).dense().to_string(),
            "[[0, 0]]"
        );
    }
}
