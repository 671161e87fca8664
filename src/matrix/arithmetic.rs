use std::collections::{BTreeMap, HashMap};

use super::SparseMatrix;
use crate::{
    options::{MultiplyMethod, Operation},
    util::{MatrixError, Result},
};

type Entries = BTreeMap<(usize, usize), i64>;

impl SparseMatrix {
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`, using the indexed join.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.multiply_with(other, MultiplyMethod::default())
    }

    /// Matrix product `self * other` using the given join strategy.
    ///
    /// Both strategies visit the contributing terms of every output entry in the same order and
    /// drop an entry as soon as its running sum is zero, so they produce identical results.
    pub fn multiply_with(&self, other: &SparseMatrix, method: MultiplyMethod) -> Result<SparseMatrix> {
        if self.cols != other.rows {
            return Err(MatrixError::InnerDimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        log::trace!(
            "Multiplying {} ({} entries) by {} ({} entries) with {:?} join.",
            self.shape(),
            self.nnz(),
            other.shape(),
            other.nnz(),
            method
        );
        let entries = match method {
            MultiplyMethod::Naive => self.naive_product(other)?,
            MultiplyMethod::Indexed => self.indexed_product(other)?,
        };

        Ok(SparseMatrix {
            rows: self.rows,
            cols: other.cols,
            entries,
        })
    }

    /// Flips the sign of every entry.
    pub fn negate(&self) -> Result<SparseMatrix> {
        let entries = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| match value.checked_neg() {
                Some(negated) => Ok(((row, col), negated)),
                None => Err(MatrixError::OverflowError { row, col }),
            })
            .collect::<Result<Entries>>()?;

        Ok(SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        })
    }

    fn combine(
        &self,
        other: &SparseMatrix,
        operation: Operation,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = self.clone();
        for (&(row, col), &value) in &other.entries {
            let current = result.entries.get(&(row, col)).copied().unwrap_or(0);
            let combined = op(current, value).ok_or(MatrixError::OverflowError { row, col })?;
            store(&mut result.entries, (row, col), combined);
        }

        log::trace!(
            "{} of two {} matrices left {} entries.",
            operation.noun(),
            self.shape(),
            result.nnz()
        );
        Ok(result)
    }

    fn naive_product(&self, other: &SparseMatrix) -> Result<Entries> {
        let mut entries = Entries::new();
        for (&(i, k), &v1) in &self.entries {
            for (&(k2, j), &v2) in &other.entries {
                if k == k2 {
                    accumulate(&mut entries, (i, j), v1, v2)?;
                }
            }
        }
        Ok(entries)
    }

    fn indexed_product(&self, other: &SparseMatrix) -> Result<Entries> {
        // Rows of `other`, each in ascending column order.
        let mut other_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (&(k, j), &v2) in &other.entries {
            other_rows.entry(k).or_default().push((j, v2));
        }

        let mut entries = Entries::new();
        for (&(i, k), &v1) in &self.entries {
            if let Some(row) = other_rows.get(&k) {
                for &(j, v2) in row {
                    accumulate(&mut entries, (i, j), v1, v2)?;
                }
            }
        }
        Ok(entries)
    }
}

/// Adds `v1 * v2` to the running value at `key`, pruning it if it cancels to zero.
fn accumulate(entries: &mut Entries, key: (usize, usize), v1: i64, v2: i64) -> Result<()> {
    let overflow = || MatrixError::OverflowError {
        row: key.0,
        col: key.1,
    };
    let product = v1.checked_mul(v2).ok_or_else(overflow)?;
    let current = entries.get(&key).copied().unwrap_or(0);
    let sum = current.checked_add(product).ok_or_else(overflow)?;
    store(entries, key, sum);
    Ok(())
}

fn store(entries: &mut Entries, key: (usize, usize), value: i64) {
    if value == 0 {
        entries.remove(&key);
    } else {
        entries.insert(key, value);
    }
}

impl std::ops::Add for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn add(self, rhs: Self) -> Self::Output {
        SparseMatrix::add(self, rhs)
    }
}

impl std::ops::Sub for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl std::ops::Mul for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl std::ops::Neg for &SparseMatrix {
    type Output = Result<SparseMatrix>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::util::random_matrix;

    fn matrix(rows: usize, cols: usize, triples: &[(usize, usize, i64)]) -> SparseMatrix {
        SparseMatrix::from_triples(rows, cols, triples.iter().copied()).unwrap()
    }

    fn triples(matrix: &SparseMatrix) -> Vec<(usize, usize, i64)> {
        matrix.entries().map(|((r, c), v)| (r, c, v)).collect()
    }

    fn matrix1() -> SparseMatrix {
        matrix(2, 2, &[(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)])
    }

    fn matrix2() -> SparseMatrix {
        matrix(2, 2, &[(1, 1, 5)])
    }

    fn assert_no_zeros(matrix: &SparseMatrix) {
        assert!(matrix.entries().all(|(_, value)| value != 0));
    }

    #[test]
    fn test_add() {
        let sum = matrix1().add(&matrix2()).unwrap();
        assert_eq!(
            triples(&sum),
            vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 9)]
        );
    }

    #[test]
    fn test_subtract() {
        let difference = matrix1().subtract(&matrix2()).unwrap();
        assert_eq!(
            triples(&difference),
            vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, -1)]
        );
    }

    #[test]
    fn test_operands_are_untouched() {
        let (a, b) = (matrix1(), matrix2());
        let _ = a.add(&b).unwrap();
        let _ = a.multiply(&b).unwrap();
        assert_eq!(a, matrix1());
        assert_eq!(b, matrix2());
    }

    #[test]
    fn test_cancellation_prunes_entries() {
        let a = matrix(2, 2, &[(0, 0, 3), (1, 1, -2)]);
        let b = matrix(2, 2, &[(0, 0, -3), (1, 1, 2)]);
        let sum = a.add(&b).unwrap();
        assert!(sum.is_empty());
        assert!(a.subtract(&a).unwrap().is_empty());
    }

    #[test]
    fn test_add_with_zero_matrix_is_identity() {
        let zero = SparseMatrix::with_shape(2, 2);
        assert_eq!(matrix1().add(&zero).unwrap(), matrix1());
        assert_eq!(zero.add(&matrix1()).unwrap(), matrix1());
    }

    #[test]
    fn test_additive_dimension_mismatch() {
        let result = matrix1().add(&SparseMatrix::with_shape(2, 3));
        assert!(matches!(
            result,
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                ..
            })
        ));
        assert!(matches!(
            matrix1().subtract(&SparseMatrix::with_shape(3, 2)),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn test_multiply_single_matching_pair() {
        let a = matrix(2, 3, &[(0, 1, 4), (1, 0, 2)]);
        let b = matrix(3, 2, &[(1, 1, 5), (2, 0, 7)]);
        for method in [MultiplyMethod::Naive, MultiplyMethod::Indexed] {
            let product = a.multiply_with(&b, method).unwrap();
            assert_eq!(product.shape(), crate::Shape { rows: 2, cols: 2 });
            assert_eq!(triples(&product), vec![(0, 1, 20)]);
            assert_eq!(product.get(1, 0).unwrap(), 0);
        }
    }

    #[test]
    fn test_multiply_dense_example() {
        // [[1, 2], [3, 4]] * [[5, 6], [7, 8]] = [[19, 22], [43, 50]]
        let b = matrix(2, 2, &[(0, 0, 5), (0, 1, 6), (1, 0, 7), (1, 1, 8)]);
        let product = (&matrix1() * &b).unwrap();
        assert_eq!(
            triples(&product),
            vec![(0, 0, 19), (0, 1, 22), (1, 0, 43), (1, 1, 50)]
        );
    }

    #[test]
    fn test_multiply_inner_dimension_mismatch() {
        let a = SparseMatrix::with_shape(2, 2);
        let b = matrix(3, 3, &[(0, 0, 1)]);
        for method in [MultiplyMethod::Naive, MultiplyMethod::Indexed] {
            assert!(matches!(
                a.multiply_with(&b, method),
                Err(MatrixError::InnerDimensionMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_multiply_prunes_and_revives() {
        // Row 0 of `a` against column 0 of `b`: 1*2 + 1*(-2) + 1*3, the running sum hits zero
        // after the second term and the third term re-inserts the entry.
        let a = matrix(1, 3, &[(0, 0, 1), (0, 1, 1), (0, 2, 1)]);
        let b = matrix(3, 2, &[(0, 0, 2), (1, 0, -2), (2, 0, 3), (0, 1, 1), (1, 1, -1)]);
        for method in [MultiplyMethod::Naive, MultiplyMethod::Indexed] {
            let product = a.multiply_with(&b, method).unwrap();
            assert_eq!(triples(&product), vec![(0, 0, 3)]);
            assert_no_zeros(&product);
        }
    }

    #[test]
    fn test_multiply_overflow() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);
        assert!(matches!(
            a.multiply(&b),
            Err(MatrixError::OverflowError { row: 0, col: 0 })
        ));
        assert!(matches!(
            a.add(&a),
            Err(MatrixError::OverflowError { row: 0, col: 0 })
        ));
    }

    #[test]
    fn test_negate() {
        let negated = (-&matrix1()).unwrap();
        assert_eq!(
            triples(&negated),
            vec![(0, 0, -1), (0, 1, -2), (1, 0, -3), (1, 1, -4)]
        );
        assert!(matrix(1, 1, &[(0, 0, i64::MIN)]).negate().is_err());
    }

    #[test]
    fn test_random_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 6, 5, 0.3, (-4, 4)).unwrap();
            let b = random_matrix(&mut rng, 6, 5, 0.3, (-4, 4)).unwrap();
            let c = random_matrix(&mut rng, 5, 4, 0.3, (-4, 4)).unwrap();
            let d = random_matrix(&mut rng, 4, 3, 0.3, (-4, 4)).unwrap();

            let sum = a.add(&b).unwrap();
            assert_eq!(sum, b.add(&a).unwrap());
            assert_eq!(a.subtract(&b).unwrap(), a.add(&b.negate().unwrap()).unwrap());
            assert_no_zeros(&sum);
            assert_no_zeros(&a.subtract(&b).unwrap());

            let naive = a.multiply_with(&c, MultiplyMethod::Naive).unwrap();
            let indexed = a.multiply_with(&c, MultiplyMethod::Indexed).unwrap();
            assert_eq!(naive, indexed);
            assert_no_zeros(&indexed);

            let left = a.multiply(&c).unwrap().multiply(&d).unwrap();
            let right = a.multiply(&c.multiply(&d).unwrap()).unwrap();
            assert_eq!(left, right);
        }
    }
}
