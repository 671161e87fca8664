use rand::{seq::index, Rng};

use super::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// Generates a `rows x cols` matrix with `density` of its cells drawn, rounded to the nearest
/// whole cell.
///
/// Drawn cells are sampled without replacement from the flattened row-major index space, so the
/// cost grows with the number of drawn cells rather than the shape. Each drawn cell gets a value
/// uniformly from `range` (inclusive); a drawn zero leaves the cell empty.
pub fn random_matrix<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    density: f64,
    range: (i64, i64),
) -> Result<SparseMatrix> {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let (min, max) = (range.0.min(range.1), range.0.max(range.1));

    let cells = rows
        .checked_mul(cols)
        .ok_or(MatrixError::CapacityError { rows, cols })?;
    let drawn = ((cells as f64 * density).round() as usize).min(cells);

    let triples = index::sample(rng, cells, drawn)
        .into_iter()
        .map(|cell| (cell / cols, cell % cols, rng.gen_range(min..=max)))
        .collect::<Vec<_>>();

    log::debug!(
        "Drew {} of {} cells for a random {}x{} matrix.",
        triples.len(),
        cells,
        rows,
        cols
    );
    SparseMatrix::from_triples(rows, cols, triples)
}
