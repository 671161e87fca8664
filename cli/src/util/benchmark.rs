use std::time::{Duration, Instant};

use sparse_matrix::{MultiplyMethod, SparseMatrix};

pub(crate) fn run_benchmark(left: &SparseMatrix, right: &SparseMatrix, iterations: u32) {
    let iterations = iterations.max(1);
    println!(
        "Multiplying a {} matrix ({} entries) by a {} matrix ({} entries), n={}.",
        left.shape(),
        left.nnz(),
        right.shape(),
        right.nnz(),
        iterations
    );

    let mut products: Vec<SparseMatrix> = vec![];
    for method in [MultiplyMethod::Naive, MultiplyMethod::Indexed] {
        let mut elapsed = Duration::ZERO;
        let mut product = None;
        for _ in 0..iterations {
            let start = Instant::now();
            product = Some(crate::attempt!(left.multiply_with(right, method)));
            elapsed += start.elapsed();
        }
        elapsed /= iterations;

        println!(
            "{} multiplication took {}s and {}ms on average.",
            method,
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
        products.extend(product);
    }

    if products.windows(2).any(|pair| pair[0] != pair[1]) {
        log::error!("The multiplication methods disagree on the product.");
    } else {
        log::info!("Both multiplication methods produced the same product.");
    }
}
