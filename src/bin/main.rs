use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use clap::Parser;
use log::{info, LevelFilter};

use spalg::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use spalg::data::linear_algebra::vector::{SparseVector, Vector};

/// Time sparse vector and matrix operations against plain `Vec` baselines.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Length of the benchmark vectors
    #[arg(long, default_value_t = 10_000)]
    vector_size: usize,
    /// Number of rows and columns of the benchmark matrices
    #[arg(long, default_value_t = 100)]
    matrix_size: usize,
    /// Distance between the rows and columns holding a one in the benchmark matrices
    #[arg(long, default_value_t = 25)]
    step: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("spalg"), LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = Opts::parse();
    ensure!(opts.step > 0, "the step should be positive");

    bench_vectors(opts.vector_size)?;
    bench_matrices(opts.matrix_size, opts.step)?;

    Ok(())
}

fn bench_vectors(size: usize) -> anyhow::Result<()> {
    info!("Vectors of length {}", size);

    let dense = vec![1f64; size];
    let first = SparseVector::from(dense.as_slice());
    let second = first.clone();

    let (sum, elapsed) = timed(|| first.add_vector(&second));
    sum.context("vectors of equal length")?;
    report("sparse vector", "add", elapsed);
    let (scaled, elapsed) = timed(|| first.multiply_scalar(2f64));
    ensure!(scaled.size() == size, "scaling changed the length of the vector");
    report("sparse vector", "mul val", elapsed);
    let (product, elapsed) = timed(|| first.dot(&second));
    product.context("vectors of equal length")?;
    report("sparse vector", "mul vec", elapsed);

    let (_, elapsed) = timed(|| dense_add(&dense, &dense));
    report("std vec", "add", elapsed);
    let (_, elapsed) = timed(|| dense.iter().map(|value| value * 2f64).collect::<Vec<_>>());
    report("std vec", "mul val", elapsed);
    let (_, elapsed) = timed(|| dense.iter().zip(&dense).map(|(x, y)| x * y).sum::<f64>());
    report("std vec", "mul vec", elapsed);

    Ok(())
}

fn bench_matrices(size: usize, step: usize) -> anyhow::Result<()> {
    info!("Square matrices of size {} with ones every {} rows and columns", size, step);

    let mut dense = vec![vec![0f64; size]; size];
    for i in (0..size).step_by(step) {
        for j in (0..size).step_by(step) {
            dense[i][j] = 1f64;
        }
    }
    let first = SparseMatrix::from_data(dense.clone())?;
    let second = first.clone();

    let (sum, elapsed) = timed(|| first.add_matrix(&second));
    sum.context("matrices of equal dimensions")?;
    report("sparse mat", "add", elapsed);
    let (product, elapsed) = timed(|| first.multiply_matrix(&second));
    product.context("square matrices of equal size")?;
    report("sparse mat", "mul", elapsed);
    let (transposed, elapsed) = timed(|| first.transpose());
    ensure!(transposed.nnz() == first.nnz(), "transposing changed the number of values");
    report("sparse mat", "transpose", elapsed);

    let diagonal = SparseMatrix::identity(size).multiply_scalar(2f64);
    let (inverse, elapsed) = timed(|| diagonal.inverse());
    inverse.context("a diagonal matrix with nonzero diagonal is invertible")?;
    report("sparse mat", "inverse", elapsed);

    let (_, elapsed) = timed(|| dense_matrix_add(&dense, &dense));
    report("std mat", "add", elapsed);

    Ok(())
}

/// Run `operation` once, returning its result and the time it took.
///
/// The result passes through `black_box`, so unused results are still computed.
fn timed<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = black_box(operation());
    (result, start.elapsed())
}

fn report(subject: &str, operation: &str, elapsed: Duration) {
    info!("{} - {}: {}µs", subject, operation, elapsed.as_micros());
}

fn dense_add(first: &[f64], second: &[f64]) -> Vec<f64> {
    first.iter().zip(second).map(|(x, y)| x + y).collect()
}

fn dense_matrix_add(first: &[Vec<f64>], second: &[Vec<f64>]) -> Vec<Vec<f64>> {
    first.iter().zip(second).map(|(x, y)| dense_add(x, y)).collect()
}
