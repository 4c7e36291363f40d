//! Random sampling of the range of an operator.
//!
//! Given an operator $A\in\mathbb{R}^{m\times n}$ and a target rank $k$, the routines here
//! compute a matrix $Q\in\mathbb{R}^{m\times k}$ with orthonormal columns such that
//! $\|A - QQ^TA\|$ is small. The range is sampled as $Y = A\Omega$ with a Gaussian
//! matrix $\Omega$ and then refined by a power iteration that alternately
//! applies $A^T$ and $A$, reorthonormalizing after every product
//! (Algorithm 4.4 in Halko, Martinsson, Tropp, 2011).

use crate::orthonormalize::orthonormal_basis;
use crate::random_matrix::RandomMatrix;
use crate::types::{checked_matmat, checked_trans_matmat, RandomizedSvdError, Result, TransMatMat};
use ndarray::Array2;
use rand::Rng;

/// Return the rank and iteration count actually used for an (nrows, ncols) operator.
///
/// The rank is clamped to `1..=min(nrows, ncols)` and the iteration count to at least one.
pub fn effective_parameters(
    nrows: usize,
    ncols: usize,
    rank: usize,
    power_iterations: usize,
) -> (usize, usize) {
    let effective_rank = rank.max(1).min(nrows).min(ncols);
    let effective_iterations = power_iterations.max(1);

    if effective_rank != rank {
        log::info!(
            "reducing asked rank {} to {} for ({}, {}) operator",
            rank,
            effective_rank,
            nrows,
            ncols
        );
    }
    if effective_iterations != power_iterations {
        log::info!(
            "clamping power iteration count {} to {}",
            power_iterations,
            effective_iterations
        );
    }

    (effective_rank, effective_iterations)
}

// Randomly sample the range of an operator refined through a power iteration.
// Return an (nrows, k) matrix with orthonormal columns approximating the dominant range.
// # Arguments
// * `op`: The operator for which to sample the range.
// * `k`: The target rank of the basis for the range. Clamped to `1..=min(op.nrows(), op.ncols())`.
// * `it_count`: The number of steps in the power iteration. Clamped to at least one.
// * `rng`: The random number generator.
pub fn sample_range_power_iteration<Op: TransMatMat, R: Rng>(
    op: &Op,
    k: usize,
    it_count: usize,
    rng: &mut R,
) -> Result<Array2<Op::A>> {
    let m = op.nrows();
    let n = op.ncols();

    if m == 0 || n == 0 {
        return Err(RandomizedSvdError::DimensionMismatch(format!(
            "cannot sample the range of an empty ({}, {}) operator",
            m, n
        )));
    }

    let (k, it_count) = effective_parameters(m, n, k, it_count);

    log::debug!(
        "sample_range_power_iteration: operator ({}, {}), rank {}, power iterations {}",
        m,
        n,
        k,
        it_count
    );

    let omega = Op::A::random_gaussian((n, k), rng);
    let mut range = orthonormal_basis(checked_matmat(op, omega.view())?, k)?;

    for index in 0..it_count {
        let co_range = orthonormal_basis(checked_trans_matmat(op, range.view())?, k)?;
        range = orthonormal_basis(checked_matmat(op, co_range.view())?, k)?;
        log::trace!("power iteration {} of {} done", index + 1, it_count);
    }

    Ok(range)
}
