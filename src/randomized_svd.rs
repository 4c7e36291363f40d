//! Randomized truncated SVD of a linear operator.

use crate::range_finder::sample_range_power_iteration;
use crate::svd::{SVDTraits, SVD};
use crate::types::{Result, TransMatMat};
use rand::Rng;

/// Number of power iterations used when none is specified.
pub const DEFAULT_POWER_ITERATIONS: usize = 3;

/// Parameters of a randomized SVD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomizedSVDOptions {
    /// Number of leading singular triplets to approximate.
    pub target_rank: usize,
    /// Number of power iteration steps. More steps cost two products with the
    /// operator each but sharpen the approximation of the dominant subspace.
    pub power_iterations: usize,
}

impl RandomizedSVDOptions {
    pub fn new(target_rank: usize) -> Self {
        Self {
            target_rank,
            power_iterations: DEFAULT_POWER_ITERATIONS,
        }
    }

    pub fn with_power_iterations(mut self, power_iterations: usize) -> Self {
        self.power_iterations = power_iterations;
        self
    }

    /// Compute the randomized SVD of `op` with these options.
    pub fn compute<Op, R>(&self, op: &Op, rng: &mut R) -> Result<SVD<Op::A>>
    where
        Op: TransMatMat,
        SVD<Op::A>: SVDTraits<A = Op::A>,
        R: Rng,
    {
        randomized_svd(op, self.target_rank, self.power_iterations, rng)
    }
}

/// Compute an approximate rank `target_rank` SVD $A\approx U\Sigma V^T$ of an operator.
///
/// The dominant range of the operator is sampled with a Gaussian test matrix and
/// refined by `power_iterations` steps of a power iteration. The operator is
/// then projected onto that range and the exact SVD of the small projected
/// matrix is lifted back.
///
/// The rank is clamped to `1..=min(op.nrows(), op.ncols())` and the power
/// iteration count to at least one.
///
/// # Arguments
///
/// * `op`: The operator to decompose.
/// * `target_rank`: The number of singular triplets to compute.
/// * `power_iterations`: The number of power iteration steps. A typical value is
///                       [`DEFAULT_POWER_ITERATIONS`].
/// * `rng`: The random number generator.
pub fn randomized_svd<Op, R>(
    op: &Op,
    target_rank: usize,
    power_iterations: usize,
    rng: &mut R,
) -> Result<SVD<Op::A>>
where
    Op: TransMatMat,
    SVD<Op::A>: SVDTraits<A = Op::A>,
    R: Rng,
{
    let range = sample_range_power_iteration(op, target_rank, power_iterations, rng)?;
    SVD::<Op::A>::compute_from_range_estimate(range.view(), op)
}
