//! Randomized truncated singular value decompositions.
//!
//! Given an operator $A\in\mathbb{R}^{m\times n}$ and a target rank $k\ll\min(m, n)$ this
//! crate computes $U\in\mathbb{R}^{m\times k}$, $\Sigma = \text{diag}(\sigma_1,\dots,\sigma_k)$ and
//! $V\in\mathbb{R}^{n\times k}$ with $A\approx U\Sigma V^T$, following the randomized range
//! finder with power iteration of Halko, Martinsson and Tropp.
pub mod examples;
pub mod orthonormalize;
pub mod prelude;
pub mod random_matrix;
pub mod randomized_svd;
pub mod range_finder;
pub mod svd;
pub mod types;

pub enum CompressionType {
    /// Adaptive compression with a specified tolerance
    ADAPTIVE(f64),
    /// Rank based compression with specified rank
    RANK(usize),
}

pub use orthonormalize::orthonormal_basis;
pub use random_matrix::RandomMatrix;
pub use randomized_svd::{randomized_svd, RandomizedSVDOptions, DEFAULT_POWER_ITERATIONS};
pub use range_finder::{effective_parameters, sample_range_power_iteration};
pub use svd::{SVDTraits, SVD};
pub use types::{
    MatMat, MatVec, RandomizedSvdError, RealScalar, RelDiff, Result, TransMatMat, TransMatVec,
};
