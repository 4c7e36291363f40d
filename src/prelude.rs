//! Collect all traits and other exports here.

pub use crate::orthonormalize::orthonormal_basis;
pub use crate::random_matrix::RandomMatrix;
pub use crate::randomized_svd::{randomized_svd, RandomizedSVDOptions, DEFAULT_POWER_ITERATIONS};
pub use crate::range_finder::sample_range_power_iteration;
pub use crate::svd::{SVDTraits, SVD};
pub use crate::types::{MatMat, MatVec, RealScalar, RelDiff, TransMatMat, TransMatVec};
pub use crate::CompressionType;
