//! # Library examples
//!
//! We provide an example in the `demos` subdirectory. To run it
//! use `cargo run --example low_rank_svd`.
//!
//! ### Randomized SVD of an approximately low-rank $m\times n$ matrix.
//!
//! This example generates a matrix with geometrically decaying singular values,
//! computes a rank $k$ randomized SVD for an increasing number of power iterations
//! and prints the relative distance between the approximation and the original
//! matrix together with the leading singular values.
//! The corresponding code is in the file `low_rank_svd.rs`.
