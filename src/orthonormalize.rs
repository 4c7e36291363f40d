//! Orthonormal bases of column spaces via Householder QR.

use crate::types::{RandomizedSvdError, RealScalar, Result};
use ndarray::{s, Array2};
use ndarray_linalg::QRInto;

/// Return an orthonormal basis for the column space of `mat`.
///
/// The matrix is consumed and the first `k` columns of the Householder $Q$ factor
/// of the $m\times n$ input are returned. If the input is numerically rank
/// deficient the returned columns are still orthonormal, but only span a
/// completion of the input's column space.
///
/// # Arguments
///
/// * `mat`: The matrix to orthonormalize.
/// * `k`: The number of basis vectors to return. Must satisfy `k <= min(m, n)`.
pub fn orthonormal_basis<A: RealScalar>(mat: Array2<A>, k: usize) -> Result<Array2<A>> {
    let (m, n) = mat.dim();

    if k > n || k > m {
        return Err(RandomizedSvdError::DimensionMismatch(format!(
            "cannot extract {} orthonormal columns from a ({}, {}) matrix",
            k, m, n
        )));
    }

    let (q, _) = mat.qr_into()?;

    Ok(q.slice_move(s![.., 0..k]))
}
