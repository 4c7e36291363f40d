//! Data structures and traits for (truncated) singular value decompositions.
//!
//! The thin SVD of a matrix $A\in\mathbb{R}^{m\times n}$ is $A = U\Sigma V^T$ with
//! $U\in\mathbb{R}^{m\times k}$ and $V\in\mathbb{R}^{n\times k}$ having orthonormal columns
//! and $\Sigma = \text{diag}(\sigma_1, \dots, \sigma_k)$, $\sigma_1\geq\sigma_2\geq\dots\geq 0$.
//!
//! Given a matrix $Q$ with orthonormal columns approximating the range of $A$, an
//! approximate SVD is obtained from the exact SVD $Q^TA = \tilde{U}\Sigma V^T$ of the
//! small matrix $Q^TA$ by setting $U = Q\tilde{U}$.
//!
//! An SVD can be compressed further, either by keeping the first $\ell$ singular triplets
//! or by keeping all triplets with $\sigma_j / \sigma_1 \geq tol$.

use crate::types::{checked_trans_matmat, RandomizedSvdError, RealScalar, Result, TransMatMat};
use crate::CompressionType;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use ndarray_linalg::{JobSvd, SVDDCInto};
use num::ToPrimitive;

pub struct SVD<A: RealScalar> {
    /// The U matrix with orthonormal columns
    pub u: Array2<A>,
    /// The array of singular values in non-increasing order
    pub s: Array1<A>,
    /// The V matrix with orthonormal columns
    pub v: Array2<A>,
}

pub trait SVDTraits {
    type A: RealScalar;

    /// Number of rows
    fn nrows(&self) -> usize {
        self.get_u().nrows()
    }

    /// Number of columns
    fn ncols(&self) -> usize {
        self.get_v().nrows()
    }

    /// Rank of the SVD
    fn rank(&self) -> usize {
        self.get_s().len()
    }

    /// Convert the SVD to a matrix
    fn to_mat(&self) -> Array2<Self::A> {
        let mut scaled_u = self.get_u().to_owned();

        Zip::from(scaled_u.axis_iter_mut(Axis(1)))
            .and(self.get_s())
            .for_each(|mut col, &s_elem| col.map_inplace(|item| *item *= s_elem));

        scaled_u.dot(&self.get_v().t())
    }

    /// Compress by giving a target rank
    fn compress_svd_rank(&self, mut max_rank: usize) -> Result<SVD<Self::A>> {
        let (u, s, v) = (self.get_u(), self.get_s(), self.get_v());

        if max_rank > s.len() {
            max_rank = s.len()
        }

        Ok(SVD {
            u: u.slice(s![.., 0..max_rank]).into_owned(),
            s: s.slice(s![0..max_rank]).into_owned(),
            v: v.slice(s![.., 0..max_rank]).into_owned(),
        })
    }

    /// Compress by specifying a relative tolerance
    fn compress_svd_tolerance(&self, tol: f64) -> Result<SVD<Self::A>> {
        assert!((tol < 1.0) && (0.0 <= tol), "Require 0 <= tol < 1.0");

        let s = self.get_s();
        if s.is_empty() {
            return Err(RandomizedSvdError::CompressionError);
        }

        let pos = s
            .iter()
            .position(|&item| (item / s[0]).to_f64().map_or(false, |ratio| ratio < tol));

        match pos {
            Some(index) => self.compress_svd_rank(index),
            None => Err(RandomizedSvdError::CompressionError),
        }
    }

    /// Compress the SVD by rank or tolerance
    fn compress(&self, compression_type: CompressionType) -> Result<SVD<Self::A>> {
        match compression_type {
            CompressionType::ADAPTIVE(tol) => self.compress_svd_tolerance(tol),
            CompressionType::RANK(rank) => self.compress_svd_rank(rank),
        }
    }

    /// Compute the exact thin SVD of a given array
    fn compute_from(arr: ArrayView2<Self::A>) -> Result<SVD<Self::A>>;

    /// Compute an approximate SVD from a range estimate
    /// # Arguments
    /// * `range`: A matrix with orthonormal columns that approximates the range
    ///            of the operator.
    /// * `op`: The underlying operator.
    fn compute_from_range_estimate<Op: TransMatMat<A = Self::A>>(
        range: ArrayView2<Self::A>,
        op: &Op,
    ) -> Result<SVD<Self::A>>;

    /// Return the U matrix
    fn get_u(&self) -> ArrayView2<Self::A>;

    /// Return the singular values
    fn get_s(&self) -> ArrayView1<Self::A>;

    /// Return the V matrix
    fn get_v(&self) -> ArrayView2<Self::A>;
}

macro_rules! svd_data_impl {
    ($scalar:ty) => {
        impl SVDTraits for SVD<$scalar> {
            type A = $scalar;

            fn get_u(&self) -> ArrayView2<Self::A> {
                self.u.view()
            }

            fn get_s(&self) -> ArrayView1<Self::A> {
                self.s.view()
            }

            fn get_v(&self) -> ArrayView2<Self::A> {
                self.v.view()
            }

            fn compute_from(arr: ArrayView2<Self::A>) -> Result<SVD<Self::A>> {
                let (m, n) = arr.dim();
                let (u, s, vt) = arr.to_owned().svddc_into(JobSvd::Some)?;

                // A thin job always returns both factors.
                match (u, vt) {
                    (Some(u), Some(vt)) => Ok(SVD {
                        u,
                        s,
                        v: vt.reversed_axes(),
                    }),
                    _ => Err(RandomizedSvdError::DimensionMismatch(format!(
                        "thin SVD of a ({}, {}) matrix returned no singular vectors",
                        m, n
                    ))),
                }
            }

            fn compute_from_range_estimate<Op: TransMatMat<A = Self::A>>(
                range: ArrayView2<Self::A>,
                op: &Op,
            ) -> Result<SVD<Self::A>> {
                // b = range^T * op, formed as (op^T * range)^T
                let b = checked_trans_matmat(op, range)?.reversed_axes();

                log::debug!(
                    "compute_from_range_estimate: projected ({}, {}) operator to ({}, {})",
                    op.nrows(),
                    op.ncols(),
                    b.nrows(),
                    b.ncols()
                );

                let small = SVD::<$scalar>::compute_from(b.view())?;

                Ok(SVD {
                    u: range.dot(&small.u),
                    s: small.s,
                    v: small.v,
                })
            }
        }
    };
}

svd_data_impl!(f32);
svd_data_impl!(f64);
