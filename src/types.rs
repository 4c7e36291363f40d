//! This module collects the scalar, error and operator definitions

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix2};
use ndarray_linalg::error::LinalgError;
use ndarray_linalg::Norm;
use ndarray_linalg::OperationNorm;
use thiserror::Error;

pub use ndarray_linalg::{Lapack, Scalar};

/// Errors of the randomized SVD.
///
/// Shape failures of operator products and of the dense factorizations are
/// reported as `DimensionMismatch`. `LinalgError` carries numerical failures of
/// the LAPACK routines. `CompressionError` is only returned by [`crate::svd::SVDTraits::compress`].
#[derive(Error, Debug)]
pub enum RandomizedSvdError {
    #[error("Lapack Error: {0}")]
    LinalgError(#[from] LinalgError),
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("Could not compress to desired tolerance")]
    CompressionError,
}

pub type Result<T> = std::result::Result<T, RandomizedSvdError>;

/// Real floating point types supported by the randomized SVD.
pub trait RealScalar: Scalar<Real = Self> + Lapack {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}

/// Matrix-Vector Product Trait
///
/// This trait defines an interface for operators that provide matrix-vector products.
pub trait MatVec {
    type A: RealScalar;

    // Return the number of rows of the operator.
    fn nrows(&self) -> usize;

    // Return the number of columns of the operator.
    fn ncols(&self) -> usize;

    // Return the matrix vector product of an operator with a vector.
    fn matvec(&self, vec: ArrayView1<Self::A>) -> Array1<Self::A>;
}

/// Matrix-Matrix Product Trait
///
/// This trait defines the application of a linear operator $A$ to a matrix X representing multiple columns.
/// The default implementation applies `MatVec` to the individual columns of X.
pub trait MatMat: MatVec {
    // Return the matrix-matrix product of an operator with a matrix.
    fn matmat(&self, mat: ArrayView2<Self::A>) -> Array2<Self::A> {
        let mut output = Array2::<Self::A>::zeros((self.nrows(), mat.ncols()));

        for (index, col) in mat.axis_iter(Axis(1)).enumerate() {
            output
                .index_axis_mut(Axis(1), index)
                .assign(&self.matvec(col));
        }

        output
    }
}

/// Trait describing the product of the transpose of an operator with a vector
///
/// In the case that the operator is a matrix then this simply describes the action $A^Tx$.
pub trait TransMatVec: MatVec {
    // Return the product of the transpose of `self` with a vector.
    fn trans_matvec(&self, vec: ArrayView1<Self::A>) -> Array1<Self::A>;
}

/// Trait describing the action of the transpose of an operator with a matrix
///
/// In the case that the operator is a matrix then this describes the action $A^TX$.
/// The default implementation applies `TransMatVec` column by column.
pub trait TransMatMat: MatMat + TransMatVec {
    // Return the product of the transpose of `self` with a given matrix.
    fn trans_matmat(&self, mat: ArrayView2<Self::A>) -> Array2<Self::A> {
        let mut output = Array2::<Self::A>::zeros((self.ncols(), mat.ncols()));

        for (index, col) in mat.axis_iter(Axis(1)).enumerate() {
            output
                .index_axis_mut(Axis(1), index)
                .assign(&self.trans_matvec(col));
        }

        output
    }
}

impl<A, S> MatVec for ArrayBase<S, Ix2>
where
    A: RealScalar,
    S: Data<Elem = A>,
{
    type A = A;

    fn nrows(&self) -> usize {
        self.nrows()
    }

    fn ncols(&self) -> usize {
        self.ncols()
    }

    fn matvec(&self, vec: ArrayView1<Self::A>) -> Array1<Self::A> {
        self.dot(&vec)
    }
}

impl<A, S> TransMatVec for ArrayBase<S, Ix2>
where
    A: RealScalar,
    S: Data<Elem = A>,
{
    fn trans_matvec(&self, vec: ArrayView1<Self::A>) -> Array1<Self::A> {
        vec.dot(self)
    }
}

impl<A, S> MatMat for ArrayBase<S, Ix2>
where
    A: RealScalar,
    S: Data<Elem = A>,
{
    fn matmat(&self, mat: ArrayView2<Self::A>) -> Array2<Self::A> {
        self.dot(&mat)
    }
}

impl<A, S> TransMatMat for ArrayBase<S, Ix2>
where
    A: RealScalar,
    S: Data<Elem = A>,
{
    fn trans_matmat(&self, mat: ArrayView2<Self::A>) -> Array2<Self::A> {
        self.t().dot(&mat)
    }
}

/// Compute $AX$ and check that operator, input and output shapes agree.
pub(crate) fn checked_matmat<Op: MatMat>(op: &Op, mat: ArrayView2<Op::A>) -> Result<Array2<Op::A>> {
    if mat.nrows() != op.ncols() {
        return Err(RandomizedSvdError::DimensionMismatch(format!(
            "cannot multiply ({}, {}) operator with ({}, {}) matrix",
            op.nrows(),
            op.ncols(),
            mat.nrows(),
            mat.ncols()
        )));
    }

    let product = op.matmat(mat);
    check_product_shape(product.dim(), (op.nrows(), mat.ncols()))?;
    Ok(product)
}

/// Compute $A^TX$ and check that operator, input and output shapes agree.
pub(crate) fn checked_trans_matmat<Op: TransMatMat>(
    op: &Op,
    mat: ArrayView2<Op::A>,
) -> Result<Array2<Op::A>> {
    if mat.nrows() != op.nrows() {
        return Err(RandomizedSvdError::DimensionMismatch(format!(
            "cannot multiply transpose of ({}, {}) operator with ({}, {}) matrix",
            op.nrows(),
            op.ncols(),
            mat.nrows(),
            mat.ncols()
        )));
    }

    let product = op.trans_matmat(mat);
    check_product_shape(product.dim(), (op.ncols(), mat.ncols()))?;
    Ok(product)
}

fn check_product_shape(actual: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if actual != expected {
        return Err(RandomizedSvdError::DimensionMismatch(format!(
            "operator returned a {:?} product, expected {:?}",
            actual, expected
        )));
    }
    Ok(())
}

pub trait RelDiff {
    type A: RealScalar;

    /// Return the relative Frobenius norm difference of `first` and `second`.
    fn rel_diff_fro(first: ArrayView2<Self::A>, second: ArrayView2<Self::A>) -> Result<Self::A>;

    /// Return the relative l2 vector norm difference of `first` and `second`.
    fn rel_diff_l2(first: ArrayView1<Self::A>, second: ArrayView1<Self::A>) -> Self::A;
}

macro_rules! rel_diff_impl {
    ($scalar:ty) => {
        impl RelDiff for $scalar {
            type A = $scalar;
            fn rel_diff_fro(
                first: ArrayView2<Self::A>,
                second: ArrayView2<Self::A>,
            ) -> Result<Self::A> {
                let diff = first.to_owned() - &second;
                Ok(diff.opnorm_fro()? / second.opnorm_fro()?)
            }

            fn rel_diff_l2(first: ArrayView1<Self::A>, second: ArrayView1<Self::A>) -> Self::A {
                let diff = first.to_owned() - &second;
                diff.norm_l2() / second.norm_l2()
            }
        }
    };
}

rel_diff_impl!(f32);
rel_diff_impl!(f64);
