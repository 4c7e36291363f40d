//! Generation of random matrices for the supported real types

use crate::orthonormalize::orthonormal_basis;
use crate::types::{RealScalar, Result};
use ndarray::{Array, Array2, Axis};
use rand::distributions::Open01;
use rand::Rng;

pub trait RandomMatrix
where
    Self: RealScalar,
{
    /// Generate a random Gaussian matrix.
    ///
    /// Entries are independent standard normal samples produced by a Box-Muller
    /// transform. Each transform yields a pair of values that fill two adjacent
    /// columns of a row. For an odd number of columns the second value of the
    /// last pair in each row is discarded.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        let ncols = dimension.1;
        let mut mat = Array2::<Self>::zeros(dimension);

        for mut row in mat.axis_iter_mut(Axis(0)) {
            for col in (0..ncols).step_by(2) {
                let (first, second) = box_muller(rng);
                row[col] = Self::real(first);
                if col + 1 < ncols {
                    row[col + 1] = Self::real(second);
                }
            }
        }

        mat
    }

    /// Generate a random matrix with orthonormal rows or columns.
    ///
    /// If m >= n then the returned matrix has orthonormal columns. If n > m
    /// the returned matrix has orthonormal rows.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_orthogonal_matrix<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Result<Array2<Self>> {
        let (m, n) = dimension;

        // Always orthonormalize a long and skinny matrix
        if n > m {
            let q = orthonormal_basis(Self::random_gaussian((n, m), rng), m)?;
            Ok(q.reversed_axes())
        } else {
            orthonormal_basis(Self::random_gaussian((m, n), rng), n)
        }
    }

    /// Generate a random matrix of exact rank `rank`.
    ///
    /// The matrix is the product of an (m, rank) and a (rank, n) Gaussian matrix
    /// and so has rank `rank` with probability one.
    fn random_low_rank_matrix<R: Rng>(dimension: (usize, usize), rank: usize, rng: &mut R) -> Array2<Self> {
        let left = Self::random_gaussian((dimension.0, rank), rng);
        let right = Self::random_gaussian((rank, dimension.1), rng);
        left.dot(&right)
    }

    /// Generate a random approximate low-rank matrix.
    ///
    /// This function generates a random approximate low-rank matrix
    /// with singular values logarithmically distributed between
    /// `sigma_max` and `sigma_min`.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `sigma_max`: Maximum singular value.
    /// * `sigma_min`: Minimum singular value.
    /// * `rng`: The random number generator to use.
    fn random_approximate_low_rank_matrix<R: Rng>(
        dimension: (usize, usize),
        sigma_max: f64,
        sigma_min: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        assert!(
            sigma_min < sigma_max,
            "`sigma_min` must be smaller than `sigma_max`"
        );
        assert!(sigma_min > 0.0, "`sigma_min` must be positive.");

        let min_dim = std::cmp::min(dimension.0, dimension.1);

        let u = Self::random_orthogonal_matrix((dimension.0, min_dim), rng)?;
        let vt = Self::random_orthogonal_matrix((min_dim, dimension.1), rng)?;

        // Largest singular value first.
        let singvals = Array::geomspace(sigma_max, sigma_min, min_dim)
            .unwrap_or_else(|| Array::from_elem(min_dim, sigma_max))
            .map(|&item| Self::real(item));
        let sigma = Array2::from_diag(&singvals);
        Ok(u.dot(&sigma.dot(&vt)))
    }
}

impl<A: RealScalar> RandomMatrix for A {}

// One Box-Muller transform. Both uniforms come from the open interval (0, 1)
// so that the logarithm stays finite.
fn box_muller<R: Rng>(rng: &mut R) -> (f64, f64) {
    let v: f64 = rng.sample(Open01);
    let u: f64 = rng.sample(Open01);

    let radius = (-2.0 * v.ln()).sqrt();
    let angle = 2.0 * std::f64::consts::PI * u;

    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::svd::{SVDTraits, SVD};
    use crate::types::RelDiff;
    use ndarray::s;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_gaussian_shape() {
        let mut rng = rand::thread_rng();

        assert_eq!(f64::random_gaussian((7, 4), &mut rng).dim(), (7, 4));
        assert_eq!(f64::random_gaussian((7, 5), &mut rng).dim(), (7, 5));
        assert_eq!(f32::random_gaussian((1, 1), &mut rng).dim(), (1, 1));
    }

    #[test]
    fn test_random_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(4664397);
        let mat = f64::random_gaussian((400, 251), &mut rng);

        let count = mat.len() as f64;
        let mean = mat.sum() / count;
        let variance = mat.iter().map(|item| (item - mean) * (item - mean)).sum::<f64>() / count;

        assert!(mean.abs() < 0.02, "mean {}", mean);
        assert!((variance - 1.0).abs() < 0.02, "variance {}", variance);
        assert!(mat.iter().all(|item| item.is_finite()));
    }

    #[test]
    fn test_random_gaussian_is_reproducible() {
        let first = f64::random_gaussian((20, 9), &mut StdRng::seed_from_u64(7));
        let second = f64::random_gaussian((20, 9), &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_gaussian_discards_trailing_sine() {
        // An odd column count draws the same amount of entropy per row as the
        // next even count, so the stored values agree and only the last
        // sine sample is missing.
        let odd = f64::random_gaussian((3, 5), &mut StdRng::seed_from_u64(11));
        let even = f64::random_gaussian((3, 6), &mut StdRng::seed_from_u64(11));

        assert_eq!(odd, even.slice(s![.., 0..5]));
    }

    #[test]
    fn test_box_muller_pair_on_unit_circle_scale() {
        let mut rng = StdRng::seed_from_u64(3);
        let v: f64 = rng.sample(Open01);
        let _: f64 = rng.sample(Open01);
        let expected_radius = (-2.0 * v.ln()).sqrt();

        let (first, second) = box_muller(&mut StdRng::seed_from_u64(3));
        let radius = (first * first + second * second).sqrt();

        assert!((radius - expected_radius).abs() < 1E-12);
    }

    #[test]
    fn test_random_orthogonal_matrix() {
        let mut rng = rand::thread_rng();

        let tall = f64::random_orthogonal_matrix((30, 10), &mut rng).unwrap();
        let ident = Array2::<f64>::eye(10);
        assert_eq!(tall.dim(), (30, 10));
        assert!(f64::rel_diff_fro(tall.t().dot(&tall).view(), ident.view()).unwrap() < 1E-12);

        let wide = f64::random_orthogonal_matrix((10, 30), &mut rng).unwrap();
        assert_eq!(wide.dim(), (10, 30));
        assert!(f64::rel_diff_fro(wide.dot(&wide.t()).view(), ident.view()).unwrap() < 1E-12);
    }

    #[test]
    fn test_random_low_rank_matrix_rank() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_low_rank_matrix((30, 20), 4, &mut rng);

        let svd = SVD::<f64>::compute_from(mat.view()).unwrap();
        let s = svd.get_s();

        assert!(s[3] / s[0] > 1E-8);
        assert!(s.slice(s![4..]).iter().all(|&item| item / s[0] < 1E-12));
    }

    #[test]
    fn test_random_approximate_low_rank_matrix_spectrum() {
        let mut rng = rand::thread_rng();
        let mat = f64::random_approximate_low_rank_matrix((50, 30), 1.0, 1E-10, &mut rng).unwrap();

        let svd = SVD::<f64>::compute_from(mat.view()).unwrap();

        assert!((svd.s[0] - 1.0).abs() < 1E-10);
        assert!((svd.s[29] - 1E-10).abs() < 1E-12);
    }
}
