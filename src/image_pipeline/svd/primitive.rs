//! SVD primitive seam.
//!
//! The engine never factorizes matrices itself; it asks an [`SvdPrimitive`]
//! for `U`, `S` and `V` and works from those. [`NalgebraSvd`] is the
//! production binding.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::svd::channels::ChannelMatrix;

/// `matrix ≈ u * diag(singular_values) * v^T`, singular values non-increasing.
#[derive(Debug, Clone)]
pub struct SvdFactorization {
    /// rows x r
    pub u: DMatrix<f64>,
    /// length r
    pub singular_values: DVector<f64>,
    /// columns x r
    pub v: DMatrix<f64>,
}

impl SvdFactorization {
    /// Number of components usable for reconstruction, never more than
    /// `min(rows, columns)` whatever the primitive returned.
    pub fn rank(&self) -> usize {
        self.singular_values
            .len()
            .min(self.u.ncols())
            .min(self.v.ncols())
            .min(self.u.nrows())
            .min(self.v.nrows())
    }

    /// `(rows, columns)` of the factorized matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.u.nrows(), self.v.nrows())
    }
}

pub trait SvdPrimitive: Send + Sync {
    fn factorize(&self, matrix: &ChannelMatrix) -> Result<SvdFactorization>;
}

/// Golub-Kahan SVD from `nalgebra`.
#[derive(Debug, Clone, Copy)]
pub struct NalgebraSvd {
    pub eps: f64,
    /// Iteration budget; 0 iterates until convergence.
    pub max_iterations: usize,
}

impl Default for NalgebraSvd {
    fn default() -> Self {
        Self {
            eps: f64::EPSILON,
            max_iterations: 0,
        }
    }
}

impl SvdPrimitive for NalgebraSvd {
    fn factorize(&self, matrix: &ChannelMatrix) -> Result<SvdFactorization> {
        let (rows, columns) = matrix.shape();
        debug!("Factorizing {}x{} channel matrix", rows, columns);

        if rows == 0 || columns == 0 {
            return Err(CompressionError::ExternalPrimitiveFailure(format!(
                "cannot factorize an empty {}x{} matrix",
                rows, columns
            )));
        }

        let svd = matrix
            .clone()
            .try_svd(true, true, self.eps, self.max_iterations)
            .ok_or_else(|| {
                CompressionError::ExternalPrimitiveFailure(format!(
                    "{}x{} matrix did not converge",
                    rows, columns
                ))
            })?;

        let (u, v_t) = match (svd.u, svd.v_t) {
            (Some(u), Some(v_t)) => (u, v_t),
            _ => {
                return Err(CompressionError::ExternalPrimitiveFailure(
                    "singular vectors were not computed".to_string(),
                ));
            }
        };
        let s = svd.singular_values;

        if s.iter().any(|value| !value.is_finite()) {
            return Err(CompressionError::ExternalPrimitiveFailure(
                "non-finite singular value".to_string(),
            ));
        }

        // Re-establish descending order so truncation keeps the dominant components.
        let r = s.len();
        let mut order: Vec<usize> = (0..r).collect();
        order.sort_by(|&a, &b| s[b].total_cmp(&s[a]));

        Ok(SvdFactorization {
            u: DMatrix::from_fn(u.nrows(), r, |i, t| u[(i, order[t])]),
            singular_values: DVector::from_fn(r, |t, _| s[order[t]]),
            v: DMatrix::from_fn(v_t.ncols(), r, |j, t| v_t[(order[t], j)]),
        })
    }
}
