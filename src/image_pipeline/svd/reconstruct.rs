use nalgebra::DMatrix;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::svd::channels::ChannelMatrix;
use crate::image_pipeline::svd::primitive::{SvdFactorization, SvdPrimitive};

/// Rebuilds a channel from the first `k` components of `factorization`.
///
/// `k` is clamped to `[1, rank]`. Every cell is clamped to `[0, 255]` and
/// rounded, so the result is ready to be written back as 8-bit samples. A
/// factorization without components yields an all-zero matrix.
pub fn reconstruct_from_factorization(factorization: &SvdFactorization, k: usize) -> ChannelMatrix {
    let rank = factorization.rank();
    let used = if rank == 0 { 0 } else { k.clamp(1, rank) };
    reconstruct_components(factorization, used)
}

/// Sums exactly `used` leading components; `used` must not exceed the rank.
/// Zero components give an all-zero matrix.
pub(crate) fn reconstruct_components(factorization: &SvdFactorization, used: usize) -> ChannelMatrix {
    let (rows, columns) = factorization.shape();
    debug_assert!(used <= factorization.rank());

    if used == 0 {
        return DMatrix::zeros(rows, columns);
    }

    let weighted = DMatrix::from_fn(rows, used, |i, t| {
        factorization.u[(i, t)] * factorization.singular_values[t]
    });
    let approximation = &weighted * factorization.v.columns(0, used).transpose();

    approximation.map(|value| value.clamp(0.0, 255.0).round())
}

/// Factorizes `matrix` and returns its rank-`k` reconstruction.
pub fn reconstruct_rank_k(
    matrix: &ChannelMatrix,
    k: usize,
    primitive: &dyn SvdPrimitive,
) -> Result<ChannelMatrix> {
    let factorization = primitive.factorize(matrix)?;
    Ok(reconstruct_from_factorization(&factorization, k))
}
