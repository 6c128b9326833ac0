use crate::image_pipeline::common::error::{CompressionError, Result};

/// Default upper bound for the caller-facing rank parameter.
pub const DEFAULT_MAX_RANK: usize = 100;

/// Checks a requested rank against `[1, max]`.
pub fn validate_rank(requested: i64, max: usize) -> Result<usize> {
    match usize::try_from(requested) {
        Ok(k) if (1..=max).contains(&k) => Ok(k),
        _ => Err(CompressionError::InvalidRank { requested, max }),
    }
}
