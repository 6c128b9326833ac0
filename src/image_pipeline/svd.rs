//! Rank-k SVD compression engine
//!
//! Working-resolution planning, per-channel matrix extraction, truncated SVD
//! reconstruction, resolution restoration and storage statistics, sequenced
//! by [`SvdCompressor`].

mod planner;
mod channels;
mod primitive;
mod reconstruct;
mod resample;
mod stats;
mod cancel;
mod rank;
mod compressor;


pub use planner::{DEFAULT_COST_CAP, WorkingDimensions};
pub use channels::{ChannelMatrix, Orientation, extract_channel, write_channel};
pub use primitive::{NalgebraSvd, SvdFactorization, SvdPrimitive};
pub use reconstruct::{reconstruct_from_factorization, reconstruct_rank_k};
pub use resample::{downscale_to_working, restore_resolution};
pub use stats::CompressionStats;
pub use cancel::CancellationToken;
pub use rank::{DEFAULT_MAX_RANK, validate_rank};
pub use compressor::SvdCompressor;

use crate::image_pipeline::{CompressionConfig, RasterImage, Result};

/// Compresses `image` at rank `k` with the default configuration.
pub fn compress(image: &RasterImage, k: i64) -> Result<(RasterImage, CompressionStats)> {
    SvdCompressor::new(CompressionConfig::default()).compress(image, k)
}
