use rayon::prelude::*;
use tracing::{debug, info, info_span, instrument};

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::config::CompressionConfig;
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::raster::types::COLOR_CHANNELS;
use crate::image_pipeline::svd::{
    cancel::CancellationToken,
    channels::{extract_channel, write_channel},
    planner::WorkingDimensions,
    primitive::{NalgebraSvd, SvdFactorization, SvdPrimitive},
    rank::validate_rank,
    reconstruct::reconstruct_components,
    resample::{downscale_to_working, restore_resolution},
    stats::CompressionStats,
};

pub struct SvdCompressor<S: SvdPrimitive = NalgebraSvd> {
    primitive: S,
    config: CompressionConfig,
}

impl SvdCompressor<NalgebraSvd> {
    pub fn new(config: CompressionConfig) -> Self {
        Self {
            primitive: NalgebraSvd::default(),
            config,
        }
    }
}

impl<S: SvdPrimitive> SvdCompressor<S> {
    pub fn with_primitive(primitive: S, config: CompressionConfig) -> Self {
        Self { primitive, config }
    }

    pub fn working_dimensions(&self, image: &RasterImage) -> WorkingDimensions {
        WorkingDimensions::plan(image.width, image.height, self.config.cost_cap)
    }

    /// Largest rank a caller can usefully request for `image`.
    pub fn max_rank_for(&self, image: &RasterImage) -> Result<usize> {
        image.validate()?;
        let achievable = self.working_dimensions(image).achievable_rank();
        Ok(self.config.max_rank.min(achievable))
    }

    pub fn compress(&self, image: &RasterImage, k: i64) -> Result<(RasterImage, CompressionStats)> {
        self.compress_with_cancellation(image, k, &CancellationToken::new())
    }

    #[instrument(skip(self, image, token), fields(width = image.width, height = image.height, requested_rank = k))]
    pub fn compress_with_cancellation(
        &self,
        image: &RasterImage,
        k: i64,
        token: &CancellationToken,
    ) -> Result<(RasterImage, CompressionStats)> {
        let requested = validate_rank(k, self.config.max_rank)?;
        image.validate()?;
        token.check()?;

        let dims = self.working_dimensions(image);
        let orientation = dims.orientation();
        let (rows, columns) = dims.matrix_shape();
        info!(
            working_width = dims.width,
            working_height = dims.height,
            rows,
            columns,
            "Starting rank-k compression"
        );

        let working = {
            let _span = info_span!("downscale", downscaled = dims.is_downscaled_from(image.width, image.height)).entered();
            downscale_to_working(image, dims, self.config.resample_filter)?
        };

        let factorizations = {
            let _span = info_span!("factorize").entered();
            self.per_channel(|channel| {
                token.check()?;
                let matrix = extract_channel(&working, channel, orientation);
                let factorization = self.primitive.factorize(&matrix)?;
                if factorization.shape() != (rows, columns) {
                    return Err(CompressionError::ExternalPrimitiveFailure(format!(
                        "channel {} factorization describes a {}x{} matrix, expected {}x{}",
                        channel,
                        factorization.shape().0,
                        factorization.shape().1,
                        rows,
                        columns
                    )));
                }
                Ok(factorization)
            })?
        };

        // One rank for every channel and for the statistics.
        let available = factorizations
            .iter()
            .map(SvdFactorization::rank)
            .min()
            .unwrap_or(0);
        let used_rank = requested.min(available);
        if used_rank < requested {
            debug!(requested, used_rank, "Requested rank exceeds what the channels support");
        }

        let channels = {
            let _span = info_span!("reconstruct", rank = used_rank).entered();
            self.per_channel(|channel| {
                token.check()?;
                Ok(reconstruct_components(&factorizations[channel], used_rank))
            })?
        };
        drop(factorizations);

        let mut reconstructed = RasterImage {
            width: dims.width,
            height: dims.height,
            channels: COLOR_CHANNELS,
            data: vec![0; dims.width * dims.height * COLOR_CHANNELS],
        };
        for (channel, matrix) in channels.iter().enumerate() {
            write_channel(matrix, orientation, channel, &mut reconstructed);
        }

        let restored = {
            let _span = info_span!("restore_resolution").entered();
            restore_resolution(
                reconstructed,
                image.width,
                image.height,
                image.alpha_samples(),
                self.config.resample_filter,
            )?
        };

        let stats = CompressionStats::compute(rows, columns, used_rank);
        info!(
            rank = stats.rank,
            original_samples = stats.original_sample_count,
            compressed_samples = stats.compressed_sample_count,
            ratio = stats.ratio,
            "Compression complete"
        );

        Ok((restored, stats))
    }

    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CompressionConfig) {
        self.config = config;
    }

    fn per_channel<T, F>(&self, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> Result<T> + Sync + Send,
    {
        if self.config.parallel_channels {
            (0..COLOR_CHANNELS).into_par_iter().map(f).collect()
        } else {
            (0..COLOR_CHANNELS).map(f).collect()
        }
    }
}
