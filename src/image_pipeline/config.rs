//! Compression configuration types

use image::imageops::FilterType;

use crate::image_pipeline::svd::{DEFAULT_COST_CAP, DEFAULT_MAX_RANK};

/// Filter used when moving between original and working resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleFilter {
    /// Nearest neighbour (blocky, cheapest)
    Nearest,
    /// Bilinear interpolation (default)
    Bilinear,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
        }
    }
}

/// TIFF compression methods for [`StandardTiffWriter`](crate::image_pipeline::StandardTiffWriter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for rank-k compression
#[derive(Debug, Clone)]
pub struct CompressionConfig {
    /// Longest side of the working resolution the SVD runs at
    pub cost_cap: usize,
    /// Upper bound of the caller-facing rank parameter
    pub max_rank: usize,
    /// Filter for the downscale and the restore step
    pub resample_filter: ResampleFilter,
    /// Process the three color channels on the rayon pool
    pub parallel_channels: bool,
    /// Compression used when the output is written as TIFF
    pub tiff_compression: TiffCompression,
    /// TIFF predictor (2 for horizontal differencing), None to disable
    pub predictor: Option<u16>,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            cost_cap: DEFAULT_COST_CAP,
            max_rank: DEFAULT_MAX_RANK,
            resample_filter: ResampleFilter::Bilinear,
            parallel_channels: true,
            tiff_compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl CompressionConfig {
    pub fn builder() -> CompressionConfigBuilder {
        CompressionConfigBuilder::default()
    }
}

/// Builder for CompressionConfig
#[derive(Default)]
pub struct CompressionConfigBuilder {
    cost_cap: Option<usize>,
    max_rank: Option<usize>,
    resample_filter: Option<ResampleFilter>,
    parallel_channels: Option<bool>,
    tiff_compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl CompressionConfigBuilder {
    pub fn cost_cap(mut self, cap: usize) -> Self {
        self.cost_cap = Some(cap);
        self
    }

    pub fn max_rank(mut self, max: usize) -> Self {
        self.max_rank = Some(max);
        self
    }

    pub fn resample_filter(mut self, filter: ResampleFilter) -> Self {
        self.resample_filter = Some(filter);
        self
    }

    pub fn parallel_channels(mut self, enable: bool) -> Self {
        self.parallel_channels = Some(enable);
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> CompressionConfig {
        let default = CompressionConfig::default();
        CompressionConfig {
            cost_cap: self.cost_cap.unwrap_or(default.cost_cap).max(1),
            max_rank: self.max_rank.unwrap_or(default.max_rank).max(1),
            resample_filter: self.resample_filter.unwrap_or(default.resample_filter),
            parallel_channels: self.parallel_channels.unwrap_or(default.parallel_channels),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
