use crate::image_pipeline::raster::types::COLOR_CHANNELS;

/// Storage needed by the raw channel matrices versus their rank-k factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    /// Rows of each channel matrix (tall convention)
    pub rows: usize,
    /// Columns of each channel matrix
    pub columns: usize,
    /// Rank actually used for every channel
    pub rank: usize,
    /// `3 * rows * columns`
    pub original_sample_count: usize,
    /// `3 * rank * (rows + columns + 1)`
    pub compressed_sample_count: usize,
    /// `original / compressed`
    pub ratio: f64,
}

impl CompressionStats {
    pub fn compute(rows: usize, columns: usize, rank: usize) -> Self {
        let original_sample_count = COLOR_CHANNELS * rows * columns;
        let compressed_sample_count = COLOR_CHANNELS * rank * (rows + columns + 1);
        let ratio = if compressed_sample_count == 0 {
            f64::INFINITY
        } else {
            original_sample_count as f64 / compressed_sample_count as f64
        };

        Self {
            rows,
            columns,
            rank,
            original_sample_count,
            compressed_sample_count,
            ratio,
        }
    }

    /// Percentage of samples saved; negative when the factors are larger than the image.
    pub fn space_saved_percent(&self) -> f64 {
        if self.original_sample_count == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_sample_count as f64 / self.original_sample_count as f64) * 100.0
    }
}
