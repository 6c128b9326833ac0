use std::io::Write;
use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::config::CompressionConfig;
use crate::image_pipeline::raster::types::RasterImage;

pub trait RasterWriter {
    fn write_raster(&self, image: &RasterImage, output: &mut dyn Write, config: &CompressionConfig) -> Result<()>;
}

/// Dimensions for an encoder, failing instead of truncating oversized images.
pub(crate) fn encoder_dimensions(image: &RasterImage) -> Result<(u32, u32)> {
    image.dimensions_u32().ok_or_else(|| {
        CompressionError::EncodeError(format!(
            "{}x{} exceeds the dimensions an encoder accepts",
            image.width, image.height
        ))
    })
}
