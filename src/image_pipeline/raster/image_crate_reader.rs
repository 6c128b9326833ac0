//! Raster reader backed by the `image` crate.
//!
//! Decodes any format enabled on the `image` dependency (PNG, JPEG, TIFF,
//! BMP) into an 8-bit RGB or RGBA buffer. Images carrying an alpha channel
//! keep it; everything else is normalized to RGB.

use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::raster::reader::RasterReader;
use crate::image_pipeline::raster::types::RasterImage;

pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| CompressionError::DecodeError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        let has_alpha = decoded.color().has_alpha();

        debug!("Decoded image: {}x{} ({:?})", width, height, decoded.color());

        let (channels, samples) = if has_alpha {
            (4, decoded.to_rgba8().into_raw())
        } else {
            (3, decoded.to_rgb8().into_raw())
        };

        RasterImage::new(width, height, channels, samples)
    }
}
