//! Writer for the formats supported by the `image` crate (PNG, JPEG, BMP, ...).

use std::io::{Cursor, Write};
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::config::CompressionConfig;
use crate::image_pipeline::encode::writer::{RasterWriter, encoder_dimensions};
use crate::image_pipeline::raster::types::RasterImage;

pub struct ImageFormatWriter {
    format: ImageFormat,
}

impl ImageFormatWriter {
    pub fn new(format: ImageFormat) -> Self {
        Self { format }
    }

    /// Picks the format from the extension of `path`.
    pub fn for_path(path: &Path) -> Result<Self> {
        ImageFormat::from_path(path)
            .map(Self::new)
            .map_err(|e| CompressionError::EncodeError(format!("{}: {}", path.display(), e)))
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl RasterWriter for ImageFormatWriter {
    fn write_raster(&self, image: &RasterImage, output: &mut dyn Write, _config: &CompressionConfig) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", self.format, image.width, image.height);

        let color = match image.channels {
            3 => ExtendedColorType::Rgb8,
            4 => ExtendedColorType::Rgba8,
            n => {
                return Err(CompressionError::EncodeError(format!(
                    "cannot write {} samples per pixel",
                    n
                )));
            }
        };

        let (width, height) = encoder_dimensions(image)?;
        let mut buffer = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut buffer,
            &image.data,
            width,
            height,
            color,
            self.format,
        )
        .map_err(|e| CompressionError::EncodeError(e.to_string()))?;

        output.write_all(buffer.get_ref())?;
        Ok(())
    }
}
