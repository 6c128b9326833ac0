use std::io::{Cursor, Write};
use tiff::encoder::{Compression, TiffEncoder, colortype, compression::DeflateLevel};
use tiff::tags::Predictor;
use tracing::debug;
use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::config::{CompressionConfig, TiffCompression};
use crate::image_pipeline::encode::writer::{RasterWriter, encoder_dimensions};
use crate::image_pipeline::raster::types::RasterImage;

pub struct StandardTiffWriter;

impl RasterWriter for StandardTiffWriter {
    fn write_raster(&self, image: &RasterImage, output: &mut dyn Write, config: &CompressionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}x{}", image.width, image.height, image.channels);

        let (width, height) = encoder_dimensions(image)?;
        let mut buffer = Vec::new();

        let compression = match config.tiff_compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        {
            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
                .map_err(|e| CompressionError::EncodeError(e.to_string()))?
                .with_compression(compression);

            if let Some(predictor_val) = config.predictor {
                let predictor = match predictor_val {
                    2 => Predictor::Horizontal,
                    _ => Predictor::None,
                };
                encoder = encoder.with_predictor(predictor);
            }

            let written = match image.channels {
                3 => encoder.write_image::<colortype::RGB8>(width, height, &image.data),
                4 => encoder.write_image::<colortype::RGBA8>(width, height, &image.data),
                n => {
                    return Err(CompressionError::EncodeError(format!(
                        "cannot write {} samples per pixel as TIFF",
                        n
                    )));
                }
            };
            written.map_err(|e| CompressionError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
