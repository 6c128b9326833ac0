//! Resolution changes around the SVD stage.
//!
//! Both directions go through `image::imageops::resize` with the configured
//! filter. Only the color samples are resampled; alpha never enters the
//! working image and is restored from the caller's input afterwards.

use image::{RgbImage, imageops};
use tracing::debug;

use crate::image_pipeline::common::error::{CompressionError, Result};
use crate::image_pipeline::config::ResampleFilter;
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::raster::types::COLOR_CHANNELS;
use crate::image_pipeline::svd::planner::WorkingDimensions;

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| CompressionError::InvalidImage(format!("dimension {} exceeds u32", value)))
}

fn resample_rgb(
    samples: Vec<u8>,
    from: (usize, usize),
    to: (usize, usize),
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    if from == to {
        return Ok(samples);
    }

    let source = RgbImage::from_raw(to_u32(from.0)?, to_u32(from.1)?, samples).ok_or_else(|| {
        CompressionError::InvalidImage(format!(
            "RGB buffer does not match {}x{}",
            from.0, from.1
        ))
    })?;

    debug!(
        "Resampling {}x{} -> {}x{} ({:?})",
        from.0, from.1, to.0, to.1, filter
    );
    let resized = imageops::resize(&source, to_u32(to.0)?, to_u32(to.1)?, filter.into());
    Ok(resized.into_raw())
}

/// RGB copy of `image` at the working resolution.
pub fn downscale_to_working(
    image: &RasterImage,
    dims: WorkingDimensions,
    filter: ResampleFilter,
) -> Result<RasterImage> {
    let samples = resample_rgb(
        image.color_samples(),
        (image.width, image.height),
        (dims.width, dims.height),
        filter,
    )?;
    RasterImage::new(dims.width, dims.height, COLOR_CHANNELS, samples)
}

/// Brings a working-resolution RGB image back to `width`x`height`.
///
/// When `alpha` is given it is interleaved back in unchanged; it must hold
/// one sample per output pixel.
pub fn restore_resolution(
    working: RasterImage,
    width: usize,
    height: usize,
    alpha: Option<Vec<u8>>,
    filter: ResampleFilter,
) -> Result<RasterImage> {
    let rgb = resample_rgb(working.data, (working.width, working.height), (width, height), filter)?;

    match alpha {
        None => RasterImage::new(width, height, COLOR_CHANNELS, rgb),
        Some(alpha) => {
            if alpha.len() != width * height {
                return Err(CompressionError::InvalidImage(format!(
                    "alpha plane holds {} samples, {}x{} needs {}",
                    alpha.len(),
                    width,
                    height,
                    width * height
                )));
            }
            let data = rgb
                .chunks_exact(COLOR_CHANNELS)
                .zip(alpha)
                .flat_map(|(pixel, a)| [pixel[0], pixel[1], pixel[2], a])
                .collect();
            RasterImage::new(width, height, COLOR_CHANNELS + 1, data)
        }
    }
}
