//! Raster image types

use crate::image_pipeline::common::error::{CompressionError, Result};

/// Number of color channels that take part in compression.
pub const COLOR_CHANNELS: usize = 3;

/// Decoded 8-bit raster, row-major and interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples per pixel: 3 for RGB, 4 for RGBA
    pub channels: usize,
    /// Pixel data interleaved [R, G, B, (A), R, G, B, (A), ...]
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let image = Self {
            width,
            height,
            channels,
            data,
        };
        image.validate()?;
        Ok(image)
    }

    /// Builds an RGB image from a per-pixel function, mostly useful for synthetic inputs.
    pub fn from_fn_rgb(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * COLOR_CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            channels: COLOR_CHANNELS,
            data,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CompressionError::InvalidImage(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.channels != 3 && self.channels != 4 {
            return Err(CompressionError::InvalidImage(format!(
                "expected 3 or 4 samples per pixel, got {}",
                self.channels
            )));
        }

        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|pixels| pixels.checked_mul(self.channels))
            .ok_or_else(|| {
                CompressionError::InvalidImage(format!(
                    "dimensions {}x{} overflow the addressable buffer size",
                    self.width, self.height
                ))
            })?;

        if self.data.len() != expected {
            return Err(CompressionError::InvalidImage(format!(
                "buffer holds {} samples, {}x{}x{} needs {}",
                self.data.len(),
                self.width,
                self.height,
                self.channels,
                expected
            )));
        }

        Ok(())
    }

    /// Width and height as the `u32` codecs expect, `None` if either does not fit.
    pub fn dimensions_u32(&self) -> Option<(u32, u32)> {
        Some((u32::try_from(self.width).ok()?, u32::try_from(self.height).ok()?))
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[(y * self.width + x) * self.channels + channel]
    }

    /// Copies the color samples out, dropping alpha if present.
    pub fn color_samples(&self) -> Vec<u8> {
        if !self.has_alpha() {
            return self.data.clone();
        }
        self.data
            .chunks_exact(self.channels)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }

    pub fn alpha_samples(&self) -> Option<Vec<u8>> {
        self.has_alpha()
            .then(|| self.data.chunks_exact(self.channels).map(|pixel| pixel[3]).collect())
    }
}
