//! Channel matrix extraction
//!
//! Each color channel becomes a dense `f64` matrix. The matrix is always
//! tall (rows >= columns): wide images are laid out transposed, one matrix
//! row per pixel column.

use nalgebra::DMatrix;

use crate::image_pipeline::raster::RasterImage;

pub type ChannelMatrix = DMatrix<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Row `i` is scanline `y = i`; used when the image is at least as tall as it is wide.
    Upright,
    /// Row `i` is pixel column `x = i`; used for wide images.
    Transposed,
}

impl Orientation {
    pub fn for_dimensions(width: usize, height: usize) -> Self {
        if height < width {
            Orientation::Transposed
        } else {
            Orientation::Upright
        }
    }

    pub fn matrix_shape(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Orientation::Upright => (height, width),
            Orientation::Transposed => (width, height),
        }
    }

    /// Maps a matrix cell back to the `(x, y)` pixel it came from.
    #[inline]
    pub fn pixel_at(self, row: usize, column: usize) -> (usize, usize) {
        match self {
            Orientation::Upright => (column, row),
            Orientation::Transposed => (row, column),
        }
    }
}

pub fn extract_channel(image: &RasterImage, channel: usize, orientation: Orientation) -> ChannelMatrix {
    let (rows, columns) = orientation.matrix_shape(image.width, image.height);
    DMatrix::from_fn(rows, columns, |i, j| {
        let (x, y) = orientation.pixel_at(i, j);
        f64::from(image.sample(x, y, channel))
    })
}

/// Writes a reconstructed channel back into `image`. Values are expected to be
/// clamped and rounded already; the cast saturates anything that is not.
pub fn write_channel(
    matrix: &ChannelMatrix,
    orientation: Orientation,
    channel: usize,
    image: &mut RasterImage,
) {
    debug_assert_eq!(
        (matrix.nrows(), matrix.ncols()),
        orientation.matrix_shape(image.width, image.height)
    );

    let width = image.width;
    let channels = image.channels;
    for (j, column) in matrix.column_iter().enumerate() {
        for (i, value) in column.iter().enumerate() {
            let (x, y) = orientation.pixel_at(i, j);
            image.data[(y * width + x) * channels + channel] = *value as u8;
        }
    }
}
