//! Output encoding module
//!
//! Writers that turn a reconstructed raster into file bytes.

mod writer;
mod standard_tiff_writer;
mod image_format_writer;

pub use writer::RasterWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use image_format_writer::ImageFormatWriter;
