//! Raster image module
//!
//! The decoded pixel buffer the engine works on, plus the reader seam used
//! to obtain one from encoded bytes.

mod reader;
mod image_crate_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::RasterImage;
