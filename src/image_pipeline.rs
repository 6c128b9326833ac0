//! Image processing pipeline module
//!
//! Rank-k SVD image compression: the engine lives in [`svd`], decoding in
//! [`raster`], output writers in [`encode`] and file-level orchestration in
//! [`conversions`].

pub mod common;
pub mod config;
pub mod raster;
pub mod svd;
pub mod encode;
pub mod conversions;

pub use common::{
    CompressionError,
    Result,
};

pub use config::{
    CompressionConfig,
    CompressionConfigBuilder,
    ResampleFilter,
    TiffCompression,
};

pub use raster::{
    RasterImage,
    RasterReader,
    ImageCrateReader,
};

pub use svd::{
    CancellationToken,
    CompressionStats,
    SvdCompressor,
    SvdPrimitive,
    NalgebraSvd,
    WorkingDimensions,
    compress,
};

pub use encode::{
    RasterWriter,
    StandardTiffWriter,
    ImageFormatWriter,
};

pub use conversions::{
    FileCompressionPipeline,
};
