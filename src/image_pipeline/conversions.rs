//! Pipeline conversions module
//!
//! Orchestration of decode -> compress -> encode around the SVD engine.

mod file_compress;


pub use file_compress::FileCompressionPipeline;
