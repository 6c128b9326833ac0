//! Common utilities module
//!
//! Shared error type and result alias for the whole pipeline.

pub mod error;

pub use error::{CompressionError, Result};
