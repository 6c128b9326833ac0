use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid rank {requested}: must be between 1 and {max}")]
    InvalidRank { requested: i64, max: usize },

    #[error("SVD factorization failed: {0}")]
    ExternalPrimitiveFailure(String),

    #[error("Compression was cancelled")]
    Cancelled,

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
