//! Error types shared by the codec, the image boundary and the config layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CipherError>;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The payload row cannot hold the text plus its terminator.
    #[error("text is too long to be embedded: {len} chars, capacity {capacity}")]
    TextTooLong { len: usize, capacity: usize },

    /// The last row carries no payload bytes.
    #[error("no embedded text found")]
    NoPayload,

    /// The supplied bytes could not be parsed into a pixel buffer.
    #[error("failed to decode image: {0}")]
    DecodeFailure(String),

    /// The container format cannot preserve 8-bit alpha exactly.
    #[error("unsupported image format {0}: the payload needs a lossless RGBA container")]
    UnsupportedFormat(String),

    #[error("pixel data has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSizeMismatch { width: u32, height: u32, expected: usize, actual: usize },

    #[error("pixel buffer must have non-zero width and height")]
    EmptyBuffer,

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error("failed to encode image: {0}")]
    EncodeFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    SessionEncode(#[from] bincode::error::EncodeError),

    #[error(transparent)]
    SessionDecode(#[from] bincode::error::DecodeError),
}
