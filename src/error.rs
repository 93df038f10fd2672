//! Crate-level error type and `Result` alias.
//!
//! Every transform validates its inputs up front and fails with one of the
//! invalid-input variants; the remaining variants wrap failures reported by
//! the numeric backends (resizer, ndarray shape checks).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an image or parameter the transform cannot accept.
    InvalidInput,
    /// A backend primitive failed on otherwise valid input.
    Backend,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Image must have at least one pixel in each dimension, got {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    #[error("{operation} does not support images with {channels} channel(s)")]
    UnsupportedChannels {
        operation: &'static str,
        channels: usize,
    },

    #[error("Block size must be greater than 0, got: {block_size}")]
    InvalidBlockSize { block_size: usize },

    #[error("Blend weight must lie in [0, 1], got: {alpha}")]
    AlphaOutOfRange { alpha: f32 },

    #[error("Channel counts differ: {left} vs {right}")]
    ChannelMismatch { left: usize, right: usize },

    #[error("Image shapes differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },

    #[error("Invalid parameter: {name}={value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Blending needs a second image")]
    MissingSecondImage,

    #[error("Buffer of {len} bytes does not match {width}x{height}x{channels}")]
    BufferSize {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Resize(_) | Error::Shape(_) => ErrorKind::Backend,
            _ => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn parameter<V: std::fmt::Display>(name: &'static str, value: V) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    pub(crate) fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
