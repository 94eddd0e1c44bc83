//! Error types for input generation.

use thiserror::Error;

/// Result type for input generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any generation happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Requested size is below the minimum of one element/node.
    #[error("invalid input size {size}: must be at least 1")]
    InvalidSize { size: usize },

    /// Shape name did not match any known array shape.
    #[error("unknown input shape: {0}")]
    UnknownShape(String),
}
