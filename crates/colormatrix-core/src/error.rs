//! Error types for colormatrix

use thiserror::Error;

/// Result type for colormatrix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the raw-data entry points
///
/// Matrix composition and pixel transforms never fail; only the interop
/// helpers that accept untyped slices or indices can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Channel index outside 0..4
    #[error("Invalid channel index: {0}")]
    ChannelIndex(usize),
}
