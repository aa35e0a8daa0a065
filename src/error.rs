//! Error types for Huffman code construction.

use thiserror::Error;

/// Error variants for Huffman operations.
///
/// Tree construction is total over valid non-negative frequency input, so
/// the recoverable surface is small: only byte-stream tallying can fail.
/// Precondition violations (popping an empty queue) are panics, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while tallying an input stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
