//! Error types for blocking buffer operations.

use std::io;

/// Result type alias for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;

/// Buffer operation error.
///
/// Every variant is returned synchronously to the caller of the offending
/// operation. The buffer itself never retries or swallows them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// The write does not fit in the remaining capacity. Nothing was written.
    #[error("buffer overflow: {requested} bytes requested, {available} available")]
    Overflow { requested: usize, available: usize },

    /// The buffer has been closed and accepts no more writes.
    #[error("buffer closed")]
    Closed,

    /// The buffer is closed and every buffered byte has been read.
    #[error("end of stream")]
    EndOfStream,
}

impl BufferError {
    /// Returns true if retrying the same operation later may succeed.
    ///
    /// Only [`BufferError::Overflow`] is transient; the other variants
    /// describe a buffer that is permanently closed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BufferError::Overflow { .. })
    }
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Closed => io::Error::new(io::ErrorKind::BrokenPipe, err),
            BufferError::EndOfStream => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            BufferError::Overflow { .. } => io::Error::other(err),
        }
    }
}
