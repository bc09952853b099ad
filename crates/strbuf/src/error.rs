use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by [`StrBuf`](crate::StrBuf) operations.
///
/// A search or replace that finds nothing is not an error; those operations
/// return `None` instead.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Storage could not be obtained, or the requested capacity overflowed.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// A required argument was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Opening, reading or writing a file failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BufferError {
    /// Returns `true` for [`BufferError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
