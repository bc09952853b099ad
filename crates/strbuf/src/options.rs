/// Smallest capacity a buffer is ever allocated with, terminator included.
pub const SMALL_BUFFER_MINIMUM: usize = 16;

/// Default size of each read issued by [`StrBuf::read_file`](crate::StrBuf::read_file).
pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

/// Tuning knobs for buffer growth and file ingestion.
///
/// # Examples
///
/// ```rust
/// use strbuf::{BufferOptions, StrBuf};
///
/// let options = BufferOptions {
///     min_capacity: 64,
///     ..Default::default()
/// };
/// let buf = StrBuf::with_options(b"abc", options).unwrap();
/// assert_eq!(buf.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Lower bound for the capacity chosen at construction and on every
    /// reallocation.
    ///
    /// A buffer created from `n` bytes starts with a capacity of
    /// `max(n + 1, min_capacity)`. Values below `1` are treated as `1` so
    /// that the terminator always has a slot.
    ///
    /// # Default
    ///
    /// [`SMALL_BUFFER_MINIMUM`] (16)
    pub min_capacity: usize,

    /// Number of bytes requested per `read` call when ingesting a file.
    ///
    /// Each chunk goes through the ordinary append path, so the buffer grows
    /// by doubling regardless of this value. A value of `0` is treated as
    /// [`DEFAULT_READ_CHUNK_SIZE`].
    ///
    /// # Default
    ///
    /// [`DEFAULT_READ_CHUNK_SIZE`] (4096)
    pub read_chunk_size: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            min_capacity: SMALL_BUFFER_MINIMUM,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl BufferOptions {
    pub(crate) fn effective_min_capacity(&self) -> usize {
        self.min_capacity.max(1)
    }

    #[cfg(feature = "std")]
    pub(crate) fn effective_read_chunk_size(&self) -> usize {
        if self.read_chunk_size == 0 {
            DEFAULT_READ_CHUNK_SIZE
        } else {
            self.read_chunk_size
        }
    }
}

/// How [`StrBuf::write_file`](crate::StrBuf::write_file) opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create the file if needed and discard any previous content.
    #[default]
    Truncate,
    /// Create the file if needed and write after any existing content.
    Append,
}
