use crate::{buffer::StrBuf, error::BufferError};

impl StrBuf {
    /// Builds a new buffer with the first occurrence of `old` replaced by
    /// `new`.
    ///
    /// Returns `Ok(None)` when `old` does not occur. The source buffer is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `old` is empty, or
    /// [`BufferError::Allocation`] if the result cannot be allocated.
    pub fn replace_first(&self, old: &[u8], new: &[u8]) -> Result<Option<StrBuf>, BufferError> {
        if old.is_empty() {
            return Err(BufferError::InvalidArgument("pattern to replace is empty"));
        }
        let Some(at) = self.find(old) else {
            return Ok(None);
        };
        let (before, matched_and_after) = self.as_bytes().split_at(at);
        let after = &matched_and_after[old.len()..];

        let mut out = StrBuf::with_options(before, self.options())?;
        out.append_bytes(new)?;
        out.append_bytes(after)?;
        Ok(Some(out))
    }
}
