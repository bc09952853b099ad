//! Owned, growable, null-terminated byte storage.
//!
//! `StrBuf` keeps its content in a `Vec<u8>` whose last element is always the
//! zero terminator while storage is held:
//!
//! ```text
//!  data:  [ c0 c1 ... c(len-1) 0 | unused ... ]
//!          \_______ len ______/    \__ capacity - len - 1 __/
//! ```
//!
//! `capacity` is tracked separately from the vector's own capacity so that
//! the growth policy is deterministic: it starts at
//! `max(len + 1, min_capacity)` and doubles (clamped up to the pending write)
//! whenever a write would not fit. All reservations happen before any byte is
//! touched, so a failed operation leaves the buffer exactly as it was.
//!
//! A released buffer holds no storage at all; it reports `len() == 0` and
//! `capacity() == 0`, and the next growing write allocates again.

use alloc::vec::Vec;
use core::{
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};

use bstr::BStr;
use log::trace;

use crate::{
    error::BufferError,
    options::{BufferOptions, SMALL_BUFFER_MINIMUM},
};

/// A growable, owned byte string that is always null-terminated.
pub struct StrBuf {
    /// Content followed by the terminator, or empty once released.
    data: Vec<u8>,
    /// Logical allocated size, terminator slot included.
    capacity: usize,
    min_capacity: usize,
}

impl StrBuf {
    /// Creates an empty buffer with [`SMALL_BUFFER_MINIMUM`] capacity.
    ///
    /// Aborts on allocation failure, like `Vec::with_capacity`. Use
    /// [`StrBuf::try_from_bytes`] to observe the failure instead.
    #[must_use]
    pub fn new() -> Self {
        Self::from_bytes_infallible(&[], SMALL_BUFFER_MINIMUM)
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained. No
    /// buffer is produced in that case.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, BufferError> {
        Self::with_options(bytes, BufferOptions::default())
    }

    /// Creates a buffer holding a copy of `bytes`, growing per `options`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if storage cannot be obtained.
    pub fn with_options(bytes: &[u8], options: BufferOptions) -> Result<Self, BufferError> {
        let min_capacity = options.effective_min_capacity();
        let capacity = initial_capacity(bytes.len(), min_capacity);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.extend_from_slice(bytes);
        data.push(0);
        Ok(Self {
            data,
            capacity,
            min_capacity,
        })
    }

    fn from_bytes_infallible(bytes: &[u8], min_capacity: usize) -> Self {
        let capacity = initial_capacity(bytes.len(), min_capacity);
        let mut data = Vec::with_capacity(capacity);
        data.extend_from_slice(bytes);
        data.push(0);
        Self {
            data,
            capacity,
            min_capacity,
        }
    }

    /// Number of content bytes, terminator excluded.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    /// Returns `true` if the buffer holds no content bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated size in bytes, terminator slot included. Zero once released.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if [`StrBuf::release`] has freed the storage and nothing
    /// has been written since.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.data.is_empty()
    }

    /// The content bytes, without the terminator.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self.data.split_last() {
            Some((_, content)) => content,
            None => &[],
        }
    }

    /// The content bytes as a [`BStr`], for display and byte-string helpers.
    #[inline]
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// The content bytes followed by the zero terminator.
    ///
    /// A released buffer yields a lone terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.data.is_empty() {
            b"\0"
        } else {
            &self.data
        }
    }

    /// Views the buffer as a C string.
    ///
    /// Returns `None` if the content contains an interior zero byte.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).ok()
    }

    /// Consumes the buffer, returning the content without the terminator.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.pop();
        self.data
    }

    /// Returns the byte at `index`, or `None` if `index >= len()`.
    #[inline]
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Frees the storage and resets length and capacity to zero.
    ///
    /// Calling this on an already released buffer does nothing. Dropping a
    /// buffer releases it implicitly.
    pub fn release(&mut self) {
        if self.is_released() {
            return;
        }
        trace!("releasing buffer of capacity {}", self.capacity);
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Appends `bytes` after the current content.
    ///
    /// Appending an empty slice is a no-op. A buffer cannot be appended to
    /// itself directly; copy the content first.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails; the buffer is
    /// left unchanged.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let len = self.len();
        self.reserve_for(len.saturating_add(bytes.len()))?;
        self.data.truncate(len);
        self.data.extend_from_slice(bytes);
        self.data.push(0);
        Ok(())
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails; the buffer is
    /// left unchanged.
    pub fn append_char(&mut self, byte: u8) -> Result<(), BufferError> {
        let len = self.len();
        self.reserve_for(len.saturating_add(1))?;
        self.data[len] = byte;
        self.data.push(0);
        Ok(())
    }

    /// Appends the content of another buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails.
    pub fn append(&mut self, other: &StrBuf) -> Result<(), BufferError> {
        self.append_bytes(other.as_bytes())
    }

    /// Inserts `bytes` before the current content.
    ///
    /// The whole content and its terminator move right by `bytes.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails; the buffer is
    /// left unchanged.
    pub fn prepend_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.reserve_for(self.len().saturating_add(bytes.len()))?;
        self.data.splice(0..0, bytes.iter().copied());
        Ok(())
    }

    /// Sets the length to `new_len`.
    ///
    /// Growing exposes zero bytes and may reallocate. Shrinking only moves the
    /// terminator; capacity never decreases.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails; the buffer is
    /// left unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), BufferError> {
        self.reserve_for(new_len)?;
        self.data.truncate(new_len);
        self.data.resize(new_len + 1, 0);
        Ok(())
    }

    /// Shortens the content to `new_len` bytes. Does nothing if the buffer
    /// is already that short.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            self.data.truncate(new_len);
            self.data.push(0);
        }
    }

    /// Empties the content while keeping the storage.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Replaces the content with a copy of `src`'s content.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Allocation`] if growing fails; the buffer is
    /// left unchanged.
    pub fn copy_from(&mut self, src: &StrBuf) -> Result<(), BufferError> {
        self.reserve_for(src.len())?;
        self.data.clear();
        self.data.extend_from_slice(src.as_bytes());
        self.data.push(0);
        Ok(())
    }

    /// Content plus terminator, for in-place shifts that must carry the
    /// terminator along.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn options(&self) -> BufferOptions {
        BufferOptions {
            min_capacity: self.min_capacity,
            ..BufferOptions::default()
        }
    }

    /// Ensures storage for `new_len` content bytes plus the terminator.
    ///
    /// On return the buffer holds storage (a released buffer is revived as
    /// empty) and no later push up to `new_len + 1` bytes reallocates.
    fn reserve_for(&mut self, new_len: usize) -> Result<(), BufferError> {
        let required = new_len.saturating_add(1);
        if required <= self.capacity {
            return Ok(());
        }
        let target = self
            .capacity
            .saturating_mul(2)
            .max(required)
            .max(self.min_capacity);
        self.data.try_reserve_exact(target - self.data.len())?;
        trace!("growing buffer capacity {} -> {}", self.capacity, target);
        self.capacity = target;
        if self.data.is_empty() {
            self.data.push(0);
        }
        Ok(())
    }
}

fn initial_capacity(len: usize, min_capacity: usize) -> usize {
    len.saturating_add(1).max(min_capacity)
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StrBuf {
    fn clone(&self) -> Self {
        if self.is_released() {
            return Self {
                data: Vec::new(),
                capacity: 0,
                min_capacity: self.min_capacity,
            };
        }
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            min_capacity: self.min_capacity,
        }
    }
}

impl From<&[u8]> for StrBuf {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes_infallible(bytes, SMALL_BUFFER_MINIMUM)
    }
}

impl<const N: usize> From<&[u8; N]> for StrBuf {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from(bytes.as_slice())
    }
}

impl From<&str> for StrBuf {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

/// Appends each byte through [`StrBuf::append_char`], so the usual doubling
/// applies.
///
/// # Panics
///
/// Panics if the buffer cannot grow, as `Vec` does.
impl Extend<u8> for StrBuf {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            if let Err(err) = self.append_char(byte) {
                panic!("cannot extend buffer of {} bytes: {err}", self.len());
            }
        }
    }
}

impl<'a> Extend<&'a u8> for StrBuf {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<u8> for StrBuf {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl AsRef<[u8]> for StrBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Hash for StrBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrBuf")
            .field("data", &self.as_bstr())
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}
