//! Splitting on a set of single-byte delimiters.
//!
//! Runs of delimiters collapse, and delimiters at either end are skipped, so
//! no token is ever empty. This matches `strtok_r` walking the same input,
//! without writing terminators into the source.

use alloc::vec::Vec;

use crate::{buffer::StrBuf, error::BufferError};

/// Lazy iterator over the tokens of a buffer, borrowed from its content.
///
/// Created by [`StrBuf::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
    delimiters: &'a [u8],
}

impl Tokens<'_> {
    fn is_delimiter(&self, byte: u8) -> bool {
        self.delimiters.contains(&byte)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let all = self.rest;
        let start = all.iter().position(|&b| !self.is_delimiter(b))?;
        let rest = &all[start..];
        let end = rest
            .iter()
            .position(|&b| self.is_delimiter(b))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}

impl StrBuf {
    /// Iterates over the non-empty tokens separated by any byte in
    /// `delimiters`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `delimiters` is empty.
    pub fn tokens<'a>(&'a self, delimiters: &'a [u8]) -> Result<Tokens<'a>, BufferError> {
        if delimiters.is_empty() {
            return Err(BufferError::InvalidArgument("delimiter set is empty"));
        }
        Ok(Tokens {
            rest: self.as_bytes(),
            delimiters,
        })
    }

    /// Splits the content into independently owned buffers, one per
    /// non-empty token, in order. The source is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `delimiters` is empty, or
    /// [`BufferError::Allocation`] if a token buffer cannot be allocated.
    pub fn tokenize(&self, delimiters: &[u8]) -> Result<Vec<StrBuf>, BufferError> {
        let options = self.options();
        let mut out = Vec::new();
        for token in self.tokens(delimiters)? {
            out.try_reserve(1)?;
            out.push(StrBuf::with_options(token, options)?);
        }
        Ok(out)
    }
}
