//! A growable, owned byte string that stays null-terminated.
//!
//! [`StrBuf`] tracks its length and capacity explicitly, doubles its storage
//! when a write would not fit, and always keeps a zero byte after the content
//! so it can be handed to consumers that expect C strings. Content is treated
//! as raw bytes; no operation assumes UTF-8.
//!
//! ```rust
//! use strbuf::StrBuf;
//!
//! let mut buf = StrBuf::from("  Hello, World!  ");
//! buf.trim();
//! assert_eq!(buf.find(b"World"), Some(7));
//!
//! let replaced = buf.replace_first(b"World", b"Universe").unwrap().unwrap();
//! assert_eq!(replaced, "Hello, Universe!");
//!
//! let words = replaced.tokenize(b" ,!").unwrap();
//! assert_eq!(words.len(), 2);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod buffer;
mod error;
#[cfg(feature = "std")]
mod file;
mod options;
mod replace;
mod search;
#[cfg(feature = "serde")]
mod serde_impl;
mod tokenize;
mod trim;

#[cfg(test)]
mod tests;

pub use buffer::StrBuf;
pub use error::BufferError;
pub use options::{BufferOptions, DEFAULT_READ_CHUNK_SIZE, SMALL_BUFFER_MINIMUM, WriteMode};
pub use tokenize::Tokens;
