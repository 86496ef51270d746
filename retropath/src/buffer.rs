//! Fixed-capacity path buffers.
//!
//! Every composing operation in this crate writes into a [`PathBuffer`]
//! declared by the caller. A buffer's capacity counts bytes *including* a
//! terminator byte, so a buffer of capacity `n` holds at most `n - 1` bytes of
//! path text. A write either fits completely or fails with
//! [`Error::BufferTooSmall`], leaving the buffer empty.

use std::fmt;

use crate::error::{Error, Result};

/// Default capacity agreed on for path buffers.
pub const PATH_MAX_LENGTH: usize = 4096;

/// A caller-owned destination for composed paths.
///
/// # Examples
///
/// ```
/// use retropath::PathBuffer;
///
/// let mut buf = PathBuffer::new(9);
/// buf.compose(&["/usr", "/lib"]).unwrap();
/// assert_eq!(buf.as_str(), "/usr/lib");
///
/// // 8 bytes of text plus the terminator do not fit in 8.
/// let mut small = PathBuffer::new(8);
/// assert!(small.compose(&["/usr", "/lib"]).is_err());
/// assert!(small.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuffer {
    text: String,
    capacity: usize,
}

impl PathBuffer {
    /// Create an empty buffer with the given capacity (terminator included).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Declared capacity in bytes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the buffer holds an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the buffer, returning its contents.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Check whether `len` bytes of text fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `len + 1 > capacity`.
    pub const fn check_fits(&self, len: usize) -> Result<()> {
        let required = len + 1;
        if required > self.capacity {
            return Err(Error::BufferTooSmall {
                required,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Replace the contents with the concatenation of `parts`.
    ///
    /// The total length is checked before anything is written, so a failing
    /// call leaves the buffer empty rather than holding a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if the concatenation does not fit.
    pub fn compose(&mut self, parts: &[&str]) -> Result<()> {
        self.text.clear();
        let len = parts.iter().map(|p| p.len()).sum();
        self.check_fits(len)?;
        self.text.reserve(len);
        for part in parts {
            self.text.push_str(part);
        }
        Ok(())
    }

    /// Replace the contents with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `value` does not fit.
    pub fn set(&mut self, value: &str) -> Result<()> {
        self.compose(&[value])
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new(PATH_MAX_LENGTH)
    }
}

impl fmt::Display for PathBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for PathBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let buf = PathBuffer::new(16);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(PathBuffer::default().capacity(), PATH_MAX_LENGTH);
    }

    #[test]
    fn test_compose_fits_exactly() {
        // 4 bytes of text + terminator = 5
        let mut buf = PathBuffer::new(5);
        buf.compose(&["/a", "/b"]).unwrap();
        assert_eq!(buf.as_str(), "/a/b");
    }

    #[test]
    fn test_compose_one_byte_over() {
        let mut buf = PathBuffer::new(4);
        let err = buf.compose(&["/a", "/b"]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall {
                required: 5,
                capacity: 4
            }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failed_compose_discards_previous_contents() {
        let mut buf = PathBuffer::new(4);
        buf.set("abc").unwrap();
        assert!(buf.set("abcd").is_err());
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn test_zero_capacity_rejects_empty_string() {
        let mut buf = PathBuffer::new(0);
        assert!(buf.set("").is_err());
    }

    #[test]
    fn test_empty_string_fits_capacity_one() {
        let mut buf = PathBuffer::new(1);
        buf.set("").unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_display_and_into_string() {
        let mut buf = PathBuffer::new(32);
        buf.set("~/saves").unwrap();
        assert_eq!(buf.to_string(), "~/saves");
        assert_eq!(buf.into_string(), "~/saves");
    }
}
