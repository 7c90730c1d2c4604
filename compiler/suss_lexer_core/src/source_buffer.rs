//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content, so
//! the scanner reads "current byte" and "next byte" without bounds checks
//! near the end of input. The total size is rounded up to the next 64-byte
//! boundary, which also leaves zero padding for lookahead at the very end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, read-only copy of the input bytes plus sentinel padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Box<[u8]>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Inputs longer than `u32::MAX` bytes are cut at `u32::MAX`; token
    /// offsets are `u32`.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let kept = &source[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + sentinel + one
        // byte for `peek()` while sitting on the sentinel).
        let padded_len = (kept.len() + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding come from the zero fill.
        let mut buf = vec![0u8; padded_len];
        buf[..kept.len()].copy_from_slice(kept);

        Self {
            buf: buf.into_boxed_slice(),
            source_len,
        }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Move the buffer into a [`Cursor`] positioned at byte 0.
    pub fn into_cursor(self) -> Cursor {
        Cursor::new(self)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}
