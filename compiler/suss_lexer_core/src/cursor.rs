//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! The cursor owns its [`SourceBuffer`] so that a lexer built on it is
//! `'static` and can move onto a producer thread. EOF is detected when the
//! current byte is the sentinel (`0x00`) and the position has reached the
//! source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is part of the source (the scanner reports it
//! as an illegal byte); a null at `pos >= source_len` is the sentinel.

use crate::SourceBuffer;

/// Read position over an owned [`SourceBuffer`].
///
/// `current()` is the byte at the position, `peek()` the byte at the read
/// position one ahead. Neither ever reads out of bounds: the sentinel and the
/// zero padding absorb lookahead at the end of input, and [`advance`]
/// refuses to move past the sentinel.
///
/// [`advance`]: Cursor::advance
#[derive(Clone, Debug)]
pub struct Cursor {
    source: SourceBuffer,
    /// Current read position (byte index into the buffer).
    pos: u32,
}

impl Cursor {
    pub(crate) fn new(source: SourceBuffer) -> Self {
        debug_assert!(
            source.as_sentinel_bytes()[source.len() as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self { source, pos: 0 }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.as_sentinel_bytes()[self.pos as usize]
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.source.as_sentinel_bytes()[self.pos as usize + 1]
    }

    /// Advance by one byte. A no-op once EOF is reached.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// `true` when the current byte is the sentinel rather than source data.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        &self.source.as_bytes()[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &[u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at EOF regardless of `pred`, so `pred(0)` may return `true`
    /// without running into the padding.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip ordinary string content up to the next `"` or `\`.
    ///
    /// Returns the byte found, or `0` at EOF (cursor left on the sentinel).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.source.as_bytes()[self.pos as usize..];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source.len();
            0
        }
    }
}
