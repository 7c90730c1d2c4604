//! Positioned, immutable tokens.
//!
//! A [`Token`] owns its literal bytes. Literals are bytes rather than `str`
//! because the input is an arbitrary byte buffer: an [`Illegal`] token may
//! carry a lone non-ASCII byte that is not valid UTF-8 by itself.
//!
//! Every token's literal is the exact source slice it was scanned from, so
//! string tokens keep their quotes. Concatenating the literals of a
//! whitespace-preserving scan yields the input byte for byte.
//!
//! [`Illegal`]: TokenKind::Illegal

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::TokenKind;

/// One classified unit of source text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: Box<[u8]>,
    start: u32,
}

impl Token {
    /// Build a token from a multi-byte literal.
    pub fn new(kind: TokenKind, literal: &[u8], start: u32) -> Self {
        Self {
            kind,
            literal: literal.into(),
            start,
        }
    }

    /// Build a token whose literal is exactly one byte.
    pub fn from_byte(kind: TokenKind, byte: u8, start: u32) -> Self {
        Self::new(kind, &[byte], start)
    }

    /// End-of-input token at `pos`. Its literal is empty.
    pub fn eof(pos: u32) -> Self {
        Self::new(TokenKind::Eof, &[], pos)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Raw literal bytes.
    #[inline]
    pub fn literal(&self) -> &[u8] {
        &self.literal
    }

    /// Literal as text. Bytes that are not valid UTF-8 become `U+FFFD`.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.literal)
    }

    /// Byte offset of the first literal byte.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte offset one past the last literal byte.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "literals are slices of a source whose length fits in u32"
    )]
    pub fn end(&self) -> u32 {
        self.start + self.literal.len() as u32
    }

    /// `(start, end)` of the literal.
    pub fn position(&self) -> (u32, u32) {
        (self.start, self.end())
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text(), self.start)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text())
    }
}

/// Wire shape: `{"kind": "<name>", "literal": "<text>", "start": <offset>}`.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("literal", &self.text())?;
        state.serialize_field("start", &self.start)?;
        state.end()
    }
}
