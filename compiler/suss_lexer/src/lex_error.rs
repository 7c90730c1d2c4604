//! Lexer error types.
//!
//! The core scanner never fails: it encodes problems as `Illegal` and
//! `UnterminatedString` token kinds. This module lifts those tokens into a
//! proper error type for callers that want `Result`.

use std::ops::Range;

use suss_lexer_core::{Token, TokenKind};
use thiserror::Error;

/// A problem found while scanning.
///
/// `IllegalByte` is recoverable: scanning continues after it, and the
/// [`TokenStream`](crate::TokenStream) delivers the offending byte as an
/// ordinary `Illegal` token. `UnterminatedString` is terminal: the input
/// ended inside a string literal.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexError {
    #[error("illegal byte {byte:#04x} at offset {pos}")]
    IllegalByte { byte: u8, pos: u32 },

    /// `start` is the offset of the opening quote; `len` covers the quote
    /// and the partial content.
    #[error("unterminated string literal starting at offset {start}")]
    UnterminatedString { start: u32, len: u32 },
}

impl LexError {
    /// The error carried by an error-kind token, or `None` for any other
    /// kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.kind() {
            TokenKind::Illegal => Some(Self::IllegalByte {
                byte: token.literal().first().copied()?,
                pos: token.start(),
            }),
            TokenKind::UnterminatedString => Some(Self::UnterminatedString {
                start: token.start(),
                len: token.end() - token.start(),
            }),
            _ => None,
        }
    }

    /// Byte range of the offending source.
    pub fn span(&self) -> Range<u32> {
        match *self {
            Self::IllegalByte { pos, .. } => pos..pos + 1,
            Self::UnterminatedString { start, len } => start..start + len,
        }
    }

    /// `true` when scanning cannot continue past this error.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::UnterminatedString { .. })
    }
}

#[cfg(test)]
mod tests;
