//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Main dispatch classifies the current byte and calls a focused method that
//! advances the cursor and builds the token. There is one state, "ready to
//! classify", entered after every token; no lookahead buffer and no
//! backtracking. The only multi-byte lookahead is a single `peek()` for `==`,
//! `!=` and hyphen-led identifiers.
//!
//! Keywords and units are resolved here through the configured
//! [`KeywordTable`]. Escapes inside strings are skipped, not decoded.
//!
//! Errors are token kinds: an unrecognized byte becomes
//! [`TokenKind::Illegal`] and scanning continues; a string that runs into
//! end of input becomes [`TokenKind::UnterminatedString`], after which the
//! next call returns [`TokenKind::Eof`].

use std::sync::Arc;

use crate::{
    Cursor, KeywordTable, LexerConfig, SourceBuffer, Token, TokenKind, WhitespacePolicy,
};

/// Stateful scanner over one input buffer.
///
/// The lexer owns its input, so it can be moved to another thread. It only
/// ever moves forward; once [`next_token`](Self::next_token) returns `Eof` it
/// keeps returning `Eof` at the same position.
#[derive(Clone, Debug)]
pub struct Lexer {
    cursor: Cursor,
    keywords: Arc<KeywordTable>,
    whitespace: WhitespacePolicy,
}

impl Lexer {
    /// Copy `source` into a sentinel buffer and scan it with `config`.
    pub fn new(source: impl AsRef<[u8]>, config: &LexerConfig) -> Self {
        Self::from_buffer(SourceBuffer::new(source), config)
    }

    pub fn from_buffer(source: SourceBuffer, config: &LexerConfig) -> Self {
        Self {
            cursor: source.into_cursor(),
            keywords: Arc::clone(config.keywords()),
            whitespace: config.whitespace(),
        }
    }

    /// Offset of the next byte to classify.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token with an empty literal when the source is
    /// exhausted. Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> Token {
        if self.whitespace == WhitespacePolicy::Skip {
            self.cursor.eat_while(is_whitespace);
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' => self.single(start, TokenKind::Space),
            b'\t' => self.single(start, TokenKind::Tab),
            b'\r' => self.single(start, TokenKind::CarriageReturn),
            b'\n' => self.single(start, TokenKind::LineFeed),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'-' => self.minus_or_ident(start),
            b'0'..=b'9' => self.integer(start),
            b'"' => self.string(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.single(start, TokenKind::Plus),
            b'*' => self.single(start, TokenKind::Asterisk),
            b'/' => self.single(start, TokenKind::Slash),
            b'%' => self.single(start, TokenKind::Percent),
            b'<' => self.single(start, TokenKind::LessThan),
            b'>' => self.single(start, TokenKind::GreaterThan),
            b'&' => self.single(start, TokenKind::Ampersand),
            b'#' => self.single(start, TokenKind::NumberSign),
            b'(' => self.single(start, TokenKind::OpenParen),
            b')' => self.single(start, TokenKind::CloseParen),
            b'{' => self.single(start, TokenKind::OpenCurly),
            b'}' => self.single(start, TokenKind::CloseCurly),
            b'[' => self.single(start, TokenKind::OpenBracket),
            b']' => self.single(start, TokenKind::CloseBracket),
            b':' => self.single(start, TokenKind::Colon),
            b';' => self.single(start, TokenKind::Semicolon),
            b'.' => self.single(start, TokenKind::Dot),
            b',' => self.single(start, TokenKind::Comma),
            // Control characters, unlisted punctuation and every non-ASCII byte.
            _ => self.single(start, TokenKind::Illegal),
        }
    }

    /// Token spanning `start` to the cursor.
    #[inline]
    fn emit(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, self.cursor.slice_from(start), start)
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> Token {
        if self.cursor.is_eof() {
            Token::eof(start)
        } else {
            // Interior null byte, not the sentinel.
            self.single(start, TokenKind::Illegal)
        }
    }

    // ─── Operators & Punctuation ───────────────────────────────────

    /// Single-byte token: advance one byte and emit `kind`.
    #[inline]
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.emit(kind, start)
    }

    fn equal(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.emit(TokenKind::DoubleEqual, start)
        } else {
            self.emit(TokenKind::Equal, start)
        }
    }

    fn bang(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '!'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.emit(TokenKind::NotEqual, start)
        } else {
            self.emit(TokenKind::Bang, start)
        }
    }

    /// `-` begins an identifier only when a name follows (`-webkit-box`,
    /// `--accent`). Otherwise it is the minus operator, so `-5` stays
    /// `Minus, Integer` for the parser to combine.
    fn minus_or_ident(&mut self, start: u32) -> Token {
        match self.cursor.peek() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'-' => self.identifier(start),
            _ => self.single(start, TokenKind::Minus),
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first byte (already classified)
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        Token::new(self.keywords.lookup(text), text, start)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Digits only. A following unit (`18px`) is scanned as its own token.
    fn integer(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.emit(TokenKind::Integer, start)
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// The literal spans both quotes (just the opening one if the input ends
    /// first). A backslash swallows the byte after it unexamined.
    fn string(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.emit(TokenKind::String, start);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance(); // skip escaped byte (no-op at EOF)
                }
                _ => return self.emit(TokenKind::UnterminatedString, start),
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Every token up to, but excluding, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Lexer {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, underscore and hyphen.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Convenience function: scan `source` with the default configuration and
/// collect every token except the final `Eof`.
///
/// For streaming or custom keyword tables, build a [`Lexer`] directly.
pub fn tokenize(source: impl AsRef<[u8]>) -> Vec<Token> {
    Lexer::new(source, &LexerConfig::default()).collect()
}
