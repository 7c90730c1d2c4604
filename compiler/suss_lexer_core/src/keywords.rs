//! Reserved-word and unit lookup.
//!
//! A [`KeywordTable`] maps exact identifier spellings to keyword or unit
//! kinds. Anything else resolves to [`TokenKind::Identifier`]. Matching is
//! case-sensitive with no normalization: `let` is a keyword, `Let` and `lets`
//! are identifiers.
//!
//! Tables are plain values. Build one, wrap it in an `Arc` (see
//! [`LexerConfig`](crate::LexerConfig)) and hand it to every lexer that
//! should share it. Nothing mutates a table after construction.

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Spellings recognized by [`KeywordTable::standard`].
const STANDARD: [(&str, TokenKind); 15] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("let", TokenKind::Let),
    ("const", TokenKind::Const),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("px", TokenKind::Pixel),
    ("em", TokenKind::Em),
    ("rem", TokenKind::Rem),
    ("vw", TokenKind::Vw),
    ("vh", TokenKind::Vh),
];

/// Immutable spelling-to-kind table.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    entries: FxHashMap<&'static [u8], TokenKind>,
    /// Shortest and longest entry, for rejecting candidates before hashing.
    min_len: usize,
    max_len: usize,
}

impl KeywordTable {
    /// The stylesheet language's keywords and CSS units.
    pub fn standard() -> Self {
        STANDARD.into_iter().collect()
    }

    /// Resolve `text` to its keyword or unit kind, or `Identifier`.
    #[inline]
    pub fn lookup(&self, text: &[u8]) -> TokenKind {
        if text.len() < self.min_len || text.len() > self.max_len {
            return TokenKind::Identifier;
        }
        self.entries
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Number of reserved spellings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build a custom table. Later entries win over earlier ones.
impl FromIterator<(&'static str, TokenKind)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, TokenKind)>>(iter: I) -> Self {
        let mut entries = FxHashMap::default();
        let mut min_len = usize::MAX;
        let mut max_len = 0;
        for (text, kind) in iter {
            min_len = min_len.min(text.len());
            max_len = max_len.max(text.len());
            entries.insert(text.as_bytes(), kind);
        }
        Self {
            entries,
            min_len,
            max_len,
        }
    }
}

#[cfg(test)]
mod tests;
