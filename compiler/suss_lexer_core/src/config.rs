//! Lexer configuration.

use std::sync::Arc;

use crate::KeywordTable;

/// What the scanner does with space, tab, CR and LF.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WhitespacePolicy {
    /// Emit one token per whitespace byte. Token literals then reconstruct
    /// the input exactly.
    #[default]
    Preserve,
    /// Consume whitespace silently before each token.
    Skip,
}

/// Settings shared by every [`Lexer`](crate::Lexer) built from them.
///
/// Cloning is cheap: the keyword table sits behind an `Arc`, so one table
/// serves any number of lexers, including ones running on other threads.
#[derive(Clone, Debug, Default)]
pub struct LexerConfig {
    keywords: Arc<KeywordTable>,
    whitespace: WhitespacePolicy,
}

impl LexerConfig {
    pub fn new(keywords: Arc<KeywordTable>, whitespace: WhitespacePolicy) -> Self {
        Self {
            keywords,
            whitespace,
        }
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: Arc<KeywordTable>) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: WhitespacePolicy) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn keywords(&self) -> &Arc<KeywordTable> {
        &self.keywords
    }

    pub fn whitespace(&self) -> WhitespacePolicy {
        self.whitespace
    }
}

#[cfg(test)]
mod tests;
