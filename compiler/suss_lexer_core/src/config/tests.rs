use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::{LexerConfig, WhitespacePolicy};
use crate::{KeywordTable, TokenKind};

#[test]
fn default_preserves_whitespace_with_standard_keywords() {
    let config = LexerConfig::default();
    assert_eq!(config.whitespace(), WhitespacePolicy::Preserve);
    assert_eq!(config.keywords().len(), KeywordTable::standard().len());
    assert_eq!(config.keywords().lookup(b"px"), TokenKind::Pixel);
}

#[test]
fn builders_replace_fields() {
    let table: Arc<KeywordTable> = Arc::new([("at", TokenKind::If)].into_iter().collect());
    let config = LexerConfig::default()
        .with_keywords(Arc::clone(&table))
        .with_whitespace(WhitespacePolicy::Skip);
    assert_eq!(config.whitespace(), WhitespacePolicy::Skip);
    assert!(Arc::ptr_eq(config.keywords(), &table));
}

#[test]
fn clones_share_one_table() {
    let config = LexerConfig::new(Arc::new(KeywordTable::standard()), WhitespacePolicy::Skip);
    let copy = config.clone();
    assert!(Arc::ptr_eq(config.keywords(), copy.keywords()));
    assert_eq!(copy.whitespace(), WhitespacePolicy::Skip);
}
