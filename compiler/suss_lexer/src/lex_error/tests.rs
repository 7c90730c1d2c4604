use pretty_assertions::assert_eq;
use suss_lexer_core::{tokenize, Token, TokenKind};

use super::LexError;

#[test]
fn illegal_token_becomes_illegal_byte() {
    let token = Token::from_byte(TokenKind::Illegal, b'@', 7);
    assert_eq!(
        LexError::from_token(&token),
        Some(LexError::IllegalByte { byte: b'@', pos: 7 })
    );
}

#[test]
fn unterminated_token_covers_opening_quote() {
    let tokens = tokenize("a \"abc");
    let last = tokens.last().map(LexError::from_token);
    assert_eq!(
        last,
        Some(Some(LexError::UnterminatedString { start: 2, len: 4 }))
    );
}

#[test]
fn ordinary_tokens_are_not_errors() {
    for token in tokenize("let x = \"ok\"; 18px") {
        assert_eq!(LexError::from_token(&token), None, "{token:?}");
    }
}

#[test]
fn eof_is_not_an_error() {
    assert_eq!(LexError::from_token(&Token::eof(3)), None);
}

#[test]
fn spans() {
    assert_eq!(LexError::IllegalByte { byte: b'$', pos: 4 }.span(), 4..5);
    assert_eq!(
        LexError::UnterminatedString { start: 2, len: 4 }.span(),
        2..6
    );
}

#[test]
fn only_unterminated_string_is_terminal() {
    assert!(LexError::UnterminatedString { start: 0, len: 1 }.is_terminal());
    assert!(!LexError::IllegalByte { byte: b'~', pos: 0 }.is_terminal());
}

#[test]
fn display_messages() {
    assert_eq!(
        LexError::IllegalByte { byte: 0xff, pos: 12 }.to_string(),
        "illegal byte 0xff at offset 12"
    );
    assert_eq!(
        LexError::IllegalByte { byte: b'@', pos: 0 }.to_string(),
        "illegal byte 0x40 at offset 0"
    );
    assert_eq!(
        LexError::UnterminatedString { start: 5, len: 3 }.to_string(),
        "unterminated string literal starting at offset 5"
    );
}
