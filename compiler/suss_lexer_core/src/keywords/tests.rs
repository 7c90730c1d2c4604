use super::*;
use pretty_assertions::assert_eq;

fn lookup(text: &str) -> TokenKind {
    KeywordTable::standard().lookup(text.as_bytes())
}

// === Reserved words ===

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), TokenKind::If);
    assert_eq!(lookup("else"), TokenKind::Else);
    assert_eq!(lookup("for"), TokenKind::For);
    assert_eq!(lookup("return"), TokenKind::Return);
    assert_eq!(lookup("throw"), TokenKind::Throw);
}

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("let"), TokenKind::Let);
    assert_eq!(lookup("const"), TokenKind::Const);
    assert_eq!(lookup("function"), TokenKind::Function);
}

#[test]
fn value_keywords() {
    assert_eq!(lookup("true"), TokenKind::True);
    assert_eq!(lookup("false"), TokenKind::False);
}

// === Units ===

#[test]
fn css_units() {
    assert_eq!(lookup("px"), TokenKind::Pixel);
    assert_eq!(lookup("em"), TokenKind::Em);
    assert_eq!(lookup("rem"), TokenKind::Rem);
    assert_eq!(lookup("vw"), TokenKind::Vw);
    assert_eq!(lookup("vh"), TokenKind::Vh);
}

// === Exactness ===

#[test]
fn case_sensitive() {
    assert_eq!(lookup("IF"), TokenKind::Identifier);
    assert_eq!(lookup("Let"), TokenKind::Identifier);
    assert_eq!(lookup("PX"), TokenKind::Identifier);
}

#[test]
fn no_prefix_or_suffix_matches() {
    assert_eq!(lookup("lets"), TokenKind::Identifier);
    assert_eq!(lookup("le"), TokenKind::Identifier);
    assert_eq!(lookup("pxx"), TokenKind::Identifier);
    assert_eq!(lookup("functions"), TokenKind::Identifier);
}

#[test]
fn length_guard_rejects_outliers() {
    assert_eq!(lookup(""), TokenKind::Identifier);
    assert_eq!(lookup("x"), TokenKind::Identifier);
    assert_eq!(lookup("background-color"), TokenKind::Identifier);
}

#[test]
fn every_standard_entry_round_trips_through_lexeme() {
    let table = KeywordTable::standard();
    assert_eq!(table.len(), 15);
    for (text, kind) in STANDARD {
        assert!(kind.is_keyword() || kind.is_unit(), "{kind} is not reserved");
        assert_eq!(kind.lexeme(), Some(text));
        assert_eq!(table.lookup(text.as_bytes()), kind);
    }
}

// === Custom tables ===

#[test]
fn custom_table() {
    let table: KeywordTable = [("media", TokenKind::If)].into_iter().collect();
    assert_eq!(table.lookup(b"media"), TokenKind::If);
    assert_eq!(table.lookup(b"if"), TokenKind::Identifier);
}

#[test]
fn empty_table_resolves_everything_to_identifier() {
    let table: KeywordTable = std::iter::empty().collect();
    assert!(table.is_empty());
    assert_eq!(table.lookup(b"let"), TokenKind::Identifier);
    assert_eq!(table.lookup(b""), TokenKind::Identifier);
}

#[test]
fn default_is_standard() {
    assert_eq!(KeywordTable::default().len(), KeywordTable::standard().len());
}
