use super::*;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers & Literals: 0-15
    assert_eq!(TokenKind::Identifier as u8, 0);
    assert_eq!(TokenKind::Integer as u8, 1);
    assert_eq!(TokenKind::String as u8, 2);

    // Operators: 32-63
    assert_eq!(TokenKind::Plus as u8, 32);
    assert_eq!(TokenKind::NumberSign as u8, 44);

    // Punctuation: 64-79
    assert_eq!(TokenKind::OpenParen as u8, 64);
    assert_eq!(TokenKind::Comma as u8, 73);

    // Keywords: 96-111
    assert_eq!(TokenKind::If as u8, 96);
    assert_eq!(TokenKind::False as u8, 105);

    // Units: 112-127
    assert_eq!(TokenKind::Pixel as u8, 112);
    assert_eq!(TokenKind::Vh as u8, 116);

    // Whitespace: 128-143
    assert_eq!(TokenKind::Space as u8, 128);
    assert_eq!(TokenKind::LineFeed as u8, 131);

    // Errors: 240-254
    assert_eq!(TokenKind::Illegal as u8, 240);
    assert_eq!(TokenKind::UnterminatedString as u8, 241);

    // Control: 255
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn all_is_sorted_and_unique() {
    for pair in TokenKind::ALL.windows(2) {
        assert!(
            (pair[0] as u8) < (pair[1] as u8),
            "{} must come before {}",
            pair[0],
            pair[1]
        );
    }
}

// === Lexeme ===

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(TokenKind::Plus.lexeme(), Some("+"));
    assert_eq!(TokenKind::Minus.lexeme(), Some("-"));
    assert_eq!(TokenKind::Asterisk.lexeme(), Some("*"));
    assert_eq!(TokenKind::Slash.lexeme(), Some("/"));
    assert_eq!(TokenKind::Percent.lexeme(), Some("%"));
    assert_eq!(TokenKind::Equal.lexeme(), Some("="));
    assert_eq!(TokenKind::DoubleEqual.lexeme(), Some("=="));
    assert_eq!(TokenKind::NotEqual.lexeme(), Some("!="));
    assert_eq!(TokenKind::Bang.lexeme(), Some("!"));
    assert_eq!(TokenKind::LessThan.lexeme(), Some("<"));
    assert_eq!(TokenKind::GreaterThan.lexeme(), Some(">"));
    assert_eq!(TokenKind::Ampersand.lexeme(), Some("&"));
    assert_eq!(TokenKind::NumberSign.lexeme(), Some("#"));
}

#[test]
fn fixed_lexeme_keywords_and_units() {
    assert_eq!(TokenKind::Function.lexeme(), Some("function"));
    assert_eq!(TokenKind::Throw.lexeme(), Some("throw"));
    assert_eq!(TokenKind::Rem.lexeme(), Some("rem"));
    assert_eq!(TokenKind::Vw.lexeme(), Some("vw"));
}

#[test]
fn variable_text_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::Identifier.lexeme(), None);
    assert_eq!(TokenKind::Integer.lexeme(), None);
    assert_eq!(TokenKind::String.lexeme(), None);
    assert_eq!(TokenKind::Illegal.lexeme(), None);
    assert_eq!(TokenKind::UnterminatedString.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

#[test]
fn fixed_lexemes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        if let Some(text) = kind.lexeme() {
            assert!(seen.insert(text), "duplicate lexeme {text:?} for {kind}");
        }
    }
}

// === Categories ===

#[test]
fn whitespace_category() {
    let ws: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_whitespace())
        .collect();
    assert_eq!(
        ws,
        vec![
            TokenKind::Space,
            TokenKind::Tab,
            TokenKind::CarriageReturn,
            TokenKind::LineFeed
        ]
    );
}

#[test]
fn keyword_and_unit_categories_are_disjoint() {
    for kind in TokenKind::ALL {
        assert!(
            !(kind.is_keyword() && kind.is_unit()),
            "{kind} is both keyword and unit"
        );
    }
    assert_eq!(TokenKind::ALL.iter().filter(|k| k.is_keyword()).count(), 10);
    assert_eq!(TokenKind::ALL.iter().filter(|k| k.is_unit()).count(), 5);
}

#[test]
fn error_category() {
    assert!(TokenKind::Illegal.is_error());
    assert!(TokenKind::UnterminatedString.is_error());
    assert!(!TokenKind::Eof.is_error());
    assert!(!TokenKind::String.is_error());
}

#[test]
fn eof_is_only_eof() {
    let eofs: Vec<_> = TokenKind::ALL.into_iter().filter(|k| k.is_eof()).collect();
    assert_eq!(eofs, vec![TokenKind::Eof]);
}

// === Names ===

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::DoubleEqual.to_string(), "DoubleEqual");
    assert_eq!(TokenKind::Pixel.to_string(), "Pixel");
}

#[test]
fn name_matches_serde_tag() {
    for kind in TokenKind::ALL {
        let json = serde_json::to_string(&kind).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", kind.name()));
    }
}
