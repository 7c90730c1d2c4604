//! Token kinds produced by the scanner.
//!
//! `TokenKind` is a closed, one-byte enumeration. Discriminants are grouped
//! into semantic ranges so that category checks compile to range compares:
//!
//! | Range     | Category                        |
//! |-----------|---------------------------------|
//! | 0-15      | Identifiers & literals          |
//! | 32-63     | Operators                       |
//! | 64-79     | Structural punctuation          |
//! | 96-111    | Keywords                        |
//! | 112-127   | CSS unit suffixes               |
//! | 128-143   | Whitespace                      |
//! | 240-254   | Errors                          |
//! | 255       | End of input                    |
//!
//! Error conditions are kinds, not `Result::Err`: the scanner keeps going
//! after an [`Illegal`](TokenKind::Illegal) byte, and stops at end of input
//! after an [`UnterminatedString`](TokenKind::UnterminatedString).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a single lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers & Literals (0-15) ===
    /// Any identifier not found in the keyword table.
    Identifier = 0,
    /// Run of ASCII digits. Sign and fraction are left to the parser.
    Integer = 1,
    /// String contents between `"` delimiters, escapes left raw.
    String = 2,

    // === Operators (32-63) ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Asterisk = 34,
    /// `/`
    Slash = 35,
    /// `%`
    Percent = 36,
    /// `=`
    Equal = 37,
    /// `==`
    DoubleEqual = 38,
    /// `!=`
    NotEqual = 39,
    /// `!`
    Bang = 40,
    /// `<`
    LessThan = 41,
    /// `>`
    GreaterThan = 42,
    /// `&`
    Ampersand = 43,
    /// `#`
    NumberSign = 44,

    // === Structural Punctuation (64-79) ===
    /// `(`
    OpenParen = 64,
    /// `)`
    CloseParen = 65,
    /// `{`
    OpenCurly = 66,
    /// `}`
    CloseCurly = 67,
    /// `[`
    OpenBracket = 68,
    /// `]`
    CloseBracket = 69,
    /// `:`
    Colon = 70,
    /// `;`
    Semicolon = 71,
    /// `.`
    Dot = 72,
    /// `,`
    Comma = 73,

    // === Keywords (96-111) ===
    If = 96,
    Else = 97,
    For = 98,
    Let = 99,
    Const = 100,
    Function = 101,
    Return = 102,
    Throw = 103,
    True = 104,
    False = 105,

    // === CSS Units (112-127) ===
    /// `px`
    Pixel = 112,
    /// `em`
    Em = 113,
    /// `rem`
    Rem = 114,
    /// `vw`
    Vw = 115,
    /// `vh`
    Vh = 116,

    // === Whitespace (128-143) ===
    /// ` `
    Space = 128,
    /// `\t`
    Tab = 129,
    /// `\r`
    CarriageReturn = 130,
    /// `\n`
    LineFeed = 131,

    // === Errors (240-254) ===
    /// A single byte outside every recognized class.
    Illegal = 240,
    /// Input ended inside a string literal.
    UnterminatedString = 241,

    // === Control (255) ===
    /// End of input. Repeats forever once reached.
    Eof = 255,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 48] = [
        Self::Identifier,
        Self::Integer,
        Self::String,
        Self::Plus,
        Self::Minus,
        Self::Asterisk,
        Self::Slash,
        Self::Percent,
        Self::Equal,
        Self::DoubleEqual,
        Self::NotEqual,
        Self::Bang,
        Self::LessThan,
        Self::GreaterThan,
        Self::Ampersand,
        Self::NumberSign,
        Self::OpenParen,
        Self::CloseParen,
        Self::OpenCurly,
        Self::CloseCurly,
        Self::OpenBracket,
        Self::CloseBracket,
        Self::Colon,
        Self::Semicolon,
        Self::Dot,
        Self::Comma,
        Self::If,
        Self::Else,
        Self::For,
        Self::Let,
        Self::Const,
        Self::Function,
        Self::Return,
        Self::Throw,
        Self::True,
        Self::False,
        Self::Pixel,
        Self::Em,
        Self::Rem,
        Self::Vw,
        Self::Vh,
        Self::Space,
        Self::Tab,
        Self::CarriageReturn,
        Self::LineFeed,
        Self::Illegal,
        Self::UnterminatedString,
        Self::Eof,
    ];

    /// Fixed source spelling, or `None` for kinds whose text varies.
    ///
    /// Identifier, Integer, String, Illegal, UnterminatedString and Eof have
    /// no fixed lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equal => "=",
            Self::DoubleEqual => "==",
            Self::NotEqual => "!=",
            Self::Bang => "!",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Ampersand => "&",
            Self::NumberSign => "#",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenCurly => "{",
            Self::CloseCurly => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::Let => "let",
            Self::Const => "const",
            Self::Function => "function",
            Self::Return => "return",
            Self::Throw => "throw",
            Self::True => "true",
            Self::False => "false",
            Self::Pixel => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Space => " ",
            Self::Tab => "\t",
            Self::CarriageReturn => "\r",
            Self::LineFeed => "\n",
            Self::Identifier
            | Self::Integer
            | Self::String
            | Self::Illegal
            | Self::UnterminatedString
            | Self::Eof => return None,
        };
        Some(text)
    }

    /// Stable name used in the serialized token shape.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Asterisk => "Asterisk",
            Self::Slash => "Slash",
            Self::Percent => "Percent",
            Self::Equal => "Equal",
            Self::DoubleEqual => "DoubleEqual",
            Self::NotEqual => "NotEqual",
            Self::Bang => "Bang",
            Self::LessThan => "LessThan",
            Self::GreaterThan => "GreaterThan",
            Self::Ampersand => "Ampersand",
            Self::NumberSign => "NumberSign",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::OpenCurly => "OpenCurly",
            Self::CloseCurly => "CloseCurly",
            Self::OpenBracket => "OpenBracket",
            Self::CloseBracket => "CloseBracket",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Dot => "Dot",
            Self::Comma => "Comma",
            Self::If => "If",
            Self::Else => "Else",
            Self::For => "For",
            Self::Let => "Let",
            Self::Const => "Const",
            Self::Function => "Function",
            Self::Return => "Return",
            Self::Throw => "Throw",
            Self::True => "True",
            Self::False => "False",
            Self::Pixel => "Pixel",
            Self::Em => "Em",
            Self::Rem => "Rem",
            Self::Vw => "Vw",
            Self::Vh => "Vh",
            Self::Space => "Space",
            Self::Tab => "Tab",
            Self::CarriageReturn => "CarriageReturn",
            Self::LineFeed => "LineFeed",
            Self::Illegal => "Illegal",
            Self::UnterminatedString => "UnterminatedString",
            Self::Eof => "Eof",
        }
    }

    /// Space, tab, carriage return or line feed.
    #[inline]
    pub fn is_whitespace(self) -> bool {
        (128..=143).contains(&(self as u8))
    }

    /// Reserved word such as `let` or `function`.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (96..=111).contains(&(self as u8))
    }

    /// CSS unit suffix (`px`, `em`, `rem`, `vw`, `vh`).
    #[inline]
    pub fn is_unit(self) -> bool {
        (112..=127).contains(&(self as u8))
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (240..=254).contains(&(self as u8))
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == Self::Eof
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
