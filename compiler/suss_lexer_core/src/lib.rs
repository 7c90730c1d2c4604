//! Low-level tokenizer for suss stylesheets.
//!
//! This crate turns raw bytes into [`Token`]s and nothing more: no threads,
//! no logging, no error type. The streaming adapter and error reporting live
//! in `suss_lexer`, which builds on this crate.
//!
//! # Pipeline
//!
//! ```text
//! bytes -> SourceBuffer (sentinel + padding) -> Cursor -> Lexer -> Token
//!                                                           ^
//!                                            LexerConfig (KeywordTable, WhitespacePolicy)
//! ```
//!
//! # Example
//!
//! ```
//! use suss_lexer_core::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("18px;").iter().map(|t| t.kind()).collect();
//! assert_eq!(kinds, [TokenKind::Integer, TokenKind::Pixel, TokenKind::Semicolon]);
//! ```

mod config;
mod cursor;
mod keywords;
mod lexer;
mod source_buffer;
mod tag;
mod token;

pub use config::{LexerConfig, WhitespacePolicy};
pub use cursor::Cursor;
pub use keywords::KeywordTable;
pub use lexer::{tokenize, Lexer};
pub use source_buffer::SourceBuffer;
pub use tag::TokenKind;
pub use token::Token;
