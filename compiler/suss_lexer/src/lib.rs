//! Lexer front end for suss stylesheets.
//!
//! Builds on [`suss_lexer_core`] and adds what a parser needs around the raw
//! scanner:
//!
//! - [`lex`]: whole-input scan with whitespace removed, failing on an
//!   unterminated string.
//! - [`stream`]: the same tokens delivered one at a time from a background
//!   thread, with backpressure and cancellation.
//! - [`LexError`]: `Result`-friendly view of the scanner's error tokens.
//!
//! # Tracing
//!
//! Stream lifecycle events are logged at `debug`, every emitted token at
//! `trace`. Call [`init_tracing`] and set `RUST_LOG=debug` (or any
//! `EnvFilter` directive string) to see them.

mod lex_error;
mod stream;

use std::io;
use std::sync::Once;

pub use lex_error::LexError;
pub use stream::{CancelHandle, StreamItem, TokenStream, THREAD_NAME};
pub use suss_lexer_core::{
    tokenize, KeywordTable, Lexer, LexerConfig, SourceBuffer, Token, TokenKind, WhitespacePolicy,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only the first call has any
/// effect. A bare level such as `RUST_LOG=trace` applies to this crate alone;
/// full directives are passed through unchanged.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(env_filter(&directives))
            .init();
    });
}

fn env_filter(directives: &str) -> EnvFilter {
    match directives.trim().parse::<LevelFilter>() {
        Ok(level) => EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))),
        Err(_) => EnvFilter::new(directives),
    }
}

/// Scan all of `source`, dropping whitespace.
///
/// Illegal bytes come back as `Illegal` tokens; only an unterminated string
/// fails the scan.
pub fn lex(source: impl AsRef<[u8]>, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    for token in Lexer::new(source, config) {
        if token.is_whitespace() {
            continue;
        }
        if let Some(err) = LexError::from_token(&token).filter(LexError::is_terminal) {
            return Err(err);
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Start streaming `source` from a background thread.
///
/// The input is copied before the thread starts, so the caller's buffer is
/// free as soon as this returns.
pub fn stream(source: impl AsRef<[u8]>, config: &LexerConfig) -> io::Result<TokenStream> {
    TokenStream::spawn(Lexer::new(source, config))
}
