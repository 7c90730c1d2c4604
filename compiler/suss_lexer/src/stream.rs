//! Token streaming over a background thread.
//!
//! A [`TokenStream`] runs a [`Lexer`] on its own named thread and hands
//! tokens to the consumer through a rendezvous channel (`bounded(0)`). Every
//! send waits for a matching receive, so the producer is never more than one
//! token ahead and order is exactly scan order.
//!
//! Whitespace tokens are dropped on the producer side. The stream ends when
//! the lexer reaches EOF, after an unterminated string (delivered as the last
//! item, an `Err`), or on cancellation.
//!
//! # Cancellation
//!
//! A [`CancelHandle`] pairs an atomic flag with a one-slot wake-up channel.
//! The producer checks the flag before scanning each token and `select!`s on
//! the wake-up channel alongside its pending send, so a producer parked
//! mid-handoff exits promptly. Dropping the stream cancels and joins the
//! thread.

use std::io;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use crossbeam::select;
use suss_lexer_core::{Lexer, Token};
use tracing::dispatcher::{self, Dispatch};
use tracing::{debug, trace, warn};

use crate::LexError;

/// Name given to every producer thread.
pub const THREAD_NAME: &str = "suss-lexer";

/// One stream item: a token, or the terminal unterminated-string error.
pub type StreamItem = Result<Token, LexError>;

/// Cloneable, thread-safe request to stop a [`TokenStream`] early.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    signal: Sender<()>,
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    fn new() -> (Self, Receiver<()>) {
        let (signal, wake) = channel::bounded(1);
        let handle = Self {
            signal,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        (handle, wake)
    }

    /// Ask the producer to stop. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            // Full or disconnected both mean the producer needs no wake-up.
            let _ = self.signal.try_send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Lazy, finite, non-restartable sequence of non-whitespace tokens.
///
/// Pull items with [`Iterator::next`]; each call blocks until the producer
/// has scanned the next token. Once `next` returns `None` it keeps doing so.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Receiver<StreamItem>,
    cancel: CancelHandle,
    producer: Option<JoinHandle<()>>,
    finished: bool,
}

impl TokenStream {
    /// Move `lexer` onto a new producer thread.
    ///
    /// Fails only if the OS refuses to spawn the thread.
    pub fn spawn(lexer: Lexer) -> io::Result<Self> {
        let (tx, tokens) = channel::bounded(0);
        let (cancel, wake) = CancelHandle::new();
        let producer = Producer {
            lexer,
            tokens: tx,
            wake,
            cancelled: Arc::clone(&cancel.cancelled),
        };
        // Producer events go to whichever subscriber the caller has in scope.
        let dispatch = dispatcher::get_default(Dispatch::clone);
        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || dispatcher::with_default(&dispatch, || producer.run()))?;
        debug!("token stream started");

        Ok(Self {
            tokens,
            cancel,
            producer: Some(handle),
            finished: false,
        })
    }

    /// A handle that can stop this stream from any thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Stop the producer. Later calls to `next` return `None`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Iterator for TokenStream {
    type Item = StreamItem;

    fn next(&mut self) -> Option<StreamItem> {
        if self.finished || self.cancel.is_cancelled() {
            self.finished = true;
            return None;
        }
        let Ok(item) = self.tokens.recv() else {
            self.finished = true;
            return None;
        };
        // A cancel from another thread may race the handoff.
        if self.cancel.is_cancelled() {
            self.finished = true;
            return None;
        }
        if item.is_err() {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for TokenStream {}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.producer.take() {
            if handle.join().is_err() {
                warn!("lexer thread panicked");
            }
        }
    }
}

/// State owned by the producer thread.
struct Producer {
    lexer: Lexer,
    tokens: Sender<StreamItem>,
    wake: Receiver<()>,
    cancelled: Arc<AtomicBool>,
}

impl Producer {
    fn run(mut self) {
        let mut sent = 0usize;
        loop {
            if self.cancelled.load(Ordering::Acquire) {
                debug!(sent, "token stream cancelled");
                return;
            }

            let token = self.lexer.next_token();
            if token.is_whitespace() {
                continue;
            }
            if token.is_eof() {
                debug!(sent, "token stream exhausted");
                return;
            }

            let item = match LexError::from_token(&token) {
                Some(err) if err.is_terminal() => Err(err),
                _ => Ok(token),
            };
            let terminal = item.is_err();
            trace!(?item, "emit");

            select! {
                send(self.tokens, item) -> res => {
                    if res.is_err() {
                        debug!(sent, "token stream consumer hung up");
                        return;
                    }
                }
                recv(self.wake) -> _ => {
                    debug!(sent, "token stream cancelled");
                    return;
                }
            }
            sent += 1;

            if terminal {
                debug!(sent, "token stream ended on unterminated string");
                return;
            }
        }
    }
}
