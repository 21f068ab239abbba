//! Wire protocol for wordwire.
//!
//! This crate defines the language that the guessing client and server
//! speak:
//!
//! - **Types** ([`Message`], the wire constants) — the messages that travel
//!   on the wire, one per line.
//! - **Codec** ([`decode`], [`encode`]) — the hand-written line parser for
//!   the six-keyword grammar and its deterministic inverse.
//! - **Errors** ([`DecodeError`], [`WordError`]) — every way an inbound
//!   line can be rejected, as typed values rather than panics.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw line bytes) and the
//! sessions (game state). It knows nothing about sockets, secrets, or
//! attempt budgets; it only maps lines to messages and back.
//!
//! ```text
//! Transport (bytes) → Protocol (Message) → Session (game state)
//! ```

mod codec;
mod error;
mod message;

pub use codec::{Decoded, decode, encode};
pub use error::{DecodeError, WordError};
pub use message::{
    ERR_DOUBLE_SPACE, ERR_MALFORMED, ERR_NOT_ALPHABETIC, ERR_WRONG_COMMAND,
    ERR_WRONG_LENGTH, MAX_LINE_BYTES, Message, QUIT_TEXT, WELCOME_TEXT,
    WORD_LENGTH, validate_word,
};
