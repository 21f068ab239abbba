//! Session state machines for wordwire.
//!
//! One crate, two machines, zero I/O:
//!
//! 1. **[`ServerSession`]** — owns a game's secret word and attempt budget,
//!    turns inbound decode results into replies, and decides when the
//!    connection is over.
//! 2. **[`ClientSession`]** — tracks the menu flow, validates words locally
//!    before anything touches the wire, and turns server replies into
//!    [`ClientEvent`]s for rendering.
//!
//! # How it fits in the stack
//!
//! ```text
//! wordwire (runner)  ← sockets, console, accept loop
//!     ↕
//! Session layer (this crate)  ← every game and interaction decision
//!     ↕
//! Protocol layer (below)  ← Message, decode errors, word validation
//! ```
//!
//! Both machines are plain synchronous types, so the whole rule set is
//! covered by unit tests with no sockets involved.

mod client;
mod error;
mod server;

pub use client::{ClientEvent, ClientSession, ClientState, MenuChoice};
pub use error::SessionError;
pub use server::{ServerSession, ServerState};
