//! # wordwire
//!
//! A line-based word-guessing game over TCP: a server picks a secret
//! 5-letter word, a client guesses, and per-letter feedback flows back
//! until the word is found, attempts run out, or somebody quits.
//!
//! This meta crate ties the layers together and exposes the two entry
//! points:
//!
//! - [`GuessServer`] / [`GuessServerBuilder`] — bind, configure the attempt
//!   budget and candidate list, and run the accept loop.
//! - [`run_client`] — connect and play one interactive session on the
//!   console.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use wordwire::prelude::*;
//!
//! # async fn run() -> Result<(), WordwireError> {
//! let server = GuessServerBuilder::new()
//!     .bind("0.0.0.0:4567")
//!     .max_attempts(6)
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod client;
mod error;
mod handler;
mod server;

pub use client::run_client;
pub use error::WordwireError;
pub use server::{DEFAULT_MAX_ATTEMPTS, GuessServer, GuessServerBuilder};

/// The common import surface for server and client binaries.
pub mod prelude {
    pub use crate::{
        DEFAULT_MAX_ATTEMPTS, GuessServer, GuessServerBuilder, WordwireError,
        run_client,
    };
    pub use wordwire_game::{Word, WordList};
}
