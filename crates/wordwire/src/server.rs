//! `GuessServer` builder and accept loop.
//!
//! This is the entry point for running a guess server. It ties the layers
//! together: transport → protocol → session → game.

use std::net::SocketAddr;

use wordwire_game::WordList;
use wordwire_transport::{TcpLineTransport, Transport};

use crate::WordwireError;
use crate::handler::handle_connection;

/// Attempt budget used when the builder is not told otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Builder for configuring and starting a guess server.
///
/// # Example
///
/// ```rust,ignore
/// use wordwire::prelude::*;
///
/// let server = GuessServerBuilder::new()
///     .bind("0.0.0.0:4567")
///     .max_attempts(8)
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct GuessServerBuilder {
    bind_addr: String,
    max_attempts: u32,
    words: WordList,
}

impl GuessServerBuilder {
    /// Creates a new builder with default settings: localhost bind, a
    /// 6-attempt budget, and the built-in candidate list.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:4567".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            words: WordList::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the attempt budget announced to every client.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replaces the candidate word list.
    pub fn word_list(mut self, words: WordList) -> Self {
        self.words = words;
        self
    }

    /// Binds the transport and builds the server.
    pub async fn build(self) -> Result<GuessServer, WordwireError> {
        let transport = TcpLineTransport::bind(&self.bind_addr).await?;
        Ok(GuessServer {
            transport,
            max_attempts: self.max_attempts,
            words: self.words,
        })
    }
}

impl Default for GuessServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running guess server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct GuessServer {
    transport: TcpLineTransport,
    max_attempts: u32,
    words: WordList,
}

impl GuessServer {
    /// Creates a new builder.
    pub fn builder() -> GuessServerBuilder {
        GuessServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the server accept loop until the process is terminated.
    ///
    /// One game at a time: each accepted connection is played to completion
    /// before the next accept, so no two sessions ever share the thread of
    /// control. A handler failure ends that session only; the loop keeps
    /// accepting.
    pub async fn run(mut self) -> Result<(), WordwireError> {
        tracing::info!(
            max_attempts = self.max_attempts,
            candidates = self.words.len(),
            "guess server running"
        );

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    if let Err(e) =
                        handle_connection(conn, &self.words, self.max_attempts)
                            .await
                    {
                        tracing::debug!(error = %e, "connection ended with error");
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
