//! Unified error type for the wordwire meta crate.

use wordwire_game::GameError;
use wordwire_session::SessionError;
use wordwire_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `wordwire` meta crate, you deal with this single error
/// type instead of importing errors from each layer. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordwireError {
    /// A transport-level error (bind, connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A game-data error (invalid word list or candidate).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A session-level error (operation in the wrong state).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Reading from or writing to the local console failed.
    #[error("console i/o failed: {0}")]
    Console(#[source] std::io::Error),
}
