//! Error types for the session layer.

use wordwire_protocol::WordError;

use crate::ClientState;

/// Errors that can occur while driving a client session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An operation was attempted in a state that does not allow it,
    /// e.g. submitting a guess before the welcome banner arrived.
    #[error("invalid operation in state {0:?}")]
    InvalidState(ClientState),

    /// The first server line was not the welcome banner.
    #[error("expected a welcome banner, received {0}")]
    UnexpectedWelcome(&'static str),

    /// A locally entered word failed validation. The session state is
    /// unchanged; the caller re-prompts and tries again.
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}
