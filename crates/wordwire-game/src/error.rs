//! Error types for the game layer.

use wordwire_protocol::WordError;

/// Errors that can occur while building game data.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A candidate word failed validation.
    #[error("invalid word {word:?}: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    /// A word list must contain at least one candidate to draw from.
    #[error("word list is empty")]
    EmptyWordList,
}
