//! Error types for the protocol layer.
//!
//! Each crate in wordwire defines its own error enum. A `DecodeError` always
//! means the problem is in an inbound wire line, not in networking or game
//! state.

/// Errors produced while decoding one wire line.
///
/// Decoding is total: any byte sequence maps to either a [`Message`]
/// (possibly with a lenient-integer flag) or exactly one of these variants.
/// Nothing an attacker sends can make the decoder panic.
///
/// [`Message`]: crate::Message
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The line has no trailing terminator.
    #[error("line is missing its terminator")]
    Truncated,

    /// The keyword prefix is not part of the grammar.
    #[error("unknown command keyword")]
    UnknownCommand,

    /// Two consecutive spaces follow the `WORD` keyword.
    #[error("doubled space after the command keyword")]
    DoubleSpace,

    /// The guessed word contains a character that is not a letter.
    #[error("word contains a non-alphabetic character")]
    NotAlphabetic,

    /// The guessed word is not exactly 5 letters.
    #[error("word is not exactly 5 letters")]
    WrongLength,

    /// Catch-all for lines that fit no other rule: oversized input,
    /// invalid UTF-8, or a `WORD` keyword with no separator at all.
    #[error("malformed line")]
    Malformed,
}

/// Validation errors for a word entered locally, before anything is sent.
///
/// Shares one rule set with the codec's `WORD` parsing so the client's
/// pre-send check and the server's wire check can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// No word entered.
    #[error("no word entered")]
    Empty,

    /// The word contains a character that is not a letter.
    #[error("the word should be composed of alphabetic characters")]
    NotAlphabetic,

    /// The word is not exactly 5 letters.
    #[error("the word is not 5 letters")]
    WrongLength,
}
