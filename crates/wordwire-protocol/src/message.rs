//! Wire message types for the word-guessing protocol.
//!
//! Every line that travels between client and server decodes into exactly
//! one [`Message`] variant. Dispatch happens once, at decode time; the
//! session layers match on the enum and never re-inspect raw text.

use crate::error::WordError;

// ---------------------------------------------------------------------------
// Wire constants
// ---------------------------------------------------------------------------

/// Maximum size of one wire line in bytes, terminator included.
/// Anything longer is malformed by definition.
pub const MAX_LINE_BYTES: usize = 256;

/// Length of a guessable word, in letters.
pub const WORD_LENGTH: usize = 5;

/// Banner text carried by the server's welcome `OK` line.
pub const WELCOME_TEXT: &str = "Welcome on the server!";

/// Confirmation text for a cooperative disconnect. Deliberately does not
/// name the secret word: a player who quits forfeits the reveal.
pub const QUIT_TEXT: &str = "Successfully disconnected.";

/// `ERR` payload for lines that fit no grammar rule.
pub const ERR_MALFORMED: &str = "Malformed command!";
/// `ERR` payload for a guess that is not exactly 5 letters.
pub const ERR_WRONG_LENGTH: &str = "Word is not 5 letters!";
/// `ERR` payload for a guess containing a non-letter.
pub const ERR_NOT_ALPHABETIC: &str = "Word is not alphabetic!";
/// `ERR` payload for a doubled space after the `WORD` keyword.
pub const ERR_DOUBLE_SPACE: &str = "Double space present!";
/// `ERR` payload for an unrecognized keyword.
pub const ERR_WRONG_COMMAND: &str = "Wrong command!";

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// One protocol message, client- or server-originated.
///
/// The wire grammar, one message per `\n`-terminated line:
///
/// ```text
/// "OK " INT " " TEXT      -> Ack          (server)
/// "OK PERFECT"            -> Perfect      (server)
/// "END " INT " " WORD     -> End          (server)
/// "QUIT " TEXT            -> Quit         (server)
/// "QUIT"                  -> QuitRequest  (client)
/// "ERR " TEXT             -> Error        (server)
/// "WORD " WORD            -> WordGuess    (client)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Progress line: the welcome banner or per-letter feedback, with the
    /// number of attempts still available.
    Ack {
        attempts_remaining: u32,
        text: String,
    },

    /// The guess matched the secret word exactly.
    Perfect,

    /// Attempts exhausted. Reveals the secret word.
    End { attempts: u32, secret_word: String },

    /// Cooperative-close confirmation sent by the server.
    Quit { text: String },

    /// The client asks to leave the game.
    QuitRequest,

    /// Protocol violation or malformed input. Always session-terminating
    /// when sent by the server.
    Error { text: String },

    /// The client's guess: exactly one 5-letter alphabetic token.
    WordGuess { word: String },
}

impl Message {
    /// The keyword this message carries on the wire. Handy for logging and
    /// for naming an unexpected message without formatting the whole value.
    pub fn keyword(&self) -> &'static str {
        match self {
            Message::Ack { .. } => "OK",
            Message::Perfect => "OK PERFECT",
            Message::End { .. } => "END",
            Message::Quit { .. } | Message::QuitRequest => "QUIT",
            Message::Error { .. } => "ERR",
            Message::WordGuess { .. } => "WORD",
        }
    }
}

// ---------------------------------------------------------------------------
// Word validation
// ---------------------------------------------------------------------------

/// Checks that `word` is a legal guess: non-empty, ASCII-alphabetic only,
/// exactly [`WORD_LENGTH`] letters.
///
/// The checks run in that order, so a 6-character token containing a digit
/// reports [`WordError::NotAlphabetic`], not `WrongLength`. Both the codec's
/// `WORD` rule and the client's local re-prompt loop go through here.
pub fn validate_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::NotAlphabetic);
    }
    if word.len() != WORD_LENGTH {
        return Err(WordError::WrongLength);
    }
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================
