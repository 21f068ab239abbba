//! Line codec: raw wire bytes to [`Message`] and back.
//!
//! The grammar is a fixed set of six keywords with single-space separators
//! and a mandatory `\n` terminator, so the codec is a hand-written parser
//! rather than a serialization framework. Encoding is the deterministic
//! inverse of decoding: `decode(&encode(&m))` yields `m` again for every
//! message within the wire vocabulary.

use crate::error::{DecodeError, WordError};
use crate::message::{Message, MAX_LINE_BYTES, validate_word};

/// A successfully decoded line.
///
/// `lenient_int` records that an `OK` or `END` integer field was absent or
/// non-numeric and was defaulted to 0. The message is still accepted; the
/// flag lets callers log the anomaly instead of dropping the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub message: Message,
    pub lenient_int: bool,
}

impl Decoded {
    fn strict(message: Message) -> Self {
        Decoded { message, lenient_int: false }
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decodes one raw wire line into a [`Message`].
///
/// Rules, in precedence order:
/// 1. Longer than [`MAX_LINE_BYTES`] or not UTF-8: [`DecodeError::Malformed`].
/// 2. Missing the `\n` terminator: [`DecodeError::Truncated`].
/// 3. Unrecognized keyword: [`DecodeError::UnknownCommand`].
/// 4. `WORD` token rules: doubled space, then non-alphabetic, then length.
/// 5. `OK`/`END` integer fields never fail; see [`Decoded::lenient_int`].
pub fn decode(raw: &[u8]) -> Result<Decoded, DecodeError> {
    if raw.len() > MAX_LINE_BYTES {
        return Err(DecodeError::Malformed);
    }
    let text = std::str::from_utf8(raw).map_err(|_| DecodeError::Malformed)?;
    let line = text.strip_suffix('\n').ok_or(DecodeError::Truncated)?;

    if line == "QUIT" {
        return Ok(Decoded::strict(Message::QuitRequest));
    }
    if let Some(rest) = line.strip_prefix("QUIT ") {
        return Ok(Decoded::strict(Message::Quit { text: rest.to_string() }));
    }
    if line == "OK PERFECT" {
        return Ok(Decoded::strict(Message::Perfect));
    }
    if let Some(rest) = line.strip_prefix("OK ") {
        let (value, text, lenient_int) = split_int_field(rest);
        return Ok(Decoded {
            message: Message::Ack { attempts_remaining: value, text },
            lenient_int,
        });
    }
    if let Some(rest) = line.strip_prefix("END ") {
        let (value, word, lenient_int) = split_int_field(rest);
        return Ok(Decoded {
            message: Message::End { attempts: value, secret_word: word },
            lenient_int,
        });
    }
    if let Some(rest) = line.strip_prefix("ERR ") {
        return Ok(Decoded::strict(Message::Error { text: rest.to_string() }));
    }
    if let Some(rest) = line.strip_prefix("WORD") {
        return decode_word(rest).map(Decoded::strict);
    }

    Err(DecodeError::UnknownCommand)
}

/// Parses the token after `WORD`. `rest` still carries the separator.
fn decode_word(rest: &str) -> Result<Message, DecodeError> {
    let token = rest.strip_prefix(' ').ok_or(DecodeError::Malformed)?;
    // A separator followed by another space, or by nothing but the
    // terminator, counts as doubled whitespace.
    if token.is_empty() || token.starts_with(' ') {
        return Err(DecodeError::DoubleSpace);
    }
    match validate_word(token) {
        Ok(()) => Ok(Message::WordGuess { word: token.to_string() }),
        Err(WordError::Empty | WordError::NotAlphabetic) => {
            Err(DecodeError::NotAlphabetic)
        }
        Err(WordError::WrongLength) => Err(DecodeError::WrongLength),
    }
}

/// Splits `INT " " TEXT` without ever failing: a missing or non-numeric
/// integer field decodes as 0 with the lenient flag set.
fn split_int_field(rest: &str) -> (u32, String, bool) {
    let (field, text) = match rest.split_once(' ') {
        Some((field, text)) => (field, text.to_string()),
        None => (rest, String::new()),
    };
    let (value, lenient) = parse_int_or_default(field);
    (value, text, lenient)
}

fn parse_int_or_default(field: &str) -> (u32, bool) {
    match field.parse::<u32>() {
        Ok(value) => (value, false),
        Err(_) => (0, true),
    }
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encodes a [`Message`] as one terminated wire line.
///
/// Infallible for the protocol's vocabulary: 5-letter words, attempt counts
/// in single digits, and short fixed texts always fit [`MAX_LINE_BYTES`].
pub fn encode(message: &Message) -> Vec<u8> {
    let line = match message {
        Message::Ack { attempts_remaining, text } => {
            if text.is_empty() {
                format!("OK {attempts_remaining}\n")
            } else {
                format!("OK {attempts_remaining} {text}\n")
            }
        }
        Message::Perfect => "OK PERFECT\n".to_string(),
        Message::End { attempts, secret_word } => {
            format!("END {attempts} {secret_word}\n")
        }
        Message::Quit { text } => format!("QUIT {text}\n"),
        Message::QuitRequest => "QUIT\n".to_string(),
        Message::Error { text } => format!("ERR {text}\n"),
        Message::WordGuess { word } => format!("WORD {word}\n"),
    };
    debug_assert!(line.len() <= MAX_LINE_BYTES, "encoded line exceeds the wire bound");
    debug_assert!(!line[..line.len() - 1].contains('\n'), "interior terminator");
    line.into_bytes()
}

// =========================================================================
// Tests
// =========================================================================
