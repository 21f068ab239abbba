//! Candidate words and the per-session secret draw.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use wordwire_protocol::validate_word;

use crate::GameError;

/// The built-in candidate set. Lowercase, 5 letters each.
pub const DEFAULT_WORDS: [&str; 6] =
    ["fessa", "caldo", "mucca", "leale", "pasto", "adori"];

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// A validated guessable word: exactly 5 ASCII-alphabetic characters.
///
/// Newtype wrapper so the feedback scorer can rely on the length invariant
/// instead of re-checking it at every call. Construction is the only way in;
/// the inner string is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    /// Validates and wraps a word.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidWord`] if the input is not exactly
    /// 5 ASCII letters.
    pub fn new(word: &str) -> Result<Self, GameError> {
        validate_word(word).map_err(|source| GameError::InvalidWord {
            word: word.to_string(),
            source,
        })?;
        Ok(Word(word.to_string()))
    }

    /// The word as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// The fixed candidate set a server draws secrets from.
///
/// Built once at startup and read-only afterwards; sessions share it by
/// reference and never mutate it.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Builds a list from candidate strings, validating each entry.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] for an empty input and
    /// [`GameError::InvalidWord`] for the first entry that is not a legal
    /// 5-letter word.
    pub fn new<I, S>(candidates: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = candidates
            .into_iter()
            .map(|candidate| Word::new(candidate.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(WordList { words })
    }

    /// Draws one candidate uniformly at random.
    pub fn draw(&self) -> &Word {
        // The non-empty invariant is enforced at construction.
        let index = rand::rng().random_range(0..self.words.len());
        &self.words[index]
    }

    /// Number of candidates in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: an empty list cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the candidates.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl Default for WordList {
    fn default() -> Self {
        WordList::new(DEFAULT_WORDS).expect("built-in candidates are valid")
    }
}

// =========================================================================
// Tests
// =========================================================================
