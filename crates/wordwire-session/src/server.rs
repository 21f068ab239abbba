//! The server side of one game: secret word, attempt budget, replies.
//!
//! A `ServerSession` is a synchronous state machine with no I/O of its own.
//! The connection handler feeds it one decode result per inbound line and
//! sends back whatever single message it returns. This keeps every game
//! rule unit-testable without a socket in sight.

use wordwire_game::{Word, evaluate};
use wordwire_protocol::{
    DecodeError, ERR_DOUBLE_SPACE, ERR_MALFORMED, ERR_NOT_ALPHABETIC,
    ERR_WRONG_COMMAND, ERR_WRONG_LENGTH, Message, QUIT_TEXT, WELCOME_TEXT,
};

// ---------------------------------------------------------------------------
// ServerState
// ---------------------------------------------------------------------------

/// Lifecycle of a server session.
///
/// ```text
///   AwaitingGuess ──(perfect / exhausted / quit / any error)──→ Closed
///         │
///         └──(wrong guess, attempts left)──→ AwaitingGuess
/// ```
///
/// There is no recovery path: every malformed or unexpected input closes
/// the session. One instance serves exactly one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for the client's next `WORD` or `QUIT` line.
    AwaitingGuess,
    /// The game is over; the connection is being torn down.
    Closed,
}

// ---------------------------------------------------------------------------
// ServerSession
// ---------------------------------------------------------------------------

/// One game's worth of server state: the secret, the attempt counter, and
/// the reply logic.
#[derive(Debug)]
pub struct ServerSession {
    secret: Word,
    max_attempts: u32,
    attempts: u32,
    state: ServerState,
}

impl ServerSession {
    /// Starts a session around a freshly drawn secret.
    pub fn new(secret: Word, max_attempts: u32) -> Self {
        ServerSession {
            secret,
            max_attempts,
            attempts: 0,
            state: ServerState::AwaitingGuess,
        }
    }

    /// The welcome banner, sent once right after the connection opens.
    /// Carries the attempt budget so the client can seed its menu.
    pub fn welcome(&self) -> Message {
        Message::Ack {
            attempts_remaining: self.max_attempts,
            text: WELCOME_TEXT.to_string(),
        }
    }

    /// Consumes one inbound decode result and produces the reply.
    ///
    /// After the returned message is sent, check [`is_closed`]: a `Perfect`,
    /// `End`, `Quit`, or `ERR` reply means the connection must be torn down.
    ///
    /// [`is_closed`]: Self::is_closed
    pub fn handle(&mut self, inbound: Result<Message, DecodeError>) -> Message {
        if self.state == ServerState::Closed {
            tracing::warn!("message received after session close");
            return self.fail(ERR_WRONG_COMMAND);
        }
        match inbound {
            Ok(Message::WordGuess { word }) => self.on_guess(&word),
            Ok(Message::QuitRequest) => {
                tracing::info!(attempts = self.attempts, "client quit");
                self.state = ServerState::Closed;
                Message::Quit { text: QUIT_TEXT.to_string() }
            }
            // Server-to-client kinds are not valid inbound traffic.
            Ok(other) => {
                tracing::warn!(keyword = other.keyword(), "unexpected inbound message");
                self.fail(ERR_WRONG_COMMAND)
            }
            Err(error) => {
                tracing::warn!(%error, "malformed line from client");
                self.fail(error_text(error))
            }
        }
    }

    fn on_guess(&mut self, word: &str) -> Message {
        // The codec only emits validated guesses; a bad one here means the
        // caller bypassed it, which gets the generic malformed reply.
        let Ok(guess) = Word::new(word) else {
            return self.fail(ERR_MALFORMED);
        };

        let feedback = evaluate(&self.secret, &guess);
        tracing::debug!(guess = %guess, feedback = %feedback, "guess scored");

        if feedback.is_perfect() {
            tracing::info!(attempts = self.attempts + 1, "word guessed");
            self.state = ServerState::Closed;
            return Message::Perfect;
        }

        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            tracing::info!(secret = %self.secret, "attempts exhausted");
            self.state = ServerState::Closed;
            return Message::End {
                attempts: self.attempts,
                secret_word: self.secret.to_string(),
            };
        }

        Message::Ack {
            attempts_remaining: self.max_attempts.saturating_sub(self.attempts),
            text: feedback.to_string(),
        }
    }

    fn fail(&mut self, text: &str) -> Message {
        self.state = ServerState::Closed;
        Message::Error { text: text.to_string() }
    }

    /// `true` once the game is over and the connection should be closed.
    pub fn is_closed(&self) -> bool {
        self.state == ServerState::Closed
    }

    /// Attempts consumed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The secret word this session was built around.
    pub fn secret(&self) -> &Word {
        &self.secret
    }
}

/// Maps a decode error to its `ERR` payload.
fn error_text(error: DecodeError) -> &'static str {
    match error {
        DecodeError::UnknownCommand => ERR_WRONG_COMMAND,
        DecodeError::DoubleSpace => ERR_DOUBLE_SPACE,
        DecodeError::NotAlphabetic => ERR_NOT_ALPHABETIC,
        DecodeError::WrongLength => ERR_WRONG_LENGTH,
        DecodeError::Truncated | DecodeError::Malformed => ERR_MALFORMED,
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str, max_attempts: u32) -> ServerSession {
        ServerSession::new(Word::new(secret).expect("valid"), max_attempts)
    }

    fn guess(word: &str) -> Result<Message, DecodeError> {
        Ok(Message::WordGuess { word: word.to_string() })
    }

    // =====================================================================
    // Welcome
    // =====================================================================

    #[test]
    fn test_welcome_carries_the_attempt_budget() {
        let s = session("fessa", 6);
        assert_eq!(
            s.welcome(),
            Message::Ack {
                attempts_remaining: 6,
                text: WELCOME_TEXT.to_string()
            }
        );
        assert!(!s.is_closed());
    }

    // =====================================================================
    // Guessing
    // =====================================================================

    #[test]
    fn test_wrong_guess_returns_feedback_and_stays_open() {
        let mut s = session("fessa", 6);
        let reply = s.handle(guess("hello"));
        assert_eq!(
            reply,
            Message::Ack { attempts_remaining: 5, text: "-*---".to_string() }
        );
        assert!(!s.is_closed());
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn test_attempts_remaining_counts_down() {
        let mut s = session("fessa", 6);
        for expected_remaining in (1..=5).rev() {
            match s.handle(guess("hello")) {
                Message::Ack { attempts_remaining, .. } => {
                    assert_eq!(attempts_remaining, expected_remaining);
                }
                other => panic!("expected Ack, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_perfect_guess_wins_and_closes() {
        let mut s = session("fessa", 6);
        assert_eq!(s.handle(guess("fessa")), Message::Perfect);
        assert!(s.is_closed());
    }

    #[test]
    fn test_perfect_guess_on_last_attempt_still_wins() {
        let mut s = session("fessa", 2);
        let _ = s.handle(guess("hello"));
        assert_eq!(s.handle(guess("fessa")), Message::Perfect);
        assert!(s.is_closed());
    }

    #[test]
    fn test_exhaustion_reveals_the_secret_and_closes() {
        let mut s = session("fessa", 6);
        for _ in 0..5 {
            let _ = s.handle(guess("hello"));
        }
        let reply = s.handle(guess("hello"));
        assert_eq!(
            reply,
            Message::End { attempts: 6, secret_word: "fessa".to_string() }
        );
        assert!(s.is_closed());
    }

    #[test]
    fn test_exhaustion_never_answers_with_an_ack() {
        let mut s = session("fessa", 1);
        match s.handle(guess("hello")) {
            Message::End { .. } => {}
            other => panic!("single-attempt game must end, got {other:?}"),
        }
    }

    // =====================================================================
    // Quit
    // =====================================================================

    #[test]
    fn test_quit_confirms_without_revealing_the_secret() {
        let mut s = session("fessa", 6);
        let reply = s.handle(Ok(Message::QuitRequest));
        match reply {
            Message::Quit { ref text } => {
                assert!(!text.contains("fessa"), "quit must not leak the secret");
            }
            other => panic!("expected Quit, got {other:?}"),
        }
        assert!(s.is_closed());
    }

    #[test]
    fn test_quit_works_mid_game() {
        let mut s = session("fessa", 6);
        let _ = s.handle(guess("hello"));
        let _ = s.handle(guess("mondo"));
        assert!(matches!(s.handle(Ok(Message::QuitRequest)), Message::Quit { .. }));
        assert!(s.is_closed());
    }

    // =====================================================================
    // Errors are always fatal
    // =====================================================================

    #[test]
    fn test_every_decode_error_maps_to_its_err_text_and_closes() {
        let cases = [
            (DecodeError::UnknownCommand, ERR_WRONG_COMMAND),
            (DecodeError::DoubleSpace, ERR_DOUBLE_SPACE),
            (DecodeError::NotAlphabetic, ERR_NOT_ALPHABETIC),
            (DecodeError::WrongLength, ERR_WRONG_LENGTH),
            (DecodeError::Truncated, ERR_MALFORMED),
            (DecodeError::Malformed, ERR_MALFORMED),
        ];
        for (error, expected) in cases {
            let mut s = session("fessa", 6);
            let reply = s.handle(Err(error));
            assert_eq!(
                reply,
                Message::Error { text: expected.to_string() },
                "for {error:?}"
            );
            assert!(s.is_closed(), "session must close after {error:?}");
        }
    }

    #[test]
    fn test_server_to_client_message_inbound_is_a_wrong_command() {
        let inbound = [
            Message::Ack { attempts_remaining: 3, text: "hi".into() },
            Message::Perfect,
            Message::End { attempts: 6, secret_word: "fessa".into() },
            Message::Quit { text: "bye".into() },
            Message::Error { text: "nope".into() },
        ];
        for message in inbound {
            let mut s = session("fessa", 6);
            let reply = s.handle(Ok(message.clone()));
            assert_eq!(
                reply,
                Message::Error { text: ERR_WRONG_COMMAND.to_string() },
                "for {message:?}"
            );
            assert!(s.is_closed());
        }
    }

    #[test]
    fn test_decode_error_does_not_consume_an_attempt() {
        let mut s = session("fessa", 6);
        let _ = s.handle(Err(DecodeError::DoubleSpace));
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn test_handle_after_close_keeps_failing() {
        let mut s = session("fessa", 6);
        let _ = s.handle(Ok(Message::QuitRequest));
        assert!(matches!(s.handle(guess("hello")), Message::Error { .. }));
        assert!(s.is_closed());
    }
}
