//! The client side of one game: menu choices, local validation, replies.
//!
//! Like the server session, `ClientSession` is a pure state machine. The
//! runner owns the console and the socket; this type only decides what to
//! send and how to interpret what comes back, returning a [`ClientEvent`]
//! for every server line so rendering stays out of the protocol logic.

use wordwire_protocol::{Message, validate_word};

use crate::SessionError;

// ---------------------------------------------------------------------------
// States and inputs
// ---------------------------------------------------------------------------

/// Lifecycle of a client session.
///
/// ```text
///   AwaitingWelcome ──(Ack)──→ MenuPending ──(guess/quit)──→ AwaitingReply
///                                   ↑                             │
///                                   └──────────(Ack)──────────────┤
///                                                                 ▼
///                                 (Perfect / End / Quit / ERR)  Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// Connected, waiting for the one-line welcome banner.
    AwaitingWelcome,
    /// The user is at the menu; nothing is in flight.
    MenuPending,
    /// A guess or quit request has been sent; waiting for the reply.
    AwaitingReply,
    /// The interaction is over.
    Closed,
}

/// A menu selection, parsed from raw console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Guess the word.
    Play,
    /// Leave the game.
    Quit,
}

impl MenuChoice {
    /// Parses the menu input: `1` plays, `2` quits, anything else is
    /// rejected and the caller shows the menu again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// What the user should be told after consuming one server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The welcome banner arrived; the game can start.
    Welcome { max_attempts: u32, text: String },
    /// A wrong guess was scored; the session goes back to the menu.
    Progress { attempts_remaining: u32, feedback: String },
    /// The guess matched the secret.
    Won,
    /// Attempts exhausted; the secret is revealed.
    Lost { attempts: u32, secret_word: String },
    /// The server rejected our traffic and closed the game.
    ServerError { text: String },
    /// The server confirmed a cooperative disconnect.
    Disconnected { text: String },
    /// The server sent something a server never sends. Closed locally.
    ProtocolViolation,
}

// ---------------------------------------------------------------------------
// ClientSession
// ---------------------------------------------------------------------------

/// Interaction state for one connection to a guess server.
#[derive(Debug, Default)]
pub struct ClientSession {
    state: ClientState,
    max_attempts: u32,
    attempts_remaining: u32,
}

impl Default for ClientState {
    fn default() -> Self {
        ClientState::AwaitingWelcome
    }
}

impl ClientSession {
    /// A fresh session, waiting for the welcome banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the single welcome line that seeds the attempt budget.
    ///
    /// # Errors
    /// Anything other than an `OK` banner closes the session and reports
    /// [`SessionError::UnexpectedWelcome`].
    pub fn on_welcome(&mut self, message: Message) -> Result<ClientEvent, SessionError> {
        if self.state != ClientState::AwaitingWelcome {
            return Err(SessionError::InvalidState(self.state));
        }
        match message {
            Message::Ack { attempts_remaining, text } => {
                self.max_attempts = attempts_remaining;
                self.attempts_remaining = attempts_remaining;
                self.state = ClientState::MenuPending;
                tracing::debug!(max_attempts = self.max_attempts, "welcome consumed");
                Ok(ClientEvent::Welcome { max_attempts: self.max_attempts, text })
            }
            other => {
                self.state = ClientState::Closed;
                Err(SessionError::UnexpectedWelcome(other.keyword()))
            }
        }
    }

    /// Validates a locally entered word and, if it passes, produces the
    /// `WORD` line to send.
    ///
    /// # Errors
    /// [`SessionError::InvalidWord`] leaves the state untouched so the
    /// caller can re-prompt without any server round trip.
    pub fn guess(&mut self, word: &str) -> Result<Message, SessionError> {
        if self.state != ClientState::MenuPending {
            return Err(SessionError::InvalidState(self.state));
        }
        validate_word(word)?;
        self.state = ClientState::AwaitingReply;
        Ok(Message::WordGuess { word: word.to_string() })
    }

    /// Produces the `QUIT` line to send.
    pub fn quit(&mut self) -> Result<Message, SessionError> {
        if self.state != ClientState::MenuPending {
            return Err(SessionError::InvalidState(self.state));
        }
        self.state = ClientState::AwaitingReply;
        Ok(Message::QuitRequest)
    }

    /// Consumes the server's reply to an in-flight guess or quit request.
    pub fn on_reply(&mut self, message: Message) -> Result<ClientEvent, SessionError> {
        if self.state != ClientState::AwaitingReply {
            return Err(SessionError::InvalidState(self.state));
        }
        let event = match message {
            Message::Perfect => {
                self.state = ClientState::Closed;
                ClientEvent::Won
            }
            Message::Ack { attempts_remaining, text } => {
                self.attempts_remaining = attempts_remaining;
                self.state = ClientState::MenuPending;
                ClientEvent::Progress { attempts_remaining, feedback: text }
            }
            Message::End { attempts, secret_word } => {
                self.state = ClientState::Closed;
                ClientEvent::Lost { attempts, secret_word }
            }
            Message::Error { text } => {
                self.state = ClientState::Closed;
                ClientEvent::ServerError { text }
            }
            Message::Quit { text } => {
                self.state = ClientState::Closed;
                ClientEvent::Disconnected { text }
            }
            // Client-to-server kinds coming back at us.
            other => {
                tracing::warn!(keyword = other.keyword(), "unexpected server message");
                self.state = ClientState::Closed;
                ClientEvent::ProtocolViolation
            }
        };
        Ok(event)
    }

    /// Records that the peer vanished (EOF or an undecodable line). The
    /// session closes without sending anything further.
    pub fn peer_closed(&mut self) {
        self.state = ClientState::Closed;
    }

    /// Attempts the server last reported as remaining; drives the menu.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// The attempt budget announced by the welcome banner.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ClientState {
        self.state
    }

    /// `true` once the interaction is over.
    pub fn is_closed(&self) -> bool {
        self.state == ClientState::Closed
    }
}

// =========================================================================
// Tests
// =========================================================================
