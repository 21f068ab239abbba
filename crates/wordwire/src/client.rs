//! Interactive client runner: console in, wire lines out.
//!
//! All game decisions live in [`ClientSession`]; this module owns the two
//! blocking resources around it, stdin and the socket, and renders the
//! session's [`ClientEvent`]s to stderr. The only loops here are the two
//! local re-prompt loops (menu choice, word entry); every server exchange
//! is strictly one request, one reply.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use wordwire_protocol::{Message, decode, encode};
use wordwire_session::{ClientEvent, ClientSession, MenuChoice, SessionError};
use wordwire_transport::{Connection, TcpLineConnection};

use crate::WordwireError;

/// Connects to a guess server and plays one interactive session.
///
/// Returns once the game is over, the user quits, or the server goes away.
/// Malformed server traffic closes the session locally without sending
/// anything further.
pub async fn run_client(addr: &str) -> Result<(), WordwireError> {
    let conn = TcpLineConnection::connect(addr).await?;
    tracing::info!(addr, "connected to server");

    let mut session = ClientSession::new();

    // The one-line welcome banner seeds the attempt budget.
    let Some(message) = recv_message(&conn).await? else {
        eprintln!("Server closed the connection before the game started.");
        return Ok(());
    };
    let event = session.on_welcome(message)?;
    render(&event);

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    while !session.is_closed() {
        let outbound = match prompt_menu(&mut input, &session).await? {
            Some(MenuChoice::Play) => {
                match prompt_word(&mut input, &mut session).await? {
                    Some(message) => message,
                    None => break, // stdin closed
                }
            }
            Some(MenuChoice::Quit) => session.quit()?,
            None => break, // stdin closed
        };

        conn.send(&encode(&outbound)).await?;

        match recv_message(&conn).await? {
            Some(message) => {
                let event = session.on_reply(message)?;
                render(&event);
            }
            None => {
                tracing::warn!("server went away mid-game");
                session.peer_closed();
            }
        }
    }

    let _ = conn.close().await;
    Ok(())
}

/// Receives and decodes one server line.
///
/// `Ok(None)` covers both a clean peer close and a line the codec rejects:
/// in either case the caller stops talking, per the local-fatal policy.
async fn recv_message(
    conn: &TcpLineConnection,
) -> Result<Option<Message>, WordwireError> {
    let Some(line) = conn.recv().await? else {
        return Ok(None);
    };
    match decode(&line) {
        Ok(decoded) => {
            if decoded.lenient_int {
                tracing::warn!("server line carried a malformed count field");
            }
            Ok(Some(decoded.message))
        }
        Err(error) => {
            tracing::warn!(%error, "malformed server line");
            Ok(None)
        }
    }
}

/// Shows the menu until the user picks a valid option.
/// `Ok(None)` means stdin was closed.
async fn prompt_menu(
    input: &mut Lines<BufReader<Stdin>>,
    session: &ClientSession,
) -> Result<Option<MenuChoice>, WordwireError> {
    loop {
        eprintln!("Choose an option:");
        eprintln!(
            "1. Try to guess the word. {} attempts remaining.",
            session.attempts_remaining()
        );
        eprintln!("2. Leave execution.");
        eprint!("Choice > ");

        let Some(line) =
            input.next_line().await.map_err(WordwireError::Console)?
        else {
            return Ok(None);
        };
        if let Some(choice) = MenuChoice::parse(&line) {
            return Ok(Some(choice));
        }
    }
}

/// Asks for a word until it passes local validation, then returns the
/// `WORD` line to send. Nothing reaches the server while this loops.
async fn prompt_word(
    input: &mut Lines<BufReader<Stdin>>,
    session: &mut ClientSession,
) -> Result<Option<Message>, WordwireError> {
    loop {
        eprint!("\nGuess the 5 letter word: ");

        let Some(line) =
            input.next_line().await.map_err(WordwireError::Console)?
        else {
            return Ok(None);
        };
        match session.guess(line.trim()) {
            Ok(message) => return Ok(Some(message)),
            Err(SessionError::InvalidWord(error)) => eprintln!("{error}"),
            Err(error) => return Err(error.into()),
        }
    }
}

/// Renders one session event for the player.
fn render(event: &ClientEvent) {
    match event {
        ClientEvent::Welcome { text, .. } => eprintln!("{text}"),
        ClientEvent::Progress { feedback, .. } => {
            eprintln!("Wrong word, try again! {feedback}");
        }
        ClientEvent::Won => {
            eprintln!("Good job, you guessed the word! Thanks for playing!");
        }
        ClientEvent::Lost { secret_word, .. } => {
            eprintln!(
                "No more attempts left. Thanks for playing! The word was: \"{secret_word}\""
            );
        }
        ClientEvent::ServerError { text } => eprintln!("{text}"),
        ClientEvent::Disconnected { text } => eprintln!("{text}"),
        ClientEvent::ProtocolViolation => eprintln!("Malformed message..."),
    }
}
