//! Per-connection handler: welcome, then the read-reply loop.
//!
//! The flow for one accepted connection:
//!   1. Draw a fresh secret and build a `ServerSession` around it
//!   2. Send the welcome banner
//!   3. Loop: receive a line → decode → let the session reply → send
//!   4. Tear the connection down once the session closes

use wordwire_game::WordList;
use wordwire_protocol::{Message, decode, encode};
use wordwire_session::ServerSession;
use wordwire_transport::{Connection, TcpLineConnection};

use crate::WordwireError;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    conn: TcpLineConnection,
    words: &WordList,
    max_attempts: u32,
) -> Result<(), WordwireError> {
    let conn_id = conn.id();
    tracing::info!(%conn_id, "client connected");

    let mut session = ServerSession::new(words.draw().clone(), max_attempts);
    tracing::debug!(%conn_id, secret = %session.secret(), "secret drawn");
    send_message(&conn, &session.welcome()).await?;

    while !session.is_closed() {
        let line = match conn.recv().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::info!(%conn_id, "client disconnected");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                break;
            }
        };

        tracing::debug!(
            %conn_id,
            line = %String::from_utf8_lossy(&line).trim_end(),
            "from client"
        );

        // The session decides everything, including how decode errors are
        // answered; the handler just moves bytes.
        let inbound = decode(&line).map(|decoded| decoded.message);
        let reply = session.handle(inbound);
        send_message(&conn, &reply).await?;
    }

    if let Err(e) = conn.close().await {
        tracing::debug!(%conn_id, error = %e, "close failed");
    }
    tracing::info!(%conn_id, attempts = session.attempts(), "session closed");
    Ok(())
}

/// Encodes and sends one message, logging the wire line at debug.
async fn send_message(
    conn: &TcpLineConnection,
    message: &Message,
) -> Result<(), WordwireError> {
    let bytes = encode(message);
    tracing::debug!(
        id = %conn.id(),
        line = %String::from_utf8_lossy(&bytes).trim_end(),
        "to client"
    );
    conn.send(&bytes).await.map_err(WordwireError::Transport)
}
