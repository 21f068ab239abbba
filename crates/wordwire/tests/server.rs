//! End-to-end tests for the guess server over real TCP.
//!
//! Each test starts a server on a random port with a single-word candidate
//! list (so the secret is known) and speaks the wire format directly
//! through a raw line connection, asserting exact reply bytes.

use std::time::Duration;

use wordwire::prelude::*;
use wordwire_transport::{Connection, TcpLineConnection};

// =========================================================================
// Helpers
// =========================================================================

/// Starts a server whose secret is always `fessa` and returns its address.
async fn start_server(max_attempts: u32) -> String {
    let server = GuessServerBuilder::new()
        .bind("127.0.0.1:0")
        .max_attempts(max_attempts)
        .word_list(WordList::new(["fessa"]).expect("valid list"))
        .build()
        .await
        .expect("server should build");

    let addr = server
        .local_addr()
        .expect("should have local addr")
        .to_string();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(10)).await;
    addr
}

async fn connect(addr: &str) -> TcpLineConnection {
    TcpLineConnection::connect(addr).await.expect("should connect")
}

/// Receives one line and returns it as text.
async fn recv_line(conn: &TcpLineConnection) -> String {
    let line = tokio::time::timeout(Duration::from_secs(5), conn.recv())
        .await
        .expect("timeout")
        .expect("recv")
        .expect("line");
    String::from_utf8(line).expect("utf-8")
}

/// Connects and drains the welcome banner.
async fn connect_welcomed(addr: &str) -> TcpLineConnection {
    let conn = connect(addr).await;
    let _ = recv_line(&conn).await;
    conn
}

/// Asserts that the connection is closed: the next recv yields EOF.
async fn assert_closed(conn: &TcpLineConnection) {
    let next = tokio::time::timeout(Duration::from_secs(5), conn.recv())
        .await
        .expect("timeout")
        .expect("recv");
    assert_eq!(next, None, "server should have closed the connection");
}

// =========================================================================
// Welcome
// =========================================================================

#[tokio::test]
async fn test_welcome_banner_announces_the_attempt_budget() {
    let addr = start_server(6).await;
    let conn = connect(&addr).await;

    assert_eq!(recv_line(&conn).await, "OK 6 Welcome on the server!\n");
}

#[tokio::test]
async fn test_welcome_banner_follows_the_configured_budget() {
    let addr = start_server(9).await;
    let conn = connect(&addr).await;

    assert_eq!(recv_line(&conn).await, "OK 9 Welcome on the server!\n");
}

// =========================================================================
// Guessing
// =========================================================================

#[tokio::test]
async fn test_wrong_guess_gets_per_letter_feedback() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"WORD hello\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "OK 5 -*---\n");
}

#[tokio::test]
async fn test_attempts_count_down_across_guesses() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    for remaining in (1..=5).rev() {
        conn.send(b"WORD hello\n").await.expect("send");
        let line = recv_line(&conn).await;
        assert_eq!(line, format!("OK {remaining} -*---\n"));
    }
}

#[tokio::test]
async fn test_perfect_guess_wins_and_closes() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"WORD fessa\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "OK PERFECT\n");
    assert_closed(&conn).await;
}

#[tokio::test]
async fn test_exhaustion_reveals_the_secret_and_closes() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    for _ in 0..5 {
        conn.send(b"WORD hello\n").await.expect("send");
        let _ = recv_line(&conn).await;
    }
    conn.send(b"WORD hello\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "END 6 fessa\n");
    assert_closed(&conn).await;
}

// =========================================================================
// Quit
// =========================================================================

#[tokio::test]
async fn test_quit_confirms_without_revealing_the_secret() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"QUIT\n").await.expect("send");
    let line = recv_line(&conn).await;
    assert!(line.starts_with("QUIT "), "got {line:?}");
    assert!(!line.contains("fessa"), "quit must not leak the secret");
    assert_closed(&conn).await;
}

// =========================================================================
// Malformed input is session-fatal
// =========================================================================

#[tokio::test]
async fn test_unknown_command_is_fatal() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"JUMP hello\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "ERR Wrong command!\n");
    assert_closed(&conn).await;
}

#[tokio::test]
async fn test_double_space_is_fatal() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"WORD  hello\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "ERR Double space present!\n");
    assert_closed(&conn).await;
}

#[tokio::test]
async fn test_wrong_length_is_fatal() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"WORD hell\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "ERR Word is not 5 letters!\n");
    assert_closed(&conn).await;
}

#[tokio::test]
async fn test_non_alphabetic_guess_is_fatal() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    conn.send(b"WORD hell0\n").await.expect("send");
    assert_eq!(recv_line(&conn).await, "ERR Word is not alphabetic!\n");
    assert_closed(&conn).await;
}

#[tokio::test]
async fn test_unterminated_line_is_fatal() {
    let addr = start_server(6).await;
    let conn = connect_welcomed(&addr).await;

    // No terminator, then half-close so the partial line is delivered.
    conn.send(b"WORD hello").await.expect("send");
    conn.close().await.expect("close");
    assert_eq!(recv_line(&conn).await, "ERR Malformed command!\n");
}

// =========================================================================
// Sequential service
// =========================================================================

#[tokio::test]
async fn test_next_client_is_served_after_the_current_session_ends() {
    let addr = start_server(6).await;

    let first = connect(&addr).await;
    assert_eq!(recv_line(&first).await, "OK 6 Welcome on the server!\n");

    // While the first session is live, the second client connects but gets
    // no welcome: the server plays one game at a time.
    let second = connect(&addr).await;
    let early = tokio::time::timeout(Duration::from_millis(100), second.recv()).await;
    assert!(early.is_err(), "second client must wait for the first game");

    first.send(b"QUIT\n").await.expect("send");
    let _ = recv_line(&first).await;

    assert_eq!(recv_line(&second).await, "OK 6 Welcome on the server!\n");
}

#[tokio::test]
async fn test_fresh_session_gets_a_fresh_attempt_budget() {
    let addr = start_server(6).await;

    let first = connect_welcomed(&addr).await;
    for _ in 0..3 {
        first.send(b"WORD hello\n").await.expect("send");
        let _ = recv_line(&first).await;
    }
    first.send(b"QUIT\n").await.expect("send");
    let _ = recv_line(&first).await;

    // The next connection starts over at the full budget.
    let second = connect(&addr).await;
    assert_eq!(recv_line(&second).await, "OK 6 Welcome on the server!\n");
    second.send(b"WORD hello\n").await.expect("send");
    assert_eq!(recv_line(&second).await, "OK 5 -*---\n");
}
