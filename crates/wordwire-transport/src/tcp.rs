//! TCP line transport built on `tokio::net`.
//!
//! Framing rule: one message per `\n`-terminated line, at most
//! [`MAX_LINE_BYTES`] per line. `recv` hands a longer line over truncated
//! at the bound without its terminator, so the protocol layer reports it
//! malformed and the session closes; the transport never buffers an
//! unbounded amount for one message.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use wordwire_protocol::MAX_LINE_BYTES;

use crate::{Connection, ConnectionId, Transport, TransportError};

/// Counter for generating unique connection IDs.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

// ---------------------------------------------------------------------------
// TcpLineTransport
// ---------------------------------------------------------------------------

/// A TCP-based [`Transport`] that listens for incoming connections.
pub struct TcpLineTransport {
    listener: TcpListener,
}

impl TcpLineTransport {
    /// Binds a new TCP line transport to the given address.
    pub async fn bind(addr: &str) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(TransportError::BindFailed)?;
        tracing::info!(addr, "TCP line transport listening");
        Ok(Self { listener })
    }

    /// Returns the local address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

impl Transport for TcpLineTransport {
    type Connection = TcpLineConnection;
    type Error = TransportError;

    async fn accept(&mut self) -> Result<Self::Connection, Self::Error> {
        let (stream, addr) = self
            .listener
            .accept()
            .await
            .map_err(TransportError::AcceptFailed)?;

        let conn = TcpLineConnection::from_stream(stream);
        tracing::debug!(id = %conn.id(), %addr, "accepted TCP connection");
        Ok(conn)
    }

    async fn shutdown(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TcpLineConnection
// ---------------------------------------------------------------------------

/// A single TCP connection framing `\n`-terminated lines.
///
/// Read and write halves sit behind their own locks so `send` and `recv`
/// take `&self` and can be driven from the same task without ceremony.
pub struct TcpLineConnection {
    id: ConnectionId,
    reader: Mutex<BufReader<OwnedReadHalf>>,
    writer: Mutex<OwnedWriteHalf>,
}

impl TcpLineConnection {
    /// Connects to a listening peer. This is the client-side entry point.
    pub async fn connect(addr: &str) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(TransportError::ConnectFailed)?;
        let conn = Self::from_stream(stream);
        tracing::debug!(id = %conn.id(), addr, "connected");
        Ok(conn)
    }

    fn from_stream(stream: TcpStream) -> Self {
        let id = ConnectionId::new(
            NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
        );
        let (read_half, write_half) = stream.into_split();
        Self {
            id,
            reader: Mutex::new(BufReader::new(read_half)),
            writer: Mutex::new(write_half),
        }
    }
}

impl Connection for TcpLineConnection {
    type Error = TransportError;

    async fn send(&self, data: &[u8]) -> Result<(), Self::Error> {
        let mut writer = self.writer.lock().await;
        writer
            .write_all(data)
            .await
            .map_err(TransportError::SendFailed)?;
        writer.flush().await.map_err(TransportError::SendFailed)
    }

    /// Reads exactly one line, terminator included, up to the byte bound.
    ///
    /// - Peer closed with nothing buffered: `Ok(None)`.
    /// - Peer closed mid-line: the unterminated partial line.
    /// - Line longer than the bound: the first [`MAX_LINE_BYTES`] bytes,
    ///   unterminated; the rest stays buffered.
    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        let mut reader = self.reader.lock().await;
        let mut line: Vec<u8> = Vec::new();

        loop {
            let available = reader
                .fill_buf()
                .await
                .map_err(TransportError::ReceiveFailed)?;
            if available.is_empty() {
                return if line.is_empty() { Ok(None) } else { Ok(Some(line)) };
            }

            let room = MAX_LINE_BYTES - line.len();
            if let Some(pos) = available.iter().position(|&byte| byte == b'\n') {
                if pos < room {
                    line.extend_from_slice(&available[..=pos]);
                    reader.consume(pos + 1);
                    return Ok(Some(line));
                }
                // The terminator lies beyond the byte budget: deliver the
                // capped prefix without it.
                line.extend_from_slice(&available[..room]);
                reader.consume(room);
                return Ok(Some(line));
            }

            if available.len() >= room {
                line.extend_from_slice(&available[..room]);
                reader.consume(room);
                return Ok(Some(line));
            }

            let taken = available.len();
            line.extend_from_slice(available);
            reader.consume(taken);
        }
    }

    async fn close(&self) -> Result<(), Self::Error> {
        self.writer
            .lock()
            .await
            .shutdown()
            .await
            .map_err(TransportError::SendFailed)
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}
