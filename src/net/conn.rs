//! Connection type returned by accept and dial.
//!
//! A [`Connection`] is a bidirectional byte stream, plaintext or already
//! TLS-negotiated, plus the metadata callers need for logging.

use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf, ReadHalf, WriteHalf};

/// Combined trait for the streams a connection can carry.
pub trait AsyncStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> AsyncStream for T {}

/// Boxed byte stream.
pub type BoxedStream = Box<dyn AsyncStream>;

/// Connection identifier, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl ConnectionId {
    /// Allocate the next identifier.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// An established inbound or outbound connection.
pub struct Connection {
    /// Connection ID.
    pub id: ConnectionId,

    /// Remote address.
    pub peer_addr: SocketAddr,

    /// Local address.
    pub local_addr: SocketAddr,

    /// Whether the stream is TLS-protected.
    pub encrypted: bool,

    /// Connection creation time.
    pub created_at: Instant,

    stream: BoxedStream,
}

impl Connection {
    /// Wrap an established stream.
    pub fn new<S>(stream: S, local_addr: SocketAddr, peer_addr: SocketAddr, encrypted: bool) -> Self
    where
        S: AsyncStream + 'static,
    {
        Self {
            id: ConnectionId::next(),
            peer_addr,
            local_addr,
            encrypted,
            created_at: Instant::now(),
            stream: Box::new(stream),
        }
    }

    /// Split into read and write halves.
    pub fn into_split(self) -> (ReadHalf<BoxedStream>, WriteHalf<BoxedStream>) {
        tokio::io::split(self.stream)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("peer_addr", &self.peer_addr)
            .field("local_addr", &self.local_addr)
            .field("encrypted", &self.encrypted)
            .finish_non_exhaustive()
    }
}

impl AsyncRead for Connection {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut *self.stream).poll_read(cx, buf)
    }
}

impl AsyncWrite for Connection {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut *self.stream).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut *self.stream).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut *self.stream).poll_shutdown(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn addr(port: u16) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    #[test]
    fn test_connection_id_display() {
        let id = ConnectionId(42);
        assert_eq!(format!("{}", id), "conn-42");
    }

    #[test]
    fn test_connection_ids_are_unique() {
        let a = ConnectionId::next();
        let b = ConnectionId::next();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_connection_delegates_io() {
        let (client, server) = tokio::io::duplex(64);
        let mut left = Connection::new(client, addr(1), addr(2), false);
        let mut right = Connection::new(server, addr(2), addr(1), false);

        left.write_all(b"ping").await.unwrap();
        let mut buf = [0u8; 4];
        right.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"ping");
        assert_ne!(left.id, right.id);
    }

    #[tokio::test]
    async fn test_connection_split() {
        let (client, server) = tokio::io::duplex(64);
        let conn = Connection::new(client, addr(1), addr(2), false);
        let mut peer = Connection::new(server, addr(2), addr(1), false);

        let (mut reader, mut writer) = conn.into_split();
        writer.write_all(b"hello").await.unwrap();

        let mut buf = [0u8; 5];
        peer.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"hello");

        peer.write_all(b"world").await.unwrap();
        reader.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"world");
    }
}
