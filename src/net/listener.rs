//! Listener abstraction.
//!
//! A [`Listener`] yields ready-to-use [`Connection`]s. The transport opens a
//! [`TcpStreamListener`] or a [`TlsListener`] itself, or adopts any other
//! implementation handed to it.

use super::conn::Connection;
use crate::ops::observability::{TransportEvent, TransportObserver};
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;

/// Source of inbound connections.
#[async_trait]
pub trait Listener: Send + Sync {
    /// Wait for the next inbound connection.
    async fn accept(&self) -> io::Result<Connection>;

    /// Address the listener is bound to.
    fn local_addr(&self) -> io::Result<SocketAddr>;

    /// Whether accepted connections are TLS-protected.
    fn is_encrypted(&self) -> bool {
        false
    }
}

/// A bare tokio listener, as handed to `Transport::from_listener`.
///
/// Accepted sockets are left exactly as the kernel returns them: the
/// transport's `nodelay` setting is not applied. Wrap the listener in
/// [`TcpStreamListener`] to have it applied.
#[async_trait]
impl Listener for TcpListener {
    async fn accept(&self) -> io::Result<Connection> {
        let (stream, peer_addr) = TcpListener::accept(self).await?;
        let local_addr = stream.local_addr()?;
        Ok(Connection::new(stream, local_addr, peer_addr, false))
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        TcpListener::local_addr(self)
    }
}

fn configure_stream(stream: &TcpStream, nodelay: bool) {
    if nodelay {
        let _ = stream.set_nodelay(true);
    }
}

/// Plaintext TCP listener.
#[derive(Debug)]
pub struct TcpStreamListener {
    inner: TcpListener,
    bound_addr: SocketAddr,
    nodelay: bool,
}

impl TcpStreamListener {
    /// Wrap a bound tokio listener.
    pub fn new(inner: TcpListener, nodelay: bool) -> io::Result<Self> {
        let bound_addr = inner.local_addr()?;
        Ok(Self {
            inner,
            bound_addr,
            nodelay,
        })
    }
}

#[async_trait]
impl Listener for TcpStreamListener {
    async fn accept(&self) -> io::Result<Connection> {
        let (stream, peer_addr) = self.inner.accept().await?;
        configure_stream(&stream, self.nodelay);
        let local_addr = stream.local_addr().unwrap_or(self.bound_addr);
        Ok(Connection::new(stream, local_addr, peer_addr, false))
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(self.bound_addr)
    }
}

/// Inbound connections whose handshake finished but that `accept` has not
/// yet handed out.
const READY_BACKLOG: usize = 64;

/// TCP listener that completes a server-side TLS handshake on every
/// accepted connection.
///
/// A background task accepts sockets and runs each handshake in its own
/// task, so a slow or silent peer never delays the others. A peer whose
/// handshake fails or stalls past the handshake timeout is reported to the
/// observer and dropped. Only listener errors are returned from `accept`.
///
/// Must be created inside a tokio runtime. The socket is released once the
/// listener is dropped and the runtime cancels the background task.
pub struct TlsListener {
    bound_addr: SocketAddr,
    ready: tokio::sync::Mutex<mpsc::Receiver<io::Result<Connection>>>,
    accept_task: JoinHandle<()>,
    handshake_timeout: Duration,
    nodelay: bool,
}

impl TlsListener {
    /// Wrap a bound tokio listener with a TLS acceptor.
    pub fn new(
        inner: TcpListener,
        acceptor: TlsAcceptor,
        handshake_timeout: Duration,
        nodelay: bool,
        observer: Arc<dyn TransportObserver>,
    ) -> io::Result<Self> {
        let bound_addr = inner.local_addr()?;
        let (ready_tx, ready_rx) = mpsc::channel(READY_BACKLOG);
        let handshaker = Handshaker {
            acceptor,
            handshake_timeout,
            observer,
            ready_tx,
        };
        let accept_task = tokio::spawn(accept_loop(inner, bound_addr, nodelay, handshaker));

        Ok(Self {
            bound_addr,
            ready: tokio::sync::Mutex::new(ready_rx),
            accept_task,
            handshake_timeout,
            nodelay,
        })
    }
}

#[derive(Clone)]
struct Handshaker {
    acceptor: TlsAcceptor,
    handshake_timeout: Duration,
    observer: Arc<dyn TransportObserver>,
    ready_tx: mpsc::Sender<io::Result<Connection>>,
}

impl Handshaker {
    async fn run(self, stream: TcpStream, local_addr: SocketAddr, peer_addr: SocketAddr) {
        let error = match tokio::time::timeout(self.handshake_timeout, self.acceptor.accept(stream))
            .await
        {
            Ok(Ok(tls_stream)) => {
                let conn = Connection::new(tls_stream, local_addr, peer_addr, true);
                // The listener may already be gone.
                let _ = self.ready_tx.send(Ok(conn)).await;
                return;
            }
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!("handshake timed out after {:?}", self.handshake_timeout),
        };

        self.observer
            .on_event(&TransportEvent::HandshakeFailed { peer_addr, error });
    }
}

async fn accept_loop(
    inner: TcpListener,
    bound_addr: SocketAddr,
    nodelay: bool,
    handshaker: Handshaker,
) {
    loop {
        tokio::select! {
            _ = handshaker.ready_tx.closed() => break,
            accepted = inner.accept() => match accepted {
                Ok((stream, peer_addr)) => {
                    // Configure TCP options before TLS handshake
                    configure_stream(&stream, nodelay);
                    let local_addr = stream.local_addr().unwrap_or(bound_addr);
                    tokio::spawn(handshaker.clone().run(stream, local_addr, peer_addr));
                }
                Err(e) => {
                    if handshaker.ready_tx.send(Err(e)).await.is_err() {
                        break;
                    }
                }
            },
        }
    }
}

#[async_trait]
impl Listener for TlsListener {
    async fn accept(&self) -> io::Result<Connection> {
        let mut ready = self.ready.lock().await;
        match ready.recv().await {
            Some(result) => result,
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "TLS accept loop stopped",
            )),
        }
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(self.bound_addr)
    }

    fn is_encrypted(&self) -> bool {
        true
    }
}

impl Drop for TlsListener {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

impl std::fmt::Debug for TlsListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsListener")
            .field("bound_addr", &self.bound_addr)
            .field("handshake_timeout", &self.handshake_timeout)
            .field("nodelay", &self.nodelay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_tokio_listener_as_listener() {
        let inner = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = inner.local_addr().unwrap();
        let listener: Arc<dyn Listener> = Arc::new(inner);
        assert!(!listener.is_encrypted());
        assert_eq!(listener.local_addr().unwrap(), addr);

        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(b"abc").await.unwrap();
        });

        let mut conn = listener.accept().await.unwrap();
        let mut buf = [0u8; 3];
        conn.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"abc");
        assert!(!conn.encrypted);
        assert_eq!(conn.local_addr, addr);
        client.await.unwrap();
    }

    #[tokio::test]
    async fn test_stream_listener_reports_bound_addr() {
        let inner = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = inner.local_addr().unwrap();
        let listener = TcpStreamListener::new(inner, true).unwrap();
        assert_eq!(Listener::local_addr(&listener).unwrap(), addr);
        assert!(addr.port() > 0);
    }
}
