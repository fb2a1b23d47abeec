//! Transport for inter-node communication.
//!
//! A [`Transport`] binds a listening socket, accepts inbound connections and
//! dials outbound ones, optionally over TLS. It performs no retries and hands
//! every connection to the caller as soon as it is established.
//!
//! # Lifecycle
//!
//! ```text
//!   new / new_tls ──► Created ──open──► Listening ──close──► Closed
//!   from_listener ──► Adopted ─────────────────────close──► Closed
//! ```
//!
//! `close` on a `Created` transport is a no-op. `Closed` is terminal.

use super::conn::Connection;
use super::listener::{Listener, TcpStreamListener, TlsListener};
use super::tls::{
    client_config, server_name_for, split_host_port, CertificateLoader, PemCertificateLoader,
    TrustStore,
};
use crate::core::config::TransportConfig;
use crate::core::error::{TransportError, TransportResult};
use crate::ops::observability::{TracingObserver, TransportEvent, TransportObserver};
use parking_lot::{Mutex, RwLock};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::watch;
use tokio_rustls::{TlsAcceptor, TlsConnector};

/// Default server-side TLS handshake timeout.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Address other nodes use to reach this node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TransportAddr {
    hostname: String,
}

impl TransportAddr {
    /// Create an address from a hostname or `host:port` string.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    /// Network kind.
    pub fn network(&self) -> &'static str {
        "tcp"
    }

    /// The advertised hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Check if no address is known.
    pub fn is_empty(&self) -> bool {
        self.hostname.is_empty()
    }
}

impl std::fmt::Display for TransportAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hostname)
    }
}

/// Transport lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// Constructed, no listener yet.
    Created,
    /// Listener opened by `open`.
    Listening,
    /// Listener supplied at construction.
    Adopted,
    /// Listener released.
    Closed,
}

struct Inner {
    state: TransportState,
    listener: Option<Arc<dyn Listener>>,
}

/// Network layer for inter-node communication.
pub struct Transport {
    inner: RwLock<Inner>,
    shutdown_tx: watch::Sender<bool>,
    connector: Mutex<Option<TlsConnector>>,

    advertised_addr: Option<TransportAddr>,

    /// Path to local X.509 cert. Empty means a plaintext listener.
    cert_path: String,
    /// Path to the key for `cert_path`.
    key_path: String,
    /// Remote nodes use encrypted communication.
    remote_encrypted: bool,
    /// Skip verification of remote node certs.
    skip_verify: bool,
    /// Local IP outbound dials are bound to.
    source_ip: Option<IpAddr>,

    trust_store: Option<TrustStore>,
    handshake_timeout: Duration,
    nodelay: bool,
    certificate_loader: Arc<dyn CertificateLoader>,
    observer: Arc<dyn TransportObserver>,
}

impl Transport {
    fn with_parts(
        state: TransportState,
        listener: Option<Arc<dyn Listener>>,
        advertised_addr: Option<TransportAddr>,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            inner: RwLock::new(Inner { state, listener }),
            shutdown_tx,
            connector: Mutex::new(None),
            advertised_addr,
            cert_path: String::new(),
            key_path: String::new(),
            remote_encrypted: false,
            skip_verify: false,
            source_ip: None,
            trust_store: None,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            nodelay: true,
            certificate_loader: Arc::new(PemCertificateLoader),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Create an unencrypted transport.
    pub fn new() -> Self {
        Self::with_parts(TransportState::Created, None, None)
    }

    /// Create a TLS transport.
    ///
    /// The listener presents the certificate at `cert_path` once opened, and
    /// outbound dials negotiate TLS, skipping peer verification when
    /// `skip_verify` is set.
    pub fn new_tls(
        cert_path: impl Into<String>,
        key_path: impl Into<String>,
        skip_verify: bool,
    ) -> Self {
        let mut transport = Self::new();
        transport.cert_path = cert_path.into();
        transport.key_path = key_path.into();
        transport.remote_encrypted = true;
        transport.skip_verify = skip_verify;
        transport
    }

    /// Create a transport around an already-open listener.
    ///
    /// The transport takes ownership of `listener` for `accept` and `close`
    /// but never opens a socket itself. `remote_encrypted` controls whether
    /// dials negotiate TLS.
    pub fn from_listener<L>(
        listener: L,
        remote_encrypted: bool,
        skip_verify: bool,
        advertised_addr: impl Into<String>,
    ) -> Self
    where
        L: Listener + 'static,
    {
        let listener: Arc<dyn Listener> = Arc::new(listener);
        let advertised_addr = Some(TransportAddr::new(advertised_addr)).filter(|a| !a.is_empty());
        let mut transport =
            Self::with_parts(TransportState::Adopted, Some(listener), advertised_addr);
        transport.remote_encrypted = remote_encrypted;
        transport.skip_verify = skip_verify;
        transport
    }

    /// Create a plain or TLS transport from configuration.
    ///
    /// Unlike the other constructors this reads `ca_path` when one is set.
    pub fn from_config(config: &TransportConfig) -> TransportResult<Self> {
        let mut transport = match (&config.cert_path, &config.key_path) {
            (Some(cert), Some(key)) => Self::new_tls(cert.as_str(), key.as_str(), config.skip_verify),
            (Some(cert), None) => Self::new_tls(cert.as_str(), "", config.skip_verify),
            _ => Self::new(),
        };
        transport.skip_verify = config.skip_verify;
        transport.remote_encrypted = transport.remote_encrypted || config.remote_encrypted;
        transport.handshake_timeout = config.handshake_timeout();
        transport.nodelay = config.nodelay;
        transport.advertised_addr = config.advertised_addr.clone().map(TransportAddr::new);
        transport.source_ip = config
            .source_ip()
            .map_err(|e| TransportError::config(e.to_string()))?;
        if let Some(ref ca_path) = config.ca_path {
            transport.trust_store = Some(TrustStore::load(ca_path)?);
        }
        Ok(transport)
    }

    /// Bind outbound dials to `ip`.
    pub fn with_source_ip(mut self, ip: IpAddr) -> Self {
        self.source_ip = Some(ip);
        self
    }

    /// Set the address reported by [`Transport::addr`].
    pub fn with_advertised_addr(mut self, addr: impl Into<String>) -> Self {
        self.advertised_addr = Some(TransportAddr::new(addr)).filter(|a| !a.is_empty());
        self
    }

    /// Replace how the listener's TLS configuration is built.
    pub fn with_certificate_loader(mut self, loader: Arc<dyn CertificateLoader>) -> Self {
        self.certificate_loader = loader;
        self
    }

    /// Replace the event observer.
    pub fn with_observer(mut self, observer: Arc<dyn TransportObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Trust extra CA certificates when verifying peers.
    pub fn with_trust_store(mut self, trust_store: TrustStore) -> Self {
        self.trust_store = Some(trust_store);
        self
    }

    /// Set whether dials negotiate TLS.
    pub fn with_remote_encrypted(mut self, remote_encrypted: bool) -> Self {
        self.remote_encrypted = remote_encrypted;
        self
    }

    /// Set the server-side TLS handshake timeout.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Set TCP_NODELAY on dialed sockets and on sockets accepted by a
    /// listener this transport opens. Adopted listeners apply their own.
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransportState {
        self.inner.read().state
    }

    /// Whether `open` wraps the listener in TLS.
    pub fn is_tls(&self) -> bool {
        !self.cert_path.is_empty()
    }

    /// Whether dials negotiate TLS.
    pub fn remote_encrypted(&self) -> bool {
        self.remote_encrypted
    }

    /// Whether dials skip peer certificate verification.
    pub fn skip_verify(&self) -> bool {
        self.skip_verify
    }

    /// Local IP outbound dials are bound to.
    pub fn source_ip(&self) -> Option<IpAddr> {
        self.source_ip
    }

    /// Bind the listener to `bind_addr` (`host:port`).
    ///
    /// Certificate material is loaded before the socket is bound, so a
    /// certificate error leaves no port bound.
    pub async fn open(&self, bind_addr: &str) -> TransportResult<()> {
        self.ensure_openable()?;

        let acceptor = if self.is_tls() {
            let config = self
                .certificate_loader
                .load_server_config(&self.cert_path, &self.key_path)?;
            Some(TlsAcceptor::from(config))
        } else {
            None
        };

        let socket = TcpListener::bind(bind_addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: bind_addr.to_string(),
                source,
            })?;
        let bind_err = |source: io::Error| TransportError::Bind {
            addr: bind_addr.to_string(),
            source,
        };
        let local_addr = socket.local_addr().map_err(bind_err)?;
        let encrypted = acceptor.is_some();

        let listener: Arc<dyn Listener> = match acceptor {
            Some(acceptor) => Arc::new(
                TlsListener::new(
                    socket,
                    acceptor,
                    self.handshake_timeout,
                    self.nodelay,
                    self.observer.clone(),
                )
                .map_err(bind_err)?,
            ),
            None => Arc::new(TcpStreamListener::new(socket, self.nodelay).map_err(bind_err)?),
        };

        {
            let mut inner = self.inner.write();
            // Another open or a close may have won while binding.
            match inner.state {
                TransportState::Created => {}
                TransportState::Closed => return Err(TransportError::Closed),
                TransportState::Listening | TransportState::Adopted => {
                    return Err(TransportError::AlreadyOpen)
                }
            }
            inner.listener = Some(listener);
            inner.state = TransportState::Listening;
        }

        self.observer.on_event(&TransportEvent::Listening {
            local_addr,
            encrypted,
        });
        Ok(())
    }

    fn ensure_openable(&self) -> TransportResult<()> {
        match self.inner.read().state {
            TransportState::Created => Ok(()),
            TransportState::Closed => Err(TransportError::Closed),
            TransportState::Listening | TransportState::Adopted => Err(TransportError::AlreadyOpen),
        }
    }

    /// Wait for the next inbound connection.
    ///
    /// Returns [`TransportError::NotOpen`] when no listener exists and
    /// [`TransportError::Closed`] once `close` has been called, including
    /// while waiting. Listener errors and closure are reported to the
    /// observer before returning.
    pub async fn accept(&self) -> TransportResult<Connection> {
        let result = self.accept_inner().await;
        match &result {
            Ok(conn) => self.observer.on_event(&TransportEvent::Accepted {
                id: conn.id,
                peer_addr: conn.peer_addr,
                encrypted: conn.encrypted,
            }),
            Err(e @ TransportError::Accept { .. }) => {
                self.observer.on_event(&TransportEvent::AcceptFailed {
                    error: e.to_string(),
                })
            }
            Err(TransportError::Closed) => self.observer.on_event(&TransportEvent::AcceptClosed),
            Err(_) => {}
        }
        result
    }

    async fn accept_inner(&self) -> TransportResult<Connection> {
        let listener = {
            let inner = self.inner.read();
            match (&inner.listener, inner.state) {
                (Some(listener), _) => listener.clone(),
                (None, TransportState::Closed) => return Err(TransportError::Closed),
                (None, _) => return Err(TransportError::NotOpen),
            }
        };

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        if *shutdown_rx.borrow_and_update() {
            return Err(TransportError::Closed);
        }
        tokio::select! {
            result = listener.accept() => {
                result.map_err(|source| TransportError::Accept { source })
            }
            _ = shutdown_rx.changed() => Err(TransportError::Closed),
        }
    }

    /// Dial `addr` (`host:port`).
    ///
    /// Name resolution, the TCP connect and, when `remote_encrypted` is set,
    /// the TLS handshake all complete within `timeout`. `Duration::ZERO`
    /// means no deadline. No retries are made.
    pub async fn dial(&self, addr: &str, timeout: Duration) -> TransportResult<Connection> {
        self.observer.on_event(&TransportEvent::DialStarted {
            addr: addr.to_string(),
            encrypted: self.remote_encrypted,
        });

        let result = if timeout.is_zero() {
            self.dial_inner(addr).await
        } else {
            match tokio::time::timeout(timeout, self.dial_inner(addr)).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::DialTimeout {
                    addr: addr.to_string(),
                    timeout,
                }),
            }
        };

        match &result {
            Ok(conn) => self.observer.on_event(&TransportEvent::Dialed {
                id: conn.id,
                addr: addr.to_string(),
                peer_addr: conn.peer_addr,
                encrypted: conn.encrypted,
            }),
            Err(e) => self.observer.on_event(&TransportEvent::DialFailed {
                addr: addr.to_string(),
                error: e.to_string(),
            }),
        }
        result
    }

    async fn dial_inner(&self, addr: &str) -> TransportResult<Connection> {
        let stream = self.connect_tcp(addr).await?;
        if self.nodelay {
            let _ = stream.set_nodelay(true);
        }
        let dial_err = |source: io::Error| TransportError::Dial {
            addr: addr.to_string(),
            source,
        };
        let local_addr = stream.local_addr().map_err(dial_err)?;
        let peer_addr = stream.peer_addr().map_err(dial_err)?;

        if !self.remote_encrypted {
            return Ok(Connection::new(stream, local_addr, peer_addr, false));
        }

        let server_name = server_name_for(addr)?;
        let tls_stream = self
            .connector()?
            .connect(server_name, stream)
            .await
            .map_err(|source| TransportError::Handshake {
                addr: addr.to_string(),
                source,
            })?;
        Ok(Connection::new(tls_stream, local_addr, peer_addr, true))
    }

    async fn connect_tcp(&self, addr: &str) -> TransportResult<TcpStream> {
        let (host, port) = split_host_port(addr)?;
        let host = if host.is_empty() { "localhost" } else { host };

        let candidates = tokio::net::lookup_host((host, port))
            .await
            .map_err(|source| TransportError::Dial {
                addr: addr.to_string(),
                source,
            })?;

        let mut last_err = None;
        for remote in candidates {
            let result = match self.source_ip {
                Some(ip) if ip.is_ipv4() != remote.is_ipv4() => continue,
                Some(ip) => connect_from(SocketAddr::new(ip, 0), remote).await,
                None => TcpStream::connect(remote).await,
            };
            match result {
                Ok(stream) => return Ok(stream),
                Err(e) => last_err = Some(e),
            }
        }

        Err(match last_err {
            Some(source) => TransportError::Dial {
                addr: addr.to_string(),
                source,
            },
            None => TransportError::invalid_address(addr, "no usable addresses"),
        })
    }

    fn connector(&self) -> TransportResult<TlsConnector> {
        let mut slot = self.connector.lock();
        if let Some(ref connector) = *slot {
            return Ok(connector.clone());
        }
        let connector = TlsConnector::from(client_config(
            self.skip_verify,
            self.trust_store.as_ref(),
        )?);
        *slot = Some(connector.clone());
        Ok(connector)
    }

    /// Release the listener.
    ///
    /// Any in-flight `accept` returns [`TransportError::Closed`]. Connections
    /// already returned are unaffected. Closing a transport that was never
    /// opened does nothing.
    pub fn close(&self) -> TransportResult<()> {
        let listener = {
            let mut inner = self.inner.write();
            let listener = inner.listener.take();
            if listener.is_some() {
                inner.state = TransportState::Closed;
            }
            listener
        };

        let Some(listener) = listener else {
            return Ok(());
        };

        self.shutdown_tx.send_replace(true);
        let local_addr = listener.local_addr().ok();
        drop(listener);

        self.observer
            .on_event(&TransportEvent::Closed { local_addr });
        Ok(())
    }

    /// Address other nodes should use to reach this node.
    ///
    /// This is the advertised address given at construction. Without one it
    /// falls back to the listener's bound address, and to an empty address
    /// before any listener exists.
    pub fn addr(&self) -> TransportAddr {
        if let Some(ref addr) = self.advertised_addr {
            return addr.clone();
        }
        self.local_addr()
            .map(|addr| TransportAddr::new(addr.to_string()))
            .unwrap_or_default()
    }

    /// Bound address of the current listener.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.inner
            .read()
            .listener
            .as_ref()
            .and_then(|listener| listener.local_addr().ok())
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("state", &self.state())
            .field("advertised_addr", &self.advertised_addr)
            .field("cert_path", &self.cert_path)
            .field("remote_encrypted", &self.remote_encrypted)
            .field("skip_verify", &self.skip_verify)
            .field("source_ip", &self.source_ip)
            .finish_non_exhaustive()
    }
}

async fn connect_from(local: SocketAddr, remote: SocketAddr) -> io::Result<TcpStream> {
    let socket = if remote.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.bind(local)?;
    socket.connect(remote).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::observability::{NoopObserver, TransportMetrics};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn quiet(transport: Transport) -> Transport {
        transport.with_observer(Arc::new(NoopObserver))
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<TransportEvent>>,
    }

    impl TransportObserver for RecordingObserver {
        fn on_event(&self, event: &TransportEvent) {
            self.events.lock().push(event.clone());
        }
    }

    #[test]
    fn test_transport_addr() {
        let addr = TransportAddr::new("node1:4002");
        assert_eq!(addr.network(), "tcp");
        assert_eq!(addr.to_string(), "node1:4002");
        assert!(TransportAddr::default().is_empty());
    }

    #[test]
    fn test_constructors() {
        let plain = Transport::new();
        assert_eq!(plain.state(), TransportState::Created);
        assert!(!plain.is_tls());
        assert!(!plain.remote_encrypted());

        let tls = Transport::new_tls("node.crt", "node.key", true);
        assert!(tls.is_tls());
        assert!(tls.remote_encrypted());
        assert!(tls.skip_verify());
        assert!(tls.addr().is_empty());
    }

    #[tokio::test]
    async fn test_from_listener_is_adopted() {
        let inner = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let transport = quiet(Transport::from_listener(inner, true, false, "node1:4002"));

        assert_eq!(transport.state(), TransportState::Adopted);
        assert!(transport.remote_encrypted());
        assert_eq!(transport.addr().hostname(), "node1:4002");
        assert!(matches!(
            transport.open("127.0.0.1:0").await,
            Err(TransportError::AlreadyOpen)
        ));
    }

    #[tokio::test]
    async fn test_accept_before_open() {
        let transport = quiet(Transport::new());
        assert!(matches!(
            transport.accept().await,
            Err(TransportError::NotOpen)
        ));
    }

    #[test]
    fn test_close_unopened_is_noop() {
        let transport = quiet(Transport::new());
        assert!(transport.close().is_ok());
        assert!(transport.close().is_ok());
        assert_eq!(transport.state(), TransportState::Created);
    }

    #[tokio::test]
    async fn test_open_twice_fails() {
        let transport = quiet(Transport::new());
        transport.open("127.0.0.1:0").await.unwrap();
        assert_eq!(transport.state(), TransportState::Listening);
        assert!(matches!(
            transport.open("127.0.0.1:0").await,
            Err(TransportError::AlreadyOpen)
        ));
        transport.close().unwrap();
    }

    #[tokio::test]
    async fn test_open_after_close_fails() {
        let transport = quiet(Transport::new());
        transport.open("127.0.0.1:0").await.unwrap();
        transport.close().unwrap();
        assert_eq!(transport.state(), TransportState::Closed);
        assert!(matches!(
            transport.open("127.0.0.1:0").await,
            Err(TransportError::Closed)
        ));
        assert!(matches!(
            transport.accept().await,
            Err(TransportError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_addr_falls_back_to_bound_addr() {
        let transport = quiet(Transport::new());
        assert!(transport.addr().is_empty());

        transport.open("127.0.0.1:0").await.unwrap();
        let local = transport.local_addr().unwrap();
        assert_eq!(transport.addr().hostname(), local.to_string());
        transport.close().unwrap();

        let advertised = quiet(Transport::new().with_advertised_addr("node7:4002"));
        advertised.open("127.0.0.1:0").await.unwrap();
        assert_eq!(advertised.addr().to_string(), "node7:4002");
        advertised.close().unwrap();
    }

    #[tokio::test]
    async fn test_plain_round_trip_with_metrics() {
        let metrics = Arc::new(TransportMetrics::new());
        let server = Arc::new(Transport::new().with_observer(metrics.clone()));
        server.open("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap().to_string();

        let acceptor = server.clone();
        let echo = tokio::spawn(async move {
            let mut conn = acceptor.accept().await.unwrap();
            let mut buf = [0u8; 5];
            conn.read_exact(&mut buf).await.unwrap();
            conn.write_all(&buf).await.unwrap();
        });

        let client = quiet(Transport::new());
        let mut conn = client.dial(&addr, Duration::from_secs(5)).await.unwrap();
        assert!(!conn.encrypted);
        conn.write_all(b"hello").await.unwrap();
        let mut buf = [0u8; 5];
        conn.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"hello");

        echo.await.unwrap();
        assert_eq!(metrics.snapshot().connections_accepted, 1);
        server.close().unwrap();
    }

    #[tokio::test]
    async fn test_dial_invalid_address() {
        let transport = quiet(Transport::new());
        let err = transport
            .dial("no-port-here", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_dial_source_ip_family_mismatch() {
        let transport = quiet(Transport::new().with_source_ip("::1".parse().unwrap()));
        let err = transport
            .dial("127.0.0.1:9", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_accept_reports_closed() {
        let recorder = Arc::new(RecordingObserver::default());
        let metrics = Arc::new(TransportMetrics::new());
        let observers = crate::ops::observability::Observers::new()
            .with(recorder.clone())
            .with(metrics.clone());
        let transport = Arc::new(Transport::new().with_observer(Arc::new(observers)));
        transport.open("127.0.0.1:0").await.unwrap();

        let acceptor = transport.clone();
        let pending = tokio::spawn(async move { acceptor.accept().await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        transport.close().unwrap();
        assert!(matches!(
            pending.await.unwrap(),
            Err(TransportError::Closed)
        ));

        // Accepting on an already closed transport is reported too.
        assert!(matches!(
            transport.accept().await,
            Err(TransportError::Closed)
        ));

        let closed = recorder
            .events
            .lock()
            .iter()
            .filter(|event| matches!(event, TransportEvent::AcceptClosed))
            .count();
        assert_eq!(closed, 2);
        assert_eq!(metrics.snapshot().accept_failures, 0);
    }
}
