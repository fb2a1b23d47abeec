//! Transport events, observers and connection metrics.
//!
//! The transport reports what it does through a [`TransportObserver`] instead
//! of logging directly. [`TracingObserver`] is the default and turns events
//! into structured `tracing` records; [`TransportMetrics`] counts them.

use crate::net::conn::ConnectionId;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Something the transport did or failed to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A listener was opened.
    Listening {
        local_addr: SocketAddr,
        encrypted: bool,
    },
    /// An inbound connection was accepted.
    Accepted {
        id: ConnectionId,
        peer_addr: SocketAddr,
        encrypted: bool,
    },
    /// The listener returned an error.
    AcceptFailed { error: String },
    /// `accept` was called on, or interrupted by, a closed transport.
    AcceptClosed,
    /// An inbound TLS handshake failed; the connection was dropped.
    HandshakeFailed { peer_addr: SocketAddr, error: String },
    /// An outbound dial began.
    DialStarted { addr: String, encrypted: bool },
    /// An outbound connection was established.
    Dialed {
        id: ConnectionId,
        addr: String,
        peer_addr: SocketAddr,
        encrypted: bool,
    },
    /// An outbound dial failed.
    DialFailed { addr: String, error: String },
    /// The listener was released.
    Closed { local_addr: Option<SocketAddr> },
}

/// Receives transport events.
pub trait TransportObserver: Send + Sync {
    /// Handle one event. Must not block.
    fn on_event(&self, event: &TransportEvent);
}

/// Emits events as `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TransportObserver for TracingObserver {
    fn on_event(&self, event: &TransportEvent) {
        match event {
            TransportEvent::Listening {
                local_addr,
                encrypted,
            } => {
                tracing::info!(local_addr = %local_addr, encrypted, "transport listening");
            }
            TransportEvent::Accepted {
                id,
                peer_addr,
                encrypted,
            } => {
                tracing::debug!(conn = %id, peer = %peer_addr, encrypted, "accepted connection");
            }
            TransportEvent::AcceptFailed { error } => {
                tracing::warn!(error = %error, "error accepting");
            }
            TransportEvent::AcceptClosed => {
                tracing::debug!(error = "transport closed", "error accepting");
            }
            TransportEvent::HandshakeFailed { peer_addr, error } => {
                tracing::warn!(peer = %peer_addr, error = %error, "TLS handshake failed");
            }
            TransportEvent::DialStarted { addr, encrypted } => {
                if *encrypted {
                    tracing::debug!(addr = %addr, "doing a TLS dial");
                } else {
                    tracing::trace!(addr = %addr, "dialing");
                }
            }
            TransportEvent::Dialed {
                id,
                addr,
                peer_addr,
                encrypted,
            } => {
                tracing::debug!(conn = %id, addr = %addr, peer = %peer_addr, encrypted, "dialed");
            }
            TransportEvent::DialFailed { addr, error } => {
                tracing::debug!(addr = %addr, error = %error, "dial failed");
            }
            TransportEvent::Closed { local_addr } => match local_addr {
                Some(addr) => tracing::info!(local_addr = %addr, "transport closed"),
                None => tracing::info!("transport closed"),
            },
        }
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TransportObserver for NoopObserver {
    fn on_event(&self, _event: &TransportEvent) {}
}

/// Fans events out to several observers in order.
#[derive(Default, Clone)]
pub struct Observers {
    inner: Vec<Arc<dyn TransportObserver>>,
}

impl Observers {
    /// Create an empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    pub fn with(mut self, observer: Arc<dyn TransportObserver>) -> Self {
        self.inner.push(observer);
        self
    }
}

impl TransportObserver for Observers {
    fn on_event(&self, event: &TransportEvent) {
        for observer in &self.inner {
            observer.on_event(event);
        }
    }
}

/// Transport connection metrics.
#[derive(Debug, Default)]
pub struct TransportMetrics {
    /// Total connections accepted.
    pub connections_accepted: AtomicU64,

    /// Total connections dialed.
    pub connections_dialed: AtomicU64,

    /// Listener errors.
    pub accept_failures: AtomicU64,

    /// Failed inbound TLS handshakes.
    pub handshake_failures: AtomicU64,

    /// Failed dials.
    pub dial_failures: AtomicU64,
}

impl TransportMetrics {
    /// Create zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            connections_accepted: self.connections_accepted.load(Ordering::Relaxed),
            connections_dialed: self.connections_dialed.load(Ordering::Relaxed),
            accept_failures: self.accept_failures.load(Ordering::Relaxed),
            handshake_failures: self.handshake_failures.load(Ordering::Relaxed),
            dial_failures: self.dial_failures.load(Ordering::Relaxed),
        }
    }
}

impl TransportObserver for TransportMetrics {
    fn on_event(&self, event: &TransportEvent) {
        let counter = match event {
            TransportEvent::Accepted { .. } => &self.connections_accepted,
            TransportEvent::Dialed { .. } => &self.connections_dialed,
            TransportEvent::AcceptFailed { .. } => &self.accept_failures,
            TransportEvent::HandshakeFailed { .. } => &self.handshake_failures,
            TransportEvent::DialFailed { .. } => &self.dial_failures,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Serializable copy of [`TransportMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub connections_accepted: u64,
    pub connections_dialed: u64,
    pub accept_failures: u64,
    pub handshake_failures: u64,
    pub dial_failures: u64,
}
