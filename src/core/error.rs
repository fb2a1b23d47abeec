//! Error types for the transport.
//!
//! Every failure is returned to the immediate caller. The transport never
//! retries; [`TransportError::is_retriable`] only classifies errors so callers
//! can apply their own retry and backoff policy.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Transport error conditions.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Invalid transport configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Certificate or private key could not be loaded or parsed.
    #[error("certificate error: {message}")]
    Certificate { message: String },

    /// The listening socket could not be bound.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The listener failed while accepting.
    #[error("accept failed: {source}")]
    Accept {
        #[source]
        source: io::Error,
    },

    /// TLS handshake with a peer failed.
    #[error("TLS handshake with {addr} failed: {source}")]
    Handshake {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Outbound connection could not be established.
    #[error("dial {addr} failed: {source}")]
    Dial {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Outbound connection did not complete before the deadline.
    #[error("dial {addr} timed out after {timeout:?}")]
    DialTimeout { addr: String, timeout: Duration },

    /// Address string could not be parsed or resolved.
    #[error("invalid address {addr}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// Accept was called before a listener was opened.
    #[error("transport not open")]
    NotOpen,

    /// Open was called on a transport that already owns a listener.
    #[error("transport already open")]
    AlreadyOpen,

    /// The transport has been closed.
    #[error("transport closed")]
    Closed,
}

impl TransportError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a certificate error.
    pub fn certificate(message: impl Into<String>) -> Self {
        Self::Certificate {
            message: message.into(),
        }
    }

    /// Create an invalid address error.
    pub fn invalid_address(addr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            addr: addr.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error comes from certificate or transport configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Certificate { .. })
    }

    /// Check if this error is a dial deadline expiry.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::DialTimeout { .. } => true,
            Self::Dial { source, .. } | Self::Handshake { source, .. } => {
                source.kind() == io::ErrorKind::TimedOut
            }
            _ => false,
        }
    }

    /// Check if a caller could reasonably retry the failed operation.
    ///
    /// Configuration, certificate and lifecycle errors are never retriable.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::DialTimeout { .. } => true,
            Self::Dial { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::TimedOut
            ),
            Self::Accept { source } => !matches!(
                source.kind(),
                io::ErrorKind::InvalidInput | io::ErrorKind::PermissionDenied
            ),
            _ => false,
        }
    }

    /// Check if a TLS handshake failed because the peer certificate was rejected.
    pub fn is_verification_failure(&self) -> bool {
        let Self::Handshake { source, .. } = self else {
            return false;
        };
        source
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<rustls::Error>())
            .map(|err| {
                matches!(
                    err,
                    rustls::Error::InvalidCertificate(_)
                        | rustls::Error::AlertReceived(rustls::AlertDescription::BadCertificate)
                        | rustls::Error::AlertReceived(rustls::AlertDescription::UnknownCA)
                )
            })
            .unwrap_or(false)
    }
}

/// Result type using TransportError.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        let err = TransportError::DialTimeout {
            addr: "10.0.0.1:4002".to_string(),
            timeout: Duration::from_millis(1),
        };
        assert!(err.is_timeout());
        assert!(err.is_retriable());

        let err = TransportError::Dial {
            addr: "10.0.0.1:4002".to_string(),
            source: io::Error::from(io::ErrorKind::TimedOut),
        };
        assert!(err.is_timeout());
    }

    #[test]
    fn test_refused_is_retriable() {
        let err = TransportError::Dial {
            addr: "127.0.0.1:1".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert!(err.is_retriable());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_lifecycle_errors_not_retriable() {
        assert!(!TransportError::NotOpen.is_retriable());
        assert!(!TransportError::Closed.is_retriable());
        assert!(!TransportError::certificate("bad key").is_retriable());
        assert!(!TransportError::config("bad").is_retriable());
        assert!(TransportError::certificate("bad key").is_config_error());
        assert!(!TransportError::AlreadyOpen.is_config_error());
    }

    #[test]
    fn test_verification_failure_detection() {
        let rustls_err = rustls::Error::InvalidCertificate(rustls::CertificateError::UnknownIssuer);
        let err = TransportError::Handshake {
            addr: "127.0.0.1:4002".to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, rustls_err),
        };
        assert!(err.is_verification_failure());

        let err = TransportError::Handshake {
            addr: "127.0.0.1:4002".to_string(),
            source: io::Error::from(io::ErrorKind::UnexpectedEof),
        };
        assert!(!err.is_verification_failure());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TransportError::NotOpen.to_string(), "transport not open");
        let err = TransportError::invalid_address("nohost", "missing port");
        assert_eq!(err.to_string(), "invalid address nohost: missing port");
    }
}
