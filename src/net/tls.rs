//! TLS configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TLS Configuration                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │   CertificateLoader    - Builds rustls ServerConfig         │
//! │   PemCertificateLoader - Default loader (PEM cert + key)    │
//! │   TrustStore           - Extra CA roots for peer checks     │
//! │   client_config        - Builds rustls ClientConfig         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All configs are built with an explicit `ring` crypto provider, so no
//! process-wide rustls state is read or installed.

use crate::core::error::{TransportError, TransportResult};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, ServerConfig, SignatureScheme};
use std::fs::File;
use std::io::BufReader;
use std::net::IpAddr;
use std::sync::Arc;

/// Crypto provider used for every config built here.
pub fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

/// Builds the server-side TLS configuration for a listener.
///
/// The transport calls this from `open` when a certificate is configured.
/// Replace the default to source key material from somewhere other than
/// PEM files.
pub trait CertificateLoader: Send + Sync {
    /// Load the certificate and key and build a server config presenting them.
    fn load_server_config(&self, cert_path: &str, key_path: &str)
        -> TransportResult<Arc<ServerConfig>>;
}

/// Loads a PEM certificate chain and PEM private key from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct PemCertificateLoader;

impl CertificateLoader for PemCertificateLoader {
    fn load_server_config(
        &self,
        cert_path: &str,
        key_path: &str,
    ) -> TransportResult<Arc<ServerConfig>> {
        if key_path.is_empty() {
            return Err(TransportError::certificate(format!(
                "key path required for certificate {}",
                cert_path
            )));
        }
        let certs = load_certs(cert_path)?;
        let key = load_private_key(key_path)?;

        let config = ServerConfig::builder_with_provider(crypto_provider())
            .with_safe_default_protocol_versions()
            .map_err(|e| TransportError::certificate(e.to_string()))?
            .with_no_client_auth()
            .with_single_cert(certs, key)
            .map_err(|e| {
                TransportError::certificate(format!(
                    "invalid key pair {} / {}: {}",
                    cert_path, key_path, e
                ))
            })?;

        Ok(Arc::new(config))
    }
}

/// Read every certificate from a PEM file.
pub fn load_certs(path: &str) -> TransportResult<Vec<CertificateDer<'static>>> {
    let file = File::open(path).map_err(|e| {
        TransportError::certificate(format!("failed to open certificate file {}: {}", path, e))
    })?;
    let mut reader = BufReader::new(file);
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            TransportError::certificate(format!("failed to parse certificates in {}: {}", path, e))
        })?;

    if certs.is_empty() {
        return Err(TransportError::certificate(format!(
            "no certificates found in {}",
            path
        )));
    }
    Ok(certs)
}

/// Read the first PKCS#8, PKCS#1 or SEC1 private key from a PEM file.
pub fn load_private_key(path: &str) -> TransportResult<PrivateKeyDer<'static>> {
    let file = File::open(path).map_err(|e| {
        TransportError::certificate(format!("failed to open key file {}: {}", path, e))
    })?;
    let mut reader = BufReader::new(file);
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| {
            TransportError::certificate(format!("failed to parse private key in {}: {}", path, e))
        })?
        .ok_or_else(|| {
            TransportError::certificate(format!("no valid private key found in {}", path))
        })
}

/// Trust store for CA certificates.
#[derive(Debug, Clone, Default)]
pub struct TrustStore {
    /// CA certificates in DER form.
    pub certs: Vec<CertificateDer<'static>>,
}

impl TrustStore {
    /// Load a trust store from a PEM CA bundle.
    pub fn load(ca_path: &str) -> TransportResult<Self> {
        Ok(Self {
            certs: load_certs(ca_path)?,
        })
    }

    /// Number of certificates loaded.
    pub fn cert_count(&self) -> usize {
        self.certs.len()
    }
}

/// Build the client-side TLS configuration for outbound dials.
///
/// With `skip_verify` the peer's chain and hostname are not checked.
/// Otherwise peers must chain to the webpki roots or to `trust`.
pub fn client_config(
    skip_verify: bool,
    trust: Option<&TrustStore>,
) -> TransportResult<Arc<ClientConfig>> {
    let provider = crypto_provider();
    let builder = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()
        .map_err(|e| TransportError::config(e.to_string()))?;

    let config = if skip_verify {
        builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(InsecureVerifier::new(provider)))
            .with_no_client_auth()
    } else {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        if let Some(trust) = trust {
            for cert in &trust.certs {
                root_store.add(cert.clone()).map_err(|e| {
                    TransportError::certificate(format!("invalid CA certificate: {}", e))
                })?;
            }
        }
        builder
            .with_root_certificates(root_store)
            .with_no_client_auth()
    };

    Ok(Arc::new(config))
}

/// Split `host:port`, accepting bracketed IPv6 hosts.
pub fn split_host_port(addr: &str) -> TransportResult<(&str, u16)> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| TransportError::invalid_address(addr, "missing port"))?;
    let port = port
        .parse::<u16>()
        .map_err(|_| TransportError::invalid_address(addr, "invalid port"))?;
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    Ok((host, port))
}

/// Derive the TLS server name for a `host:port` dial address.
///
/// IP literals become IP server names; an empty host means localhost.
pub fn server_name_for(addr: &str) -> TransportResult<ServerName<'static>> {
    let (host, _) = split_host_port(addr)?;
    if host.is_empty() {
        return Ok(ServerName::try_from("localhost")
            .map_err(|e| TransportError::invalid_address(addr, e.to_string()))?
            .to_owned());
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ServerName::from(ip));
    }
    ServerName::try_from(host.to_string())
        .map_err(|e| TransportError::invalid_address(addr, e.to_string()))
}

/// Accepts any server certificate while still checking handshake signatures.
#[derive(Debug)]
pub struct InsecureVerifier {
    provider: Arc<CryptoProvider>,
}

impl InsecureVerifier {
    /// Create a verifier using `provider`'s signature algorithms.
    pub fn new(provider: Arc<CryptoProvider>) -> Self {
        Self { provider }
    }
}

impl ServerCertVerifier for InsecureVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
