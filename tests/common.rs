//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

#![allow(dead_code)]

use nodelink::core::config::TransportConfig;
use nodelink::ops::observability::NoopObserver;
use nodelink::Transport;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::task::JoinHandle;

/// Self-signed certificate and key written to temp files.
pub struct TestCert {
    pub cert: NamedTempFile,
    pub key: NamedTempFile,
}

impl TestCert {
    /// Certificate file path.
    pub fn cert_path(&self) -> &str {
        self.cert.path().to_str().expect("utf-8 temp path")
    }

    /// Key file path.
    pub fn key_path(&self) -> &str {
        self.key.path().to_str().expect("utf-8 temp path")
    }
}

/// Generate a self-signed certificate for `localhost`.
pub fn self_signed_cert() -> TestCert {
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()])
        .expect("Failed to generate certificate");
    TestCert {
        cert: write_temp(&certified.cert.pem()),
        key: write_temp(&certified.key_pair.serialize_pem()),
    }
}

/// Write content to a new temp file.
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Create a config file from TOML content.
pub fn create_config(content: &str) -> NamedTempFile {
    write_temp(content)
}

/// Load a config from a temp file.
pub fn load_config(file: &NamedTempFile) -> TransportConfig {
    TransportConfig::from_file(file.path()).expect("Failed to load config")
}

/// Silence a transport's events.
pub fn quiet(transport: Transport) -> Transport {
    transport.with_observer(Arc::new(NoopObserver))
}

/// Find a currently free loopback port.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("local addr").port()
}

/// Accept in a loop and echo every connection until accept fails.
pub fn spawn_echo_server(transport: Arc<Transport>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Ok(conn) = transport.accept().await {
            tokio::spawn(async move {
                let (mut reader, mut writer) = conn.into_split();
                let _ = tokio::io::copy(&mut reader, &mut writer).await;
            });
        }
    })
}
