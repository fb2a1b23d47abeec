//! Configuration parsing and validation.
//!
//! Transport configuration is loaded from TOML files with CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

/// Transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Bind address for the listener (e.g., "0.0.0.0:4002").
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Address other nodes should use to reach this node.
    #[serde(default)]
    pub advertised_addr: Option<String>,

    /// X.509 certificate chain path. Unset means a plaintext listener.
    #[serde(default)]
    pub cert_path: Option<String>,

    /// Private key path for `cert_path`.
    #[serde(default)]
    pub key_path: Option<String>,

    /// Extra CA bundle trusted when verifying peers.
    #[serde(default)]
    pub ca_path: Option<String>,

    /// Dial peers over TLS even when this node's listener is plaintext.
    #[serde(default)]
    pub remote_encrypted: bool,

    /// Skip verification of peer certificates on outbound TLS dials.
    #[serde(default)]
    pub skip_verify: bool,

    /// Local IP that outbound dials are bound to.
    #[serde(default)]
    pub source_ip: Option<String>,

    /// Server-side TLS handshake timeout in milliseconds.
    #[serde(default = "default_handshake_timeout_ms")]
    pub handshake_timeout_ms: u64,

    /// Default dial timeout in milliseconds (0 = no deadline).
    #[serde(default = "default_dial_timeout_ms")]
    pub dial_timeout_ms: u64,

    /// Disable Nagle's algorithm on accepted and dialed sockets.
    #[serde(default = "default_nodelay")]
    pub nodelay: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            advertised_addr: None,
            cert_path: None,
            key_path: None,
            ca_path: None,
            remote_encrypted: false,
            skip_verify: false,
            source_ip: None,
            handshake_timeout_ms: default_handshake_timeout_ms(),
            dial_timeout_ms: default_dial_timeout_ms(),
            nodelay: default_nodelay(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions

fn default_bind() -> String {
    "127.0.0.1:4002".to_string()
}

fn default_handshake_timeout_ms() -> u64 {
    10_000
}

fn default_dial_timeout_ms() -> u64 {
    5_000
}

fn default_nodelay() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TransportConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: TransportConfig =
            toml::from_str(&content).with_context(|| "failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TransportConfig =
            toml::from_str(content).with_context(|| "failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Whether this node's listener is TLS-wrapped.
    pub fn tls_enabled(&self) -> bool {
        self.cert_path.is_some()
    }

    /// Parsed source IP, if configured.
    pub fn source_ip(&self) -> Result<Option<IpAddr>> {
        self.source_ip
            .as_deref()
            .map(|ip| {
                ip.parse::<IpAddr>()
                    .with_context(|| format!("source_ip is not an IP address: {}", ip))
            })
            .transpose()
    }

    /// Server-side handshake timeout.
    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_millis(self.handshake_timeout_ms)
    }

    /// Default dial timeout (`Duration::ZERO` = no deadline).
    pub fn dial_timeout(&self) -> Duration {
        Duration::from_millis(self.dial_timeout_ms)
    }

    /// Apply CLI overrides to the configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref log_level) = overrides.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(ref bind) = overrides.bind {
            self.bind = bind.clone();
        }
        if let Some(ref advertised_addr) = overrides.advertised_addr {
            self.advertised_addr = Some(advertised_addr.clone());
        }
        if let Some(ref source_ip) = overrides.source_ip {
            self.source_ip = Some(source_ip.clone());
        }
        if overrides.skip_verify {
            self.skip_verify = true;
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.validate_tls()?;
        self.validate_network()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_tls(&self) -> Result<()> {
        // If either cert or key is specified, both must be specified
        match (&self.cert_path, &self.key_path) {
            (Some(cert), None) => {
                anyhow::bail!("key_path required when cert_path is set ({})", cert);
            }
            (None, Some(key)) => {
                anyhow::bail!("cert_path required when key_path is set ({})", key);
            }
            (Some(cert), Some(key)) => {
                if cert.is_empty() || key.is_empty() {
                    anyhow::bail!("cert_path and key_path must not be empty");
                }
            }
            (None, None) => {}
        }

        if self.handshake_timeout_ms == 0 {
            anyhow::bail!("handshake_timeout_ms must be > 0");
        }
        Ok(())
    }

    fn validate_network(&self) -> Result<()> {
        if self.bind.rsplit_once(':').is_none() {
            anyhow::bail!("bind must be host:port, got: {}", self.bind);
        }
        self.source_ip()?;
        if let Some(ref addr) = self.advertised_addr {
            if addr.is_empty() {
                anyhow::bail!("advertised_addr must not be empty when set");
            }
        }
        Ok(())
    }

    fn validate_telemetry(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "log_level must be one of {:?}, got: {}",
                valid_levels,
                self.log_level
            );
        }
        Ok(())
    }
}

/// CLI override options that can be applied to configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override log level.
    pub log_level: Option<String>,
    /// Override bind address.
    pub bind: Option<String>,
    /// Override advertised address.
    pub advertised_addr: Option<String>,
    /// Override source IP for dials.
    pub source_ip: Option<String>,
    /// Force skip-verify on.
    pub skip_verify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = TransportConfig::from_toml("").unwrap();
        assert_eq!(config.bind, "127.0.0.1:4002");
        assert_eq!(config.handshake_timeout(), Duration::from_secs(10));
        assert_eq!(config.dial_timeout(), Duration::from_secs(5));
        assert!(config.nodelay);
        assert!(!config.tls_enabled());
    }

    #[test]
    fn test_cert_requires_key() {
        let result = TransportConfig::from_toml(r#"cert_path = "node.crt""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("key_path"), "{}", err);
    }

    #[test]
    fn test_key_requires_cert() {
        let result = TransportConfig::from_toml(r#"key_path = "node.key""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_source_ip() {
        let result = TransportConfig::from_toml(r#"source_ip = "not-an-ip""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let result = TransportConfig::from_toml(r#"log_level = "loud""#);
        assert!(result.unwrap_err().to_string().contains("log_level"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = TransportConfig::default();
        config.apply_overrides(&ConfigOverrides {
            bind: Some("0.0.0.0:5000".to_string()),
            source_ip: Some("10.0.0.2".to_string()),
            skip_verify: true,
            ..Default::default()
        });
        assert_eq!(config.bind, "0.0.0.0:5000");
        assert!(config.skip_verify);
        assert_eq!(
            config.source_ip().unwrap(),
            Some("10.0.0.2".parse::<IpAddr>().unwrap())
        );
    }
}
