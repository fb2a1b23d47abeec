//! CLI command implementations.

mod config;
mod dial;
mod listen;

pub use config::{run_config, ConfigArgs};
pub use dial::{run_dial, DialArgs};
pub use listen::{run_listen, ListenArgs};

use crate::core::config::{ConfigOverrides, TransportConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Load the config file if one is given, then apply overrides.
pub fn load_config(path: Option<&str>, overrides: &ConfigOverrides) -> Result<TransportConfig> {
    let mut config = match path {
        Some(path) => TransportConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => TransportConfig::default(),
    };
    config.apply_overrides(overrides);
    config.validate()?;
    Ok(config)
}

/// Initialize tracing subscriber if the telemetry feature is enabled.
#[cfg(feature = "telemetry")]
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_log_level: &str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.bind, "127.0.0.1:4002");
    }

    #[test]
    fn test_load_config_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"bind = \"127.0.0.1:7000\"\nlog_level = \"warn\"\n")
            .unwrap();

        let overrides = ConfigOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        let config = load_config(file.path().to_str(), &overrides).unwrap();
        assert_eq!(config.bind, "127.0.0.1:7000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_config_rejects_bad_override() {
        let overrides = ConfigOverrides {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        assert!(load_config(None, &overrides).is_err());
    }
}
