//! Config command implementation.

use crate::core::config::TransportConfig;
use crate::net::tls::TrustStore;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration operations.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate configuration file.
    Validate {
        /// Config file path.
        #[arg(short, long, default_value = "config/nodelink.toml")]
        config: PathBuf,
    },
    /// Print configuration with defaults applied.
    Show {
        /// Config file path.
        #[arg(short, long, default_value = "config/nodelink.toml")]
        config: PathBuf,
    },
}

/// Run the config command.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Validate { config } => validate_config(&config),
        ConfigCommand::Show { config } => show_config(&config),
    }
}

fn validate_config(path: &PathBuf) -> Result<()> {
    let config = TransportConfig::from_file(path)?;
    println!("✓ {} is valid", path.display());
    if config.tls_enabled() {
        println!("  listener: TLS");
    } else {
        println!("  listener: plaintext");
    }
    if let Some(ref ca_path) = config.ca_path {
        let trust = TrustStore::load(ca_path)
            .with_context(|| format!("failed to load CA bundle {}", ca_path))?;
        println!("  trusted CAs: {} from {}", trust.cert_count(), ca_path);
    }
    if config.skip_verify {
        println!("  ⚠ Warning: skip_verify disables peer certificate checks");
    }
    Ok(())
}

fn show_config(path: &PathBuf) -> Result<()> {
    let config = TransportConfig::from_file(path)?;
    let rendered = toml::to_string_pretty(&config).context("failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
