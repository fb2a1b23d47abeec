//! Nodelink - unified CLI entrypoint.
//!
//! Usage:
//!   nodelink listen --bind 0.0.0.0:4002 [--advertise node1:4002]
//!   nodelink dial node1:4002 [--tls] [--skip-verify] [--message ping]
//!   nodelink config validate --config config/nodelink.toml

use anyhow::Result;
use clap::Parser;
use nodelink::cli::commands::{run_config, run_dial, run_listen};
use nodelink::cli::{Cli, Commands};
use nodelink::core::config::ConfigOverrides;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        log_level: cli.log_level,
        ..Default::default()
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Listen(args) => run_listen(config_path, overrides, args).await,
        Commands::Dial(args) => run_dial(config_path, overrides, args).await,
        Commands::Config(args) => run_config(args),
    }
}
