//! Command-line interface.
//!
//! Operator CLI for running and probing a node transport.

pub mod commands;

use clap::{Parser, Subcommand};

/// Nodelink - TCP/TLS transport for inter-node communication.
#[derive(Parser, Debug)]
#[command(name = "nodelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen for peers and echo everything they send.
    Listen(commands::ListenArgs),
    /// Dial a peer, send a message and print the reply.
    Dial(commands::DialArgs),
    /// Configuration operations.
    Config(commands::ConfigArgs),
}
