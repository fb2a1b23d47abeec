//! Dial command implementation.

use super::{init_tracing, load_config};
use crate::core::config::ConfigOverrides;
use crate::net::transport::Transport;
use anyhow::{Context, Result};
use clap::Args;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Dial a peer and exchange one message.
#[derive(Args, Debug)]
pub struct DialArgs {
    /// Remote address (host:port).
    pub addr: String,

    /// Message to send.
    #[arg(short, long, default_value = "ping")]
    pub message: String,

    /// Dial timeout in milliseconds (0 = no deadline).
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Negotiate TLS with the peer.
    #[arg(long)]
    pub tls: bool,

    /// Skip verification of the peer certificate.
    #[arg(long)]
    pub skip_verify: bool,

    /// Local IP to dial from.
    #[arg(long)]
    pub source_ip: Option<String>,
}

/// Run the dial command.
pub async fn run_dial(
    config_path: Option<&str>,
    mut overrides: ConfigOverrides,
    args: DialArgs,
) -> Result<()> {
    overrides.skip_verify = args.skip_verify;
    overrides.source_ip = args.source_ip;
    let mut config = load_config(config_path, &overrides)?;
    config.remote_encrypted |= args.tls;
    init_tracing(&config.log_level);

    let transport = Transport::from_config(&config)?;
    let timeout = args
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.dial_timeout());

    let started = Instant::now();
    let mut conn = transport
        .dial(&args.addr, timeout)
        .await
        .with_context(|| format!("failed to dial {}", args.addr))?;
    let connected_in = started.elapsed();

    conn.write_all(args.message.as_bytes()).await?;
    conn.flush().await?;

    let mut reply = vec![0u8; args.message.len()];
    conn.read_exact(&mut reply)
        .await
        .context("peer closed before replying")?;

    println!("Connected to {} ({})", conn.peer_addr, conn.id);
    println!("  local:     {}", conn.local_addr);
    println!("  encrypted: {}", conn.encrypted);
    println!("  connect:   {:?}", connected_in);
    println!("  reply:     {}", String::from_utf8_lossy(&reply));
    Ok(())
}
