//! Listen command implementation.

use super::{init_tracing, load_config};
use crate::core::config::ConfigOverrides;
use crate::core::error::TransportError;
use crate::net::conn::Connection;
use crate::net::transport::Transport;
use crate::ops::observability::{Observers, TracingObserver, TransportMetrics};
use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

/// Listen for peers and echo their bytes back.
#[derive(Args, Debug)]
pub struct ListenArgs {
    /// Bind address (host:port).
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Address advertised to other nodes.
    #[arg(long)]
    pub advertise: Option<String>,
}

/// Run the listen command until Ctrl-C.
pub async fn run_listen(
    config_path: Option<&str>,
    mut overrides: ConfigOverrides,
    args: ListenArgs,
) -> Result<()> {
    overrides.bind = args.bind;
    overrides.advertised_addr = args.advertise;
    let config = load_config(config_path, &overrides)?;
    init_tracing(&config.log_level);

    let metrics = Arc::new(TransportMetrics::new());
    let observers = Observers::new()
        .with(Arc::new(TracingObserver))
        .with(metrics.clone());
    let transport = Arc::new(Transport::from_config(&config)?.with_observer(Arc::new(observers)));

    transport
        .open(&config.bind)
        .await
        .with_context(|| format!("failed to open transport on {}", config.bind))?;
    tracing::info!(addr = %transport.addr(), tls = transport.is_tls(), "accepting connections");

    let acceptor = transport.clone();
    let accept_loop = tokio::spawn(async move {
        loop {
            match acceptor.accept().await {
                Ok(conn) => {
                    tokio::spawn(echo(conn));
                }
                Err(TransportError::Closed) => break,
                Err(e) if e.is_retriable() => {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                Err(_) => break,
            }
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("failed to wait for Ctrl-C")?;
    tracing::warn!("shutdown signal received (SIGINT)");

    transport.close()?;
    let _ = accept_loop.await;

    println!("{}", serde_json::to_string_pretty(&metrics.snapshot())?);
    Ok(())
}

async fn echo(conn: Connection) {
    let id = conn.id;
    let peer = conn.peer_addr;
    let (mut reader, mut writer) = conn.into_split();
    match tokio::io::copy(&mut reader, &mut writer).await {
        Ok(bytes) => tracing::debug!(conn = %id, peer = %peer, bytes, "connection finished"),
        Err(e) => tracing::debug!(conn = %id, peer = %peer, error = %e, "connection failed"),
    }
}
