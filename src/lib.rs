//! Nodelink - pluggable TCP/TLS transport for inter-node communication.
//!
//! Nodelink binds a listening socket, accepts inbound connections and dials
//! outbound connections, optionally wrapping both paths in TLS. Higher-level
//! cluster protocols run on top of the byte streams it hands back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Node / cluster protocol (caller)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Transport                            │
//! │        open │ accept │ dial │ close │ addr                      │
//! └─────────────────────────────────────────────────────────────────┘
//!            │                                  │
//! ┌──────────────────────────┐   ┌──────────────────────────────────┐
//! │  Listener (plain / TLS)  │   │  Dialer (source IP, TLS client)  │
//! └──────────────────────────┘   └──────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Error types
//!
//! ## Networking
//! - [`net::transport`] - The transport
//! - [`net::listener`] - Listener abstraction
//! - [`net::conn`] - Connections
//! - [`net::tls`] - TLS configuration
//!
//! ## Operations
//! - [`ops::observability`] - Events, observers and metrics
//!
//! ## CLI
//! - [`cli::commands`] - CLI command implementations

// Core infrastructure
pub mod core;

// Networking
pub mod net;

// Operations and observability
pub mod ops;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::{config, error};
pub use net::conn::{Connection, ConnectionId};
pub use net::listener::Listener;
pub use net::transport::{Transport, TransportAddr, TransportState};
pub use net::{listener, tls, transport};
pub use ops::observability;
