//! Networking layer.
//!
//! This module handles network transport and security:
//! - [`transport`] - The listen/accept/dial/close transport
//! - [`listener`] - Listener abstraction (plain and TLS)
//! - [`conn`] - Connection type handed to callers
//! - [`tls`] - TLS server and client configuration

pub mod conn;
pub mod listener;
pub mod tls;
pub mod transport;
