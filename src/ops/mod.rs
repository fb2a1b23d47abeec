//! Operations and observability.
//!
//! - [`observability`] - Transport events, observers and metrics

pub mod observability;
