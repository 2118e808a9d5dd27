//! Transports that carry requests to a node.

#[cfg(feature = "http-client")]
pub mod http;
