//! Core traits used across xnopay.

use crate::types::{AnyJson, RpcRequest};

/// Delivers a request to a Nano node and hands back the node's JSON answer.
///
/// Implementations only move bytes: node-level `{"error": ...}` answers are
/// returned as `Ok` and turned into errors by [`NanoRpc`](crate::NanoRpc),
/// which also owns retries.
pub trait RpcTransport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(
        &self,
        request: &RpcRequest,
    ) -> impl Future<Output = Result<AnyJson, Self::Error>> + Send;
}
