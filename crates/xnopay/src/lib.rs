//! # xnopay
//!
//! A typed, retrying client for the JSON-RPC interface of Nano (XNO) nodes.
//!
//! ## Core Components Overview
//!
//! - **[`NanoRpc`]**: the client. Every node action is an async method with a typed
//!   response; anything else goes through [`NanoRpc::call`].
//! - **[`types`]**: amounts in raw, account addresses, block hashes, request options and
//!   responses. Re-exported from `xnopay-core`.
//! - **[`auth`]**: bearer token, API key and basic authentication for hosted nodes.
//! - **[`config`]**: retry policy and node connection settings.
//! - **[`concepts`]**: the [`RpcTransport`](concepts::RpcTransport) trait, for bringing your
//!   own transport.
//! - **[`transports`]**: the reqwest based HTTP transport (feature `http-client`, on by default).
//!
//! ## Quick Start
//!
//! ```no_run
//! use xnopay::{
//!     Authentication, rpc,
//!     types::{Account, options::BalanceOptions},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let node = rpc("https://rpc.example.com", Authentication::api_key("my-key"))?;
//!
//! let account: Account = "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3".parse()?;
//! let balance = node.account_balance(&account, BalanceOptions::default()).await?;
//!
//! println!("balance: {} XNO", balance.balance.to_xno_string());
//! # Ok(())
//! # }
//! ```
//!
//! ## Amounts
//!
//! The node counts everything in raw (10^-30 XNO). [`RawAmount`](types::RawAmount) converts
//! between units without floating point:
//!
//! ```
//! use xnopay::types::{RawAmount, Unit};
//!
//! let amount = RawAmount::from_xno("1.5").unwrap();
//! assert_eq!(amount.to_string(), "1500000000000000000000000000000");
//! assert_eq!(amount.to_unit_string(Unit::Knano), "1500");
//! ```
//!
//! ## Retries
//!
//! Failed calls are attempted again with a linearly growing delay. The default is three
//! retries, one second apart times the attempt number:
//!
//! ```
//! use std::time::Duration;
//! use xnopay::config::RetryPolicy;
//!
//! let policy = RetryPolicy::builder()
//!     .max_retries(5)
//!     .base_delay(Duration::from_millis(200))
//!     .retry_node_errors(false)
//!     .build();
//!
//! assert_eq!(policy.attempts(), 6);
//! assert_eq!(policy.delay_after(2), Duration::from_millis(400));
//! ```
//!
//! Transport failures are always retried. Answers carrying `{"error": ...}` are retried unless
//! `retry_node_errors` is off. Responses that fail to decode are never retried.
//!
//! ## Custom Transports
//!
//! Implement [`RpcTransport`](concepts::RpcTransport) to send requests some other way, e.g.
//! through a websocket bridge or a test double:
//!
//! ```
//! use std::convert::Infallible;
//! use xnopay::{NanoRpc, concepts::RpcTransport, types::{AnyJson, RpcRequest}};
//!
//! struct Offline;
//!
//! impl RpcTransport for Offline {
//!     type Error = Infallible;
//!
//!     async fn send(&self, _request: &RpcRequest) -> Result<AnyJson, Infallible> {
//!         Ok(serde_json::json!({ "seconds": "42" }))
//!     }
//! }
//!
//! # async fn example() {
//! let node = NanoRpc::new(Offline);
//! assert_eq!(node.uptime().await.unwrap().seconds, 42);
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod concepts;
pub mod config;
pub mod errors;
pub mod transports;

mod rpc;

#[cfg(test)]
mod mock;

pub mod types {
    pub use xnopay_core::types::*;
}

pub use auth::Authentication;
pub use client::*;
