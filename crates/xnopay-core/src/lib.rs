//! Protocol types for the Nano node JSON-RPC interface.
//!
//! Everything here is I/O free: amounts in raw, account addresses, block
//! hashes, the request envelope and the typed option and response structs
//! used by the `xnopay` client.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
