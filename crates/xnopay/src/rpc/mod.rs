//! Typed node actions.
//!
//! Each action is an async method on [`NanoRpc`](crate::NanoRpc), grouped
//! here by what it touches. Required arguments are positional; optional
//! ones come in the option structs of [`types::options`](crate::types::options).

mod accounts;
mod blocks;
mod keys;
mod node;
mod work;

/// `count`-style arguments where the node treats zero as "not given".
fn nonzero(value: Option<u64>) -> Option<String> {
    value.filter(|value| *value > 0).map(|value| value.to_string())
}
