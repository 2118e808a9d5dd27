//! Core types used across xnopay.

mod account;
mod amount;
mod common;
mod hash;
mod request;

pub mod options;
pub mod responses;

pub use account::*;
pub use amount::*;
pub use common::*;
pub use hash::*;
pub use request::*;
