use std::fmt::Debug;

use serde::Deserialize;

use crate::types::Account;

/// A key pair as returned by `key_create`, `key_expand` and
/// `deterministic_key`. The private key is left out of `Debug` output.
#[derive(Clone, Deserialize)]
pub struct KeyPairResponse {
    pub private: String,
    pub public: String,
    pub account: Account,
}

impl Debug for KeyPairResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPairResponse")
            .field("private", &"[redacted]")
            .field("public", &self.public)
            .field("account", &self.account)
            .finish()
    }
}
