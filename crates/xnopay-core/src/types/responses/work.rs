use serde::Deserialize;

use crate::types::{BlockHash, empty_string_as_default, string_bool};

#[derive(Debug, Clone, Deserialize)]
pub struct WorkGenerateResponse {
    pub work: String,
    /// Difficulty of the returned work, as 16 hex digits.
    pub difficulty: Option<String>,
    pub multiplier: Option<String>,
    pub hash: Option<BlockHash>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkPeersResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub work_peers: Vec<String>,
}

/// Result of `work_validate`. Nodes up to v20 only report `valid`; later
/// nodes report the per-threshold flags instead.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkValidateResponse {
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub valid_all: Option<bool>,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub valid_receive: Option<bool>,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub valid: Option<bool>,
    pub difficulty: Option<String>,
    pub multiplier: Option<String>,
}

impl WorkValidateResponse {
    /// Whether the work meets the send/change threshold, whatever the node
    /// version reported.
    pub fn is_valid(&self) -> bool {
        self.valid_all.or(self.valid).unwrap_or(false)
    }
}
