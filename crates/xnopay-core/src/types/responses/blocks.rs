use serde::Deserialize;

use crate::types::{
    Account, AnyJson, BlockHash, RawAmount, Record, empty_string_as_default, string_bool,
    string_number,
};

#[derive(Debug, Clone, Deserialize)]
pub struct BlockAccountResponse {
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockCountResponse {
    #[serde(with = "string_number")]
    pub count: u64,
    #[serde(with = "string_number")]
    pub unchecked: u64,
    #[serde(default, with = "string_number::option")]
    pub cemented: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockCreateResponse {
    pub hash: BlockHash,
    /// The block as a JSON object with `json_block`, otherwise a JSON string.
    pub block: AnyJson,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashResponse {
    pub hash: BlockHash,
}

/// Answer to `process`: the published block's `hash`, or only `started`
/// when the block was queued with `async`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    pub hash: Option<BlockHash>,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub started: Option<bool>,
}

/// Information about one block, shared by `block_info` and `blocks_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockInfoResponse {
    pub block_account: Account,
    pub amount: Option<RawAmount>,
    pub balance: RawAmount,
    #[serde(with = "string_number")]
    pub height: u64,
    #[serde(with = "string_number")]
    pub local_timestamp: u64,
    /// All zeros while the block is the account frontier.
    pub successor: Option<BlockHash>,
    #[serde(default, deserialize_with = "string_bool::deserialize")]
    pub confirmed: bool,
    pub contents: AnyJson,
    pub subtype: Option<String>,
    pub receive_hash: Option<BlockHash>,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub pending: Option<bool>,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub receivable: Option<bool>,
    pub source_account: Option<String>,
}

impl BlockInfoResponse {
    /// Whether `successor` points at a later block.
    pub fn has_successor(&self) -> bool {
        self.successor.is_some_and(|successor| !successor.is_zero())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlocksResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Record<AnyJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlocksInfoResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Record<BlockInfoResponse>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks_not_found: Vec<BlockHash>,
}

/// A list of block hashes, as answered by `chain`, `successors` and
/// `republish`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHashesResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Vec<BlockHash>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignResponse {
    pub signature: String,
    pub block: Option<AnyJson>,
}
