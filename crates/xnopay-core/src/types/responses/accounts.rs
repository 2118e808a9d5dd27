use serde::Deserialize;

use crate::types::{
    Account, AnyJson, BlockHash, RawAmount, Record, empty_string_as_default, string_bool,
    string_number,
};

use super::{OnlineRepresentatives, ReceivableBlocks};

#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalanceResponse {
    pub balance: RawAmount,
    /// Deprecated alias of `receivable`, still sent by current nodes.
    pub pending: Option<RawAmount>,
    pub receivable: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountBlockCountResponse {
    #[serde(with = "string_number")]
    pub block_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountGetResponse {
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountHistoryResponse {
    pub account: Account,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub history: Vec<AccountHistoryEntry>,
    /// Continue from here to page further back.
    pub previous: Option<BlockHash>,
    /// Continue from here when walking with `reverse`.
    pub next: Option<BlockHash>,
}

/// One block in an account's history. With `raw` set the node adds the full
/// state block fields, which are kept in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountHistoryEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub account: Option<Account>,
    pub amount: Option<RawAmount>,
    #[serde(default, with = "string_number::option")]
    pub local_timestamp: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub height: Option<u64>,
    pub hash: BlockHash,
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub confirmed: Option<bool>,
    pub subtype: Option<String>,
    #[serde(flatten)]
    pub extra: Record<AnyJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfoResponse {
    pub frontier: BlockHash,
    pub open_block: BlockHash,
    pub representative_block: BlockHash,
    pub balance: RawAmount,
    #[serde(with = "string_number")]
    pub modified_timestamp: u64,
    #[serde(with = "string_number")]
    pub block_count: u64,
    #[serde(default, with = "string_number::option")]
    pub account_version: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub confirmation_height: Option<u64>,
    pub confirmation_height_frontier: Option<BlockHash>,
    pub representative: Option<Account>,
    pub weight: Option<RawAmount>,
    pub pending: Option<RawAmount>,
    pub receivable: Option<RawAmount>,
    pub confirmed_balance: Option<RawAmount>,
    #[serde(default, with = "string_number::option")]
    pub confirmed_height: Option<u64>,
    pub confirmed_frontier: Option<BlockHash>,
    pub confirmed_representative: Option<Account>,
    pub confirmed_pending: Option<RawAmount>,
    pub confirmed_receivable: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountKeyResponse {
    /// Public key as uppercase hex.
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountRepresentativeResponse {
    pub representative: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountWeightResponse {
    pub weight: RawAmount,
}

/// Balance of one account in `accounts_balances`. Nodes from v24 report a
/// per-account `error` instead of failing the whole request.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsBalanceEntry {
    pub balance: Option<RawAmount>,
    pub pending: Option<RawAmount>,
    pub receivable: Option<RawAmount>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsBalancesResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub balances: Record<AccountsBalanceEntry>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub errors: Record<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsFrontiersResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub frontiers: Record<String>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub errors: Record<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsReceivableResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Record<ReceivableBlocks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsRepresentativesResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub representatives: Record<String>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub errors: Record<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DelegatorsResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub delegators: Record<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    #[serde(with = "string_number")]
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontiersResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub frontiers: Record<BlockHash>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerAccountInfo {
    pub frontier: BlockHash,
    pub open_block: BlockHash,
    pub representative_block: BlockHash,
    pub balance: RawAmount,
    #[serde(with = "string_number")]
    pub modified_timestamp: u64,
    #[serde(with = "string_number")]
    pub block_count: u64,
    pub representative: Option<Account>,
    pub weight: Option<RawAmount>,
    pub pending: Option<RawAmount>,
    pub receivable: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub accounts: Record<LedgerAccountInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceivableResponse {
    #[serde(default)]
    pub blocks: ReceivableBlocks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExistsResponse {
    #[serde(deserialize_with = "string_bool::deserialize")]
    pub exists: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativesResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub representatives: Record<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativesOnlineResponse {
    #[serde(default)]
    pub representatives: OnlineRepresentatives,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnopenedResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub accounts: Record<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateAccountNumberResponse {
    #[serde(deserialize_with = "string_bool::deserialize")]
    pub valid: bool,
}
