//! Optional parameters for node actions.
//!
//! Every struct is built with its `builder()` (or `Default`) and merged into
//! the request with [`RpcRequest::extend`](crate::types::RpcRequest::extend).
//! Unset fields are not sent. Numeric fields go over the wire as decimal
//! strings.

use bon::Builder;
use serde::Serialize;

use crate::types::{Account, AnyJson, BlockHash, RawAmount, string_number};

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct AccountHistoryOptions {
    /// Return every field of state blocks instead of the legacy summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    /// Start from this block instead of the frontier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<BlockHash>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub offset: Option<u64>,
    /// Walk from the open block towards the frontier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_filter: Option<Vec<Account>>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct AccountInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_confirmed: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct BalanceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ReceivableOptions {
    /// Only return blocks with at least this amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RawAmount>,
    /// Include the sending account of each block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<bool>,
    /// Sort by amount, descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct AccountsReceivableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RawAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ReceivableExistsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct BlockInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_hash: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct BlocksOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct BlocksInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    /// List unknown hashes in `blocks_not_found` instead of failing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_not_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_hash: Option<bool>,
}

/// Parameters of `block_create`. Either `key`, or `wallet` with `account`,
/// identifies the signer.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct BlockCreateParams {
    #[serde(rename = "type")]
    #[builder(default = String::from("state"), into)]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<RawAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ChainOptions {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ConfirmationHistoryOptions {
    /// Restrict the history to a single block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<BlockHash>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ConfirmationInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representatives: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct LedgerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivable: Option<bool>,
    /// Unix timestamp; only accounts modified after it are returned.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub modified_since: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RawAmount>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ProcessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    /// `send`, `receive`, `open`, `change` or `epoch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_work: Option<bool>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct RepublishOptions {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub count: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub sources: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub destinations: Option<u64>,
}

/// Parameters of `sign`: a `key`, or `wallet` with `account`, signs either
/// a `block` or a bare `hash`.
#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct SignParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<AnyJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct TelemetryOptions {
    /// Return every peer's metrics instead of the aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "string_number::option"
    )]
    pub port: Option<u16>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct UncheckedOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct UncheckedGetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct UncheckedKeysOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct WorkGenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub multiplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<AnyJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct WorkValidateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub multiplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numbers_are_sent_as_strings() {
        let options = AccountHistoryOptions::builder()
            .offset(5)
            .reverse(true)
            .build();

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "offset": "5", "reverse": true })
        );
    }

    #[test]
    fn test_block_create_defaults_to_state() {
        let params = BlockCreateParams::builder()
            .balance(RawAmount(1000))
            .key("0000000000000000000000000000000000000000000000000000000000000001")
            .json_block(true)
            .build();

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["type"], "state");
        assert_eq!(value["balance"], "1000");
        assert_eq!(value["json_block"], true);
        assert!(value.get("wallet").is_none());
    }

    #[test]
    fn test_process_async_flag_name() {
        let options = ProcessOptions::builder()
            .subtype("send")
            .is_async(true)
            .build();

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "subtype": "send", "async": true })
        );
    }

    #[test]
    fn test_default_options_are_empty() {
        assert_eq!(
            serde_json::to_value(ReceivableOptions::default()).unwrap(),
            json!({})
        );
    }
}
