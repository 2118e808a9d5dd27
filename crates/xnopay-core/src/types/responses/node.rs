use serde::{Deserialize, Deserializer, Serialize, de::Error};

use crate::types::{
    Account, AnyJson, BlockHash, RawAmount, Record, empty_string_as_default, string_bool,
    string_number,
};

use super::Peers;

#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSupplyResponse {
    pub available: RawAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapLazyResponse {
    #[serde(deserialize_with = "string_bool::deserialize")]
    pub started: bool,
    #[serde(deserialize_with = "string_bool::deserialize")]
    pub key_inserted: bool,
}

/// Bootstrap progress. The layout changed across node versions, so only
/// the stable counters are typed.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatusResponse {
    #[serde(default, with = "string_number::option")]
    pub bootstrap_threads: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub running_attempts_count: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub total_attempts_count: Option<u64>,
    pub connections: Option<AnyJson>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub attempts: Vec<AnyJson>,
    #[serde(flatten)]
    pub extra: Record<AnyJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationActiveResponse {
    /// Election roots.
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub confirmations: Vec<String>,
    #[serde(default, with = "string_number::option")]
    pub unconfirmed: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub confirmed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationStats {
    #[serde(with = "string_number")]
    pub count: u64,
    /// Average election duration in milliseconds.
    #[serde(default, with = "string_number::option")]
    pub average: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationEntry {
    pub hash: BlockHash,
    #[serde(with = "string_number")]
    pub duration: u64,
    #[serde(with = "string_number")]
    pub time: u64,
    pub tally: RawAmount,
    pub final_tally: Option<RawAmount>,
    #[serde(default, with = "string_number::option")]
    pub blocks: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub voters: Option<u64>,
    #[serde(default, with = "string_number::option")]
    pub request_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationHistoryResponse {
    pub confirmation_stats: ConfirmationStats,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub confirmations: Vec<ConfirmationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationBlockInfo {
    pub tally: RawAmount,
    pub final_tally: Option<RawAmount>,
    pub contents: Option<AnyJson>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub representatives: Record<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationInfoResponse {
    #[serde(with = "string_number")]
    pub announcements: u64,
    #[serde(default, with = "string_number::option")]
    pub voters: Option<u64>,
    pub last_winner: BlockHash,
    pub total_tally: RawAmount,
    pub final_tally: Option<RawAmount>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Record<ConfirmationBlockInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeerStake {
    pub account: Account,
    pub ip: String,
    pub weight: RawAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationQuorumResponse {
    pub quorum_delta: RawAmount,
    #[serde(with = "string_number")]
    pub online_weight_quorum_percent: u64,
    pub online_weight_minimum: RawAmount,
    pub online_stake_total: RawAmount,
    pub peers_stake_total: RawAmount,
    pub trended_stake_total: Option<RawAmount>,
    pub peers_stake_required: Option<RawAmount>,
    #[serde(default, alias = "peer_details", deserialize_with = "empty_string_as_default")]
    pub peers: Vec<PeerStake>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeIdResponse {
    /// Only returned by nodes before v23.
    pub private: Option<String>,
    pub public: Option<String>,
    pub as_account: Option<String>,
    pub node_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeIdDeleteResponse {
    #[serde(default, deserialize_with = "string_bool::option::deserialize")]
    pub deprecated: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeersResponse {
    #[serde(default)]
    pub peers: Peers,
}

/// Which statistics `stats` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsType {
    Counters,
    Samples,
    Objects,
    Database,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsEntry {
    pub time: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub detail: String,
    pub dir: String,
    #[serde(with = "string_number")]
    pub value: u64,
}

/// Node statistics. Counters and samples come as `entries`; objects and
/// database statistics are free-form and kept in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "type")]
    pub stats_type: Option<String>,
    pub created: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub entries: Vec<StatsEntry>,
    #[serde(default, with = "string_number::option")]
    pub stat_duration_seconds: Option<u64>,
    #[serde(flatten)]
    pub extra: Record<AnyJson>,
}

/// Metrics a node reports about itself over telemetry.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryMetrics {
    #[serde(with = "string_number")]
    pub block_count: u64,
    #[serde(with = "string_number")]
    pub cemented_count: u64,
    #[serde(with = "string_number")]
    pub unchecked_count: u64,
    #[serde(with = "string_number")]
    pub account_count: u64,
    #[serde(with = "string_number")]
    pub bandwidth_cap: u64,
    #[serde(with = "string_number")]
    pub peer_count: u64,
    #[serde(with = "string_number")]
    pub protocol_version: u64,
    #[serde(with = "string_number")]
    pub uptime: u64,
    pub genesis_block: BlockHash,
    #[serde(with = "string_number")]
    pub major_version: u64,
    #[serde(with = "string_number")]
    pub minor_version: u64,
    #[serde(with = "string_number")]
    pub patch_version: u64,
    #[serde(with = "string_number")]
    pub pre_release_version: u64,
    #[serde(with = "string_number")]
    pub maker: u64,
    #[serde(with = "string_number")]
    pub timestamp: u64,
    pub active_difficulty: Option<String>,
    pub node_id: Option<String>,
    pub signature: Option<String>,
    pub address: Option<String>,
    #[serde(default, with = "string_number::option")]
    pub port: Option<u16>,
}

/// `telemetry` answers with an aggregate of all peers, or with each peer's
/// metrics when `raw` is set.
#[derive(Debug, Clone)]
pub enum TelemetryResponse {
    Aggregate(Box<TelemetryMetrics>),
    Raw(Vec<TelemetryMetrics>),
}

impl<'de> Deserialize<'de> for TelemetryResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = AnyJson::deserialize(deserializer)?;
        match value.get_mut("metrics").map(AnyJson::take) {
            Some(metrics) => empty_string_as_default(metrics)
                .map(TelemetryResponse::Raw)
                .map_err(D::Error::custom),
            None => TelemetryMetrics::deserialize(value)
                .map(|metrics| TelemetryResponse::Aggregate(Box::new(metrics)))
                .map_err(D::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UptimeResponse {
    #[serde(with = "string_number")]
    pub seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionResponse {
    #[serde(with = "string_number")]
    pub rpc_version: u64,
    #[serde(with = "string_number")]
    pub store_version: u64,
    #[serde(with = "string_number")]
    pub protocol_version: u64,
    pub node_vendor: String,
    pub store_vendor: Option<String>,
    pub network: Option<String>,
    pub network_identifier: Option<String>,
    pub build_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Record<AnyJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedGetResponse {
    #[serde(with = "string_number")]
    pub modified_timestamp: u64,
    pub contents: AnyJson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedKeyBlock {
    pub key: String,
    pub hash: BlockHash,
    #[serde(with = "string_number")]
    pub modified_timestamp: u64,
    pub contents: AnyJson,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedKeysResponse {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub unchecked: Vec<UncheckedKeyBlock>,
}
