//! Typed node responses.
//!
//! Amounts decode to [`RawAmount`], counts and timestamps to `u64`, flags to
//! `bool`. Block contents and other node-version dependent objects stay as
//! [`AnyJson`].

mod accounts;
mod blocks;
mod keys;
mod node;
mod work;

pub use accounts::*;
pub use blocks::*;
pub use keys::*;
pub use node::*;
pub use work::*;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, de::Error};

use crate::types::{Account, AnyJson, BlockHash, RawAmount, string_number};

/// Acknowledgement returned by actions with no payload (`{"success": ""}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: String,
}

/// Acknowledgement of actions that start background work.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedResponse {
    #[serde(deserialize_with = "crate::types::string_bool::deserialize")]
    pub started: bool,
}

/// A receivable block together with its sender.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceivableSource {
    pub amount: RawAmount,
    pub source: Option<Account>,
    #[serde(default, with = "string_number::option")]
    pub min_version: Option<u64>,
}

/// The three shapes `receivable` style actions answer with, depending on
/// `threshold` and `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivableBlocks {
    Hashes(Vec<BlockHash>),
    Amounts(HashMap<BlockHash, RawAmount>),
    WithSource(HashMap<BlockHash, ReceivableSource>),
}

impl Default for ReceivableBlocks {
    fn default() -> Self {
        ReceivableBlocks::Hashes(Vec::new())
    }
}

impl ReceivableBlocks {
    pub fn hashes(&self) -> Vec<BlockHash> {
        match self {
            ReceivableBlocks::Hashes(hashes) => hashes.clone(),
            ReceivableBlocks::Amounts(blocks) => blocks.keys().copied().collect(),
            ReceivableBlocks::WithSource(blocks) => blocks.keys().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReceivableBlocks::Hashes(hashes) => hashes.len(),
            ReceivableBlocks::Amounts(blocks) => blocks.len(),
            ReceivableBlocks::WithSource(blocks) => blocks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all amounts, when the node reported them.
    pub fn total(&self) -> Option<RawAmount> {
        match self {
            ReceivableBlocks::Hashes(_) => None,
            ReceivableBlocks::Amounts(blocks) => blocks
                .values()
                .try_fold(RawAmount::ZERO, |acc, amount| acc.checked_add(*amount)),
            ReceivableBlocks::WithSource(blocks) => blocks
                .values()
                .try_fold(RawAmount::ZERO, |acc, block| acc.checked_add(block.amount)),
        }
    }
}

impl<'de> Deserialize<'de> for ReceivableBlocks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match AnyJson::deserialize(deserializer)? {
            AnyJson::Null => Ok(ReceivableBlocks::default()),
            AnyJson::String(s) if s.is_empty() => Ok(ReceivableBlocks::default()),
            value @ AnyJson::Array(_) => Vec::deserialize(value)
                .map(ReceivableBlocks::Hashes)
                .map_err(D::Error::custom),
            AnyJson::Object(map) if map.values().all(AnyJson::is_string) => {
                HashMap::deserialize(AnyJson::Object(map))
                    .map(ReceivableBlocks::Amounts)
                    .map_err(D::Error::custom)
            }
            value @ AnyJson::Object(_) => HashMap::deserialize(value)
                .map(ReceivableBlocks::WithSource)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "unexpected receivable blocks: {other}"
            ))),
        }
    }
}

/// Details of a connected peer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeerDetail {
    #[serde(with = "string_number")]
    pub protocol_version: u64,
    pub node_id: Option<String>,
    #[serde(rename = "type")]
    pub peer_type: Option<String>,
}

/// Peers as a bare address list or keyed by `[ip]:port`.
///
/// Without `peer_details` the node maps each address to its protocol
/// version only; those decode to a [`PeerDetail`] without id and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peers {
    Addresses(Vec<String>),
    Detailed(HashMap<String, PeerDetail>),
}

impl Default for Peers {
    fn default() -> Self {
        Peers::Detailed(HashMap::new())
    }
}

impl Peers {
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Peers::Addresses(addresses) => addresses.iter().map(String::as_str).collect(),
            Peers::Detailed(peers) => peers.keys().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Peers::Addresses(addresses) => addresses.len(),
            Peers::Detailed(peers) => peers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for Peers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match AnyJson::deserialize(deserializer)? {
            AnyJson::Null => Ok(Peers::default()),
            AnyJson::String(s) if s.is_empty() => Ok(Peers::default()),
            value @ AnyJson::Array(_) => Vec::deserialize(value)
                .map(Peers::Addresses)
                .map_err(D::Error::custom),
            AnyJson::Object(map) => map
                .into_iter()
                .map(|(address, detail)| -> Result<(String, PeerDetail), D::Error> {
                    let detail = match detail {
                        AnyJson::String(version) => PeerDetail {
                            protocol_version: version.parse().map_err(D::Error::custom)?,
                            node_id: None,
                            peer_type: None,
                        },
                        other => PeerDetail::deserialize(other).map_err(D::Error::custom)?,
                    };
                    Ok((address, detail))
                })
                .collect::<Result<_, _>>()
                .map(Peers::Detailed),
            other => Err(D::Error::custom(format!("unexpected peers: {other}"))),
        }
    }
}

/// Online representatives, optionally with their voting weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnlineRepresentatives {
    Accounts(Vec<Account>),
    Weighted(HashMap<Account, RawAmount>),
}

impl Default for OnlineRepresentatives {
    fn default() -> Self {
        OnlineRepresentatives::Accounts(Vec::new())
    }
}

impl OnlineRepresentatives {
    pub fn accounts(&self) -> Vec<Account> {
        match self {
            OnlineRepresentatives::Accounts(accounts) => accounts.clone(),
            OnlineRepresentatives::Weighted(weights) => weights.keys().copied().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for OnlineRepresentatives {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Weight {
            weight: RawAmount,
        }

        match AnyJson::deserialize(deserializer)? {
            AnyJson::Null => Ok(OnlineRepresentatives::default()),
            AnyJson::String(s) if s.is_empty() => Ok(OnlineRepresentatives::default()),
            value @ AnyJson::Array(_) => Vec::deserialize(value)
                .map(OnlineRepresentatives::Accounts)
                .map_err(D::Error::custom),
            AnyJson::Object(map) => map
                .into_iter()
                .map(|(account, detail)| -> Result<(Account, RawAmount), D::Error> {
                    let account: Account = account.parse().map_err(D::Error::custom)?;
                    let weight = match detail {
                        // nodes before v17 map each account to an empty string
                        AnyJson::String(s) if s.is_empty() => RawAmount::ZERO,
                        AnyJson::String(s) => s.parse().map_err(D::Error::custom)?,
                        other => {
                            Weight::deserialize(other)
                                .map_err(D::Error::custom)?
                                .weight
                        }
                    };
                    Ok((account, weight))
                })
                .collect::<Result<_, _>>()
                .map(OnlineRepresentatives::Weighted),
            other => Err(D::Error::custom(format!(
                "unexpected representatives: {other}"
            ))),
        }
    }
}
