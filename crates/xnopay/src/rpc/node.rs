use crate::{
    NanoRpc,
    concepts::RpcTransport,
    errors::RpcResult,
    rpc::nonzero,
    types::{
        Account, BlockHash, RpcRequest,
        options::{
            ConfirmationHistoryOptions, ConfirmationInfoOptions, TelemetryOptions,
            UncheckedGetOptions, UncheckedKeysOptions, UncheckedOptions,
        },
        responses::{
            AvailableSupplyResponse, BootstrapLazyResponse, BootstrapStatusResponse,
            ConfirmationActiveResponse, ConfirmationHistoryResponse, ConfirmationInfoResponse,
            ConfirmationQuorumResponse, HashResponse, NodeIdDeleteResponse, NodeIdResponse,
            PeersResponse, StartedResponse, StatsResponse, StatsType, SuccessResponse,
            TelemetryResponse, UncheckedGetResponse, UncheckedKeysResponse, UncheckedResponse,
            UptimeResponse, VersionResponse,
        },
    },
};

impl<T: RpcTransport> NanoRpc<T> {
    /// Supply minus the balances of the burn and reserve accounts.
    pub async fn available_supply(&self) -> RpcResult<AvailableSupplyResponse, T::Error> {
        self.call(RpcRequest::new("available_supply")).await
    }

    pub async fn bootstrap(
        &self,
        address: &str,
        port: u16,
        bypass_frontier_confirmation: Option<bool>,
        id: Option<&str>,
    ) -> RpcResult<SuccessResponse, T::Error> {
        let request = RpcRequest::new("bootstrap")
            .param("address", address)?
            .param("port", port.to_string())?
            .param("bypass_frontier_confirmation", bypass_frontier_confirmation)?
            .param("id", id)?;
        self.call(request).await
    }

    pub async fn bootstrap_any(
        &self,
        force: Option<bool>,
        id: Option<&str>,
        account: Option<&Account>,
    ) -> RpcResult<SuccessResponse, T::Error> {
        let request = RpcRequest::new("bootstrap_any")
            .param("force", force)?
            .param("id", id)?
            .param("account", account)?;
        self.call(request).await
    }

    pub async fn bootstrap_lazy(
        &self,
        hash: &BlockHash,
        force: Option<bool>,
        id: Option<&str>,
    ) -> RpcResult<BootstrapLazyResponse, T::Error> {
        let request = RpcRequest::new("bootstrap_lazy")
            .param("hash", hash)?
            .param("force", force)?
            .param("id", id)?;
        self.call(request).await
    }

    pub async fn bootstrap_status(&self) -> RpcResult<BootstrapStatusResponse, T::Error> {
        self.call(RpcRequest::new("bootstrap_status")).await
    }

    /// Roots of the active elections, optionally only those with at least
    /// `announcements` vote requests.
    pub async fn confirmation_active(
        &self,
        announcements: Option<u64>,
    ) -> RpcResult<ConfirmationActiveResponse, T::Error> {
        let request = RpcRequest::new("confirmation_active")
            .param("announcements", announcements.map(|value| value.to_string()))?;
        self.call(request).await
    }

    pub async fn confirmation_height_currently_processing(
        &self,
    ) -> RpcResult<HashResponse, T::Error> {
        self.call(RpcRequest::new("confirmation_height_currently_processing"))
            .await
    }

    pub async fn confirmation_history(
        &self,
        options: ConfirmationHistoryOptions,
    ) -> RpcResult<ConfirmationHistoryResponse, T::Error> {
        let request = RpcRequest::new("confirmation_history").extend(&options)?;
        self.call(request).await
    }

    pub async fn confirmation_info(
        &self,
        root: &str,
        options: ConfirmationInfoOptions,
    ) -> RpcResult<ConfirmationInfoResponse, T::Error> {
        let request = RpcRequest::new("confirmation_info")
            .param("root", root)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn confirmation_quorum(
        &self,
        peer_details: Option<bool>,
    ) -> RpcResult<ConfirmationQuorumResponse, T::Error> {
        let request = RpcRequest::new("confirmation_quorum").param("peer_details", peer_details)?;
        self.call(request).await
    }

    /// Upgrades accounts to `epoch`, signing with the epoch signer `key`.
    pub async fn epoch_upgrade(
        &self,
        epoch: u8,
        key: &str,
        count: Option<u64>,
        threads: Option<u64>,
    ) -> RpcResult<StartedResponse, T::Error> {
        let request = RpcRequest::new("epoch_upgrade")
            .param("epoch", epoch.to_string())?
            .param("key", key)?
            .param("count", nonzero(count))?
            .param("threads", nonzero(threads))?;
        self.call(request).await
    }

    pub async fn keepalive(&self, address: &str, port: u16) -> RpcResult<StartedResponse, T::Error> {
        let request = RpcRequest::new("keepalive")
            .param("address", address)?
            .param("port", port.to_string())?;
        self.call(request).await
    }

    pub async fn node_id(&self) -> RpcResult<NodeIdResponse, T::Error> {
        self.call(RpcRequest::new("node_id")).await
    }

    pub async fn node_id_delete(&self) -> RpcResult<NodeIdDeleteResponse, T::Error> {
        self.call(RpcRequest::new("node_id_delete")).await
    }

    pub async fn peers(&self, peer_details: Option<bool>) -> RpcResult<PeersResponse, T::Error> {
        let request = RpcRequest::new("peers").param("peer_details", peer_details)?;
        self.call(request).await
    }

    pub async fn populate_backlog(&self) -> RpcResult<SuccessResponse, T::Error> {
        self.call(RpcRequest::new("populate_backlog")).await
    }

    pub async fn stats(&self, stats_type: StatsType) -> RpcResult<StatsResponse, T::Error> {
        let request = RpcRequest::new("stats").param("type", stats_type)?;
        self.call(request).await
    }

    pub async fn stats_counters(&self) -> RpcResult<StatsResponse, T::Error> {
        self.stats(StatsType::Counters).await
    }

    pub async fn stats_samples(&self) -> RpcResult<StatsResponse, T::Error> {
        self.stats(StatsType::Samples).await
    }

    pub async fn stats_objects(&self) -> RpcResult<StatsResponse, T::Error> {
        self.stats(StatsType::Objects).await
    }

    pub async fn stats_database(&self) -> RpcResult<StatsResponse, T::Error> {
        self.stats(StatsType::Database).await
    }

    pub async fn stats_clear(&self) -> RpcResult<SuccessResponse, T::Error> {
        self.call(RpcRequest::new("stats_clear")).await
    }

    /// Shuts the node down.
    pub async fn stop(&self) -> RpcResult<SuccessResponse, T::Error> {
        self.call(RpcRequest::new("stop")).await
    }

    pub async fn telemetry(
        &self,
        options: TelemetryOptions,
    ) -> RpcResult<TelemetryResponse, T::Error> {
        let request = RpcRequest::new("telemetry").extend(&options)?;
        self.call(request).await
    }

    pub async fn uptime(&self) -> RpcResult<UptimeResponse, T::Error> {
        self.call(RpcRequest::new("uptime")).await
    }

    pub async fn version(&self) -> RpcResult<VersionResponse, T::Error> {
        self.call(RpcRequest::new("version")).await
    }

    pub async fn unchecked(
        &self,
        count: u64,
        options: UncheckedOptions,
    ) -> RpcResult<UncheckedResponse, T::Error> {
        let request = RpcRequest::new("unchecked")
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn unchecked_clear(&self) -> RpcResult<SuccessResponse, T::Error> {
        self.call(RpcRequest::new("unchecked_clear")).await
    }

    pub async fn unchecked_get(
        &self,
        hash: &BlockHash,
        options: UncheckedGetOptions,
    ) -> RpcResult<UncheckedGetResponse, T::Error> {
        let request = RpcRequest::new("unchecked_get")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn unchecked_keys(
        &self,
        key: &str,
        count: u64,
        options: UncheckedKeysOptions,
    ) -> RpcResult<UncheckedKeysResponse, T::Error> {
        let request = RpcRequest::new("unchecked_keys")
            .param("key", key)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        NanoRpc,
        mock::MockTransport,
        types::{
            Account, BlockHash, RawAmount,
            options::{
                ConfirmationInfoOptions, TelemetryOptions, UncheckedGetOptions,
                UncheckedKeysOptions,
            },
            responses::{Peers, StatsType, TelemetryResponse},
        },
    };

    const GENESIS: &str = "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";
    const REP: &str = "nano_1ipx847tk8o46pwxt5qjdbncjqcbwcc1rrmqnkztrfjy5k7z4imsrata9est";
    const HASH: &str = "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948";
    const PREVIOUS: &str = "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F";

    fn quorum_json() -> serde_json::Value {
        json!({
            "quorum_delta": "41469707173777717318245825935516662250",
            "online_weight_quorum_percent": "50",
            "online_weight_minimum": "60000000000000000000000000000000000000",
            "online_stake_total": "82939414347555434636491651871033324568",
            "peers_stake_total": "69026910610720098597176027400951402360",
            "trended_stake_total": "81939414347555434636491651871033324568"
        })
    }

    #[tokio::test]
    async fn test_version() {
        let transport = MockTransport::new().respond(json!({
            "rpc_version": "1",
            "store_version": "21",
            "protocol_version": "19",
            "node_vendor": "Nano V27.1",
            "store_vendor": "LMDB 0.9.31",
            "network": "live",
            "network_identifier": "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948",
            "build_info": "unknown"
        }));
        let node = NanoRpc::new(transport);

        let version = node.version().await.unwrap();
        assert_eq!(version.node_vendor, "Nano V27.1");
        assert_eq!(version.protocol_version, 19);
        assert_eq!(node.transport().last_request(), json!({ "action": "version" }));
    }

    #[tokio::test]
    async fn test_stats_types() {
        let transport = MockTransport::new()
            .respond(json!({ "type": "counters", "entries": "" }))
            .respond(json!({ "node": {} }));
        let node = NanoRpc::new(transport);

        node.stats_counters().await.unwrap();
        node.stats(StatsType::Objects).await.unwrap();

        assert_eq!(
            node.transport().requests(),
            vec![
                json!({ "action": "stats", "type": "counters" }),
                json!({ "action": "stats", "type": "objects" }),
            ]
        );
    }

    #[tokio::test]
    async fn test_peers_with_details() {
        let transport = MockTransport::new().respond(json!({
            "peers": {
                "[::ffff:172.17.0.1]:32841": {
                    "protocol_version": "18",
                    "node_id": "node_1y7j5rdqhg99uyab1145gu3yur1ax35a3b6qr417yt8cd6n86uiw3d4whty3",
                    "type": "tcp"
                }
            }
        }));
        let node = NanoRpc::new(transport);

        let response = node.peers(Some(true)).await.unwrap();
        assert!(matches!(response.peers, Peers::Detailed(_)));
        assert_eq!(response.peers.addresses(), vec!["[::ffff:172.17.0.1]:32841"]);
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "peers", "peer_details": true })
        );
    }

    #[tokio::test]
    async fn test_epoch_upgrade_skips_zero_counts() {
        let transport = MockTransport::new().respond(json!({ "started": "1" }));
        let node = NanoRpc::new(transport);

        let key = "0000000000000000000000000000000000000000000000000000000000000001";
        let response = node.epoch_upgrade(2, key, Some(0), Some(4)).await.unwrap();

        assert!(response.started);
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "epoch_upgrade", "epoch": "2", "key": key, "threads": "4" })
        );
    }

    #[tokio::test]
    async fn test_telemetry_for_single_peer() {
        let transport = MockTransport::new().respond(json!({ "metrics": "" }));
        let node = NanoRpc::new(transport);

        let options = TelemetryOptions::builder()
            .raw(true)
            .address("::ffff:152.89.106.89")
            .port(54000)
            .build();
        let telemetry = node.telemetry(options).await.unwrap();

        assert!(matches!(telemetry, TelemetryResponse::Raw(ref metrics) if metrics.is_empty()));
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "telemetry",
                "raw": true,
                "address": "::ffff:152.89.106.89",
                "port": "54000"
            })
        );
    }

    #[tokio::test]
    async fn test_keepalive_port_is_a_string() {
        let transport = MockTransport::new().respond(json!({ "started": "1" }));
        let node = NanoRpc::new(transport);

        node.keepalive("::ffff:192.168.1.1", 7075).await.unwrap();
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "keepalive", "address": "::ffff:192.168.1.1", "port": "7075" })
        );
    }

    #[tokio::test]
    async fn test_confirmation_quorum() {
        let transport = MockTransport::new().respond(quorum_json());
        let node = NanoRpc::new(transport);

        let quorum = node.confirmation_quorum(None).await.unwrap();

        assert_eq!(quorum.online_weight_quorum_percent, 50);
        assert_eq!(
            quorum.online_weight_minimum,
            RawAmount::from_xno("60000000").unwrap()
        );
        assert_eq!(
            quorum.trended_stake_total,
            Some(RawAmount(81939414347555434636491651871033324568))
        );
        assert_eq!(quorum.peers_stake_required, None);
        assert!(quorum.peers.is_empty());
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "confirmation_quorum" })
        );
    }

    #[tokio::test]
    async fn test_confirmation_quorum_with_peer_details() {
        let mut answer = quorum_json();
        answer["peers"] = json!([{
            "account": REP,
            "ip": "[::ffff:192.168.1.4]:7075",
            "weight": "80000000000000000000000000000000000000"
        }]);
        let mut legacy = quorum_json();
        legacy["peer_details"] = answer["peers"].clone();

        let transport = MockTransport::new().respond(answer).respond(legacy);
        let node = NanoRpc::new(transport);

        for _ in 0..2 {
            let quorum = node.confirmation_quorum(Some(true)).await.unwrap();
            assert_eq!(quorum.peers.len(), 1);
            assert_eq!(quorum.peers[0].account, REP.parse::<Account>().unwrap());
            assert_eq!(quorum.peers[0].ip, "[::ffff:192.168.1.4]:7075");
            assert_eq!(quorum.peers[0].weight.to_xno_string(), "80000000");
        }
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "confirmation_quorum", "peer_details": true })
        );
    }

    #[tokio::test]
    async fn test_confirmation_info_with_representatives() {
        let transport = MockTransport::new().respond(json!({
            "announcements": "2",
            "voters": "29",
            "last_winner": HASH,
            "total_tally": "51145880360832646375807054221292133897",
            "final_tally": "0",
            "blocks": {
                HASH: {
                    "tally": "51145880360832646375807054221292133897",
                    "final_tally": "0",
                    "representatives": {
                        GENESIS: "12617828599372664613607727105312068760",
                        REP: "5671088824521505519138838226400055776"
                    }
                }
            }
        }));
        let node = NanoRpc::new(transport);

        let root = format!("{PREVIOUS}{HASH}");
        let options = ConfirmationInfoOptions::builder()
            .contents(false)
            .json_block(true)
            .representatives(true)
            .build();
        let info = node.confirmation_info(&root, options).await.unwrap();

        assert_eq!(info.announcements, 2);
        assert_eq!(info.voters, Some(29));
        assert_eq!(info.last_winner, HASH.parse::<BlockHash>().unwrap());
        assert_eq!(info.final_tally, Some(RawAmount::ZERO));

        let block = &info.blocks[HASH];
        assert!(block.contents.is_none());
        assert_eq!(block.representatives.len(), 2);
        assert_eq!(
            block.representatives[GENESIS],
            RawAmount(12617828599372664613607727105312068760)
        );
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "confirmation_info",
                "root": root,
                "contents": false,
                "json_block": true,
                "representatives": true
            })
        );
    }

    #[tokio::test]
    async fn test_bootstrap_status() {
        let transport = MockTransport::new().respond(json!({
            "bootstrap_threads": "2",
            "running_attempts_count": "1",
            "total_attempts_count": "6",
            "connections": {
                "clients": "31",
                "connections": "45",
                "idle": "0",
                "target_connections": "64",
                "pulls": "1158514"
            },
            "attempts": [{
                "id": "EE778222D6407B7A5D5EB4C2B4D0C1A2",
                "mode": "legacy",
                "started": "true",
                "pulling": "1",
                "total_blocks": "4897",
                "requeued_pulls": "0"
            }]
        }));
        let node = NanoRpc::new(transport);

        let status = node.bootstrap_status().await.unwrap();

        assert_eq!(status.bootstrap_threads, Some(2));
        assert_eq!(status.running_attempts_count, Some(1));
        assert_eq!(status.total_attempts_count, Some(6));
        assert_eq!(status.connections.as_ref().unwrap()["clients"], "31");
        assert_eq!(status.attempts.len(), 1);
        assert_eq!(status.attempts[0]["mode"], "legacy");
        assert!(status.extra.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_status_when_idle() {
        let transport = MockTransport::new().respond(json!({
            "bootstrap_threads": "2",
            "running_attempts_count": "0",
            "total_attempts_count": "0",
            "attempts": ""
        }));
        let node = NanoRpc::new(transport);

        let status = node.bootstrap_status().await.unwrap();
        assert!(status.attempts.is_empty());
        assert!(status.connections.is_none());
    }

    #[tokio::test]
    async fn test_node_id() {
        let transport = MockTransport::new().respond(json!({
            "public": "2E4C8B3B6F9CF1E2D1B1BB6E40F2E71F7A8A8E0F4E8A4C5D9C2D5F1B3A6E7D8C",
            "as_account": "nano_1dkeqgxpz9zpukt7xnsx83yw5wxpheeqz1jnhk8ccayw55hcktzc1lttkr6e",
            "node_id": "node_1y7j5rdqhg99uyab1145gu3yur1ax35a3b6qr417yt8cd6n86uiw3d4whty3"
        }));
        let node = NanoRpc::new(transport);

        let id = node.node_id().await.unwrap();
        assert_eq!(
            id.node_id,
            "node_1y7j5rdqhg99uyab1145gu3yur1ax35a3b6qr417yt8cd6n86uiw3d4whty3"
        );
        assert_eq!(id.private, None);
        assert!(id.public.is_some());
        assert_eq!(node.transport().last_request(), json!({ "action": "node_id" }));
    }

    #[tokio::test]
    async fn test_peers_as_address_list() {
        let transport = MockTransport::new()
            .respond(json!({ "peers": ["[::ffff:172.17.0.1]:7075", "[::ffff:10.0.0.2]:7075"] }))
            .respond(json!({ "peers": "" }));
        let node = NanoRpc::new(transport);

        let response = node.peers(None).await.unwrap();
        assert_eq!(
            response.peers,
            Peers::Addresses(vec![
                "[::ffff:172.17.0.1]:7075".to_string(),
                "[::ffff:10.0.0.2]:7075".to_string(),
            ])
        );
        assert_eq!(response.peers.len(), 2);

        let none = node.peers(None).await.unwrap();
        assert!(none.peers.is_empty());
        assert_eq!(node.transport().last_request(), json!({ "action": "peers" }));
    }

    #[tokio::test]
    async fn test_unchecked_get() {
        let transport = MockTransport::new().respond(json!({
            "modified_timestamp": "1565856525",
            "contents": {
                "type": "state",
                "account": GENESIS,
                "previous": PREVIOUS,
                "representative": REP,
                "balance": "10000",
                "link": "0000000000000000000000000000000000000000000000000000000000000000"
            }
        }));
        let node = NanoRpc::new(transport);

        let hash: BlockHash = HASH.parse().unwrap();
        let options = UncheckedGetOptions::builder().json_block(true).build();
        let unchecked = node.unchecked_get(&hash, options).await.unwrap();

        assert_eq!(unchecked.modified_timestamp, 1565856525);
        assert_eq!(unchecked.contents["previous"], PREVIOUS);
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "unchecked_get", "hash": HASH, "json_block": true })
        );
    }

    #[tokio::test]
    async fn test_unchecked_keys() {
        let transport = MockTransport::new().respond(json!({
            "unchecked": [{
                "key": PREVIOUS,
                "hash": HASH,
                "modified_timestamp": "1565856744",
                "contents": {
                    "type": "state",
                    "account": GENESIS,
                    "previous": PREVIOUS,
                    "balance": "10000"
                }
            }]
        }));
        let node = NanoRpc::new(transport);

        let options = UncheckedKeysOptions::builder().json_block(true).build();
        let response = node.unchecked_keys(PREVIOUS, 1, options).await.unwrap();

        assert_eq!(response.unchecked.len(), 1);
        let entry = &response.unchecked[0];
        assert_eq!(entry.key, PREVIOUS);
        assert_eq!(entry.hash, HASH.parse::<BlockHash>().unwrap());
        assert_eq!(entry.modified_timestamp, 1565856744);
        assert_eq!(entry.contents["type"], "state");
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "unchecked_keys",
                "key": PREVIOUS,
                "count": "1",
                "json_block": true
            })
        );
    }
}
