use crate::{
    NanoRpc,
    concepts::RpcTransport,
    errors::RpcResult,
    rpc::nonzero,
    types::{
        Account, BlockHash, RawAmount, RpcRequest,
        options::{
            AccountHistoryOptions, AccountInfoOptions, AccountsReceivableOptions, BalanceOptions,
            LedgerOptions, ReceivableExistsOptions, ReceivableOptions,
        },
        responses::{
            AccountBalanceResponse, AccountBlockCountResponse, AccountGetResponse,
            AccountHistoryResponse, AccountInfoResponse, AccountKeyResponse,
            AccountRepresentativeResponse, AccountWeightResponse, AccountsBalancesResponse,
            AccountsFrontiersResponse, AccountsReceivableResponse,
            AccountsRepresentativesResponse, CountResponse, DelegatorsResponse, ExistsResponse,
            FrontiersResponse, LedgerResponse, ReceivableResponse, RepresentativesOnlineResponse,
            RepresentativesResponse, UnopenedResponse, ValidateAccountNumberResponse,
        },
    },
};

impl<T: RpcTransport> NanoRpc<T> {
    pub async fn account_balance(
        &self,
        account: &Account,
        options: BalanceOptions,
    ) -> RpcResult<AccountBalanceResponse, T::Error> {
        let request = RpcRequest::new("account_balance")
            .param("account", account)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn account_block_count(
        &self,
        account: &Account,
    ) -> RpcResult<AccountBlockCountResponse, T::Error> {
        let request = RpcRequest::new("account_block_count").param("account", account)?;
        self.call(request).await
    }

    /// Account address of a hex encoded public key.
    pub async fn account_get(&self, key: &str) -> RpcResult<AccountGetResponse, T::Error> {
        let request = RpcRequest::new("account_get").param("key", key)?;
        self.call(request).await
    }

    /// Up to `count` blocks of the account's chain, newest first unless
    /// `reverse` is set. Pass `previous` of the answer as `head` to page.
    pub async fn account_history(
        &self,
        account: &Account,
        count: u64,
        options: AccountHistoryOptions,
    ) -> RpcResult<AccountHistoryResponse, T::Error> {
        let request = RpcRequest::new("account_history")
            .param("account", account)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn account_info(
        &self,
        account: &Account,
        options: AccountInfoOptions,
    ) -> RpcResult<AccountInfoResponse, T::Error> {
        let request = RpcRequest::new("account_info")
            .param("account", account)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn account_key(&self, account: &Account) -> RpcResult<AccountKeyResponse, T::Error> {
        let request = RpcRequest::new("account_key").param("account", account)?;
        self.call(request).await
    }

    pub async fn account_representative(
        &self,
        account: &Account,
    ) -> RpcResult<AccountRepresentativeResponse, T::Error> {
        let request = RpcRequest::new("account_representative").param("account", account)?;
        self.call(request).await
    }

    pub async fn account_weight(
        &self,
        account: &Account,
    ) -> RpcResult<AccountWeightResponse, T::Error> {
        let request = RpcRequest::new("account_weight").param("account", account)?;
        self.call(request).await
    }

    pub async fn accounts_balances(
        &self,
        accounts: &[Account],
        options: BalanceOptions,
    ) -> RpcResult<AccountsBalancesResponse, T::Error> {
        let request = RpcRequest::new("accounts_balances")
            .param("accounts", accounts)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn accounts_frontiers(
        &self,
        accounts: &[Account],
    ) -> RpcResult<AccountsFrontiersResponse, T::Error> {
        let request = RpcRequest::new("accounts_frontiers").param("accounts", accounts)?;
        self.call(request).await
    }

    pub async fn accounts_receivable(
        &self,
        accounts: &[Account],
        count: u64,
        options: AccountsReceivableOptions,
    ) -> RpcResult<AccountsReceivableResponse, T::Error> {
        self.accounts_receivable_action("accounts_receivable", accounts, count, options)
            .await
    }

    /// Deprecated name of [`accounts_receivable`](Self::accounts_receivable),
    /// kept for nodes before v23.
    pub async fn accounts_pending(
        &self,
        accounts: &[Account],
        count: u64,
        options: AccountsReceivableOptions,
    ) -> RpcResult<AccountsReceivableResponse, T::Error> {
        self.accounts_receivable_action("accounts_pending", accounts, count, options)
            .await
    }

    async fn accounts_receivable_action(
        &self,
        action: &str,
        accounts: &[Account],
        count: u64,
        options: AccountsReceivableOptions,
    ) -> RpcResult<AccountsReceivableResponse, T::Error> {
        let request = RpcRequest::new(action)
            .param("accounts", accounts)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn accounts_representatives(
        &self,
        accounts: &[Account],
    ) -> RpcResult<AccountsRepresentativesResponse, T::Error> {
        let request = RpcRequest::new("accounts_representatives").param("accounts", accounts)?;
        self.call(request).await
    }

    /// Accounts delegating their weight to `account`, with their balances.
    pub async fn delegators(
        &self,
        account: &Account,
        threshold: Option<RawAmount>,
        count: Option<u64>,
        start: Option<&Account>,
    ) -> RpcResult<DelegatorsResponse, T::Error> {
        let request = RpcRequest::new("delegators")
            .param("account", account)?
            .param("threshold", threshold)?
            .param("count", nonzero(count))?
            .param("start", start)?;
        self.call(request).await
    }

    pub async fn delegators_count(&self, account: &Account) -> RpcResult<CountResponse, T::Error> {
        let request = RpcRequest::new("delegators_count").param("account", account)?;
        self.call(request).await
    }

    /// Frontier blocks of up to `count` accounts, starting at `account`.
    pub async fn frontiers(
        &self,
        account: &Account,
        count: u64,
    ) -> RpcResult<FrontiersResponse, T::Error> {
        let request = RpcRequest::new("frontiers")
            .param("account", account)?
            .param("count", count.to_string())?;
        self.call(request).await
    }

    pub async fn frontier_count(&self) -> RpcResult<CountResponse, T::Error> {
        self.call(RpcRequest::new("frontier_count")).await
    }

    pub async fn ledger(
        &self,
        account: &Account,
        count: u64,
        options: LedgerOptions,
    ) -> RpcResult<LedgerResponse, T::Error> {
        let request = RpcRequest::new("ledger")
            .param("account", account)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn receivable(
        &self,
        account: &Account,
        count: u64,
        options: ReceivableOptions,
    ) -> RpcResult<ReceivableResponse, T::Error> {
        self.receivable_action("receivable", account, count, options)
            .await
    }

    /// Deprecated name of [`receivable`](Self::receivable).
    pub async fn pending(
        &self,
        account: &Account,
        count: u64,
        options: ReceivableOptions,
    ) -> RpcResult<ReceivableResponse, T::Error> {
        self.receivable_action("pending", account, count, options)
            .await
    }

    async fn receivable_action(
        &self,
        action: &str,
        account: &Account,
        count: u64,
        options: ReceivableOptions,
    ) -> RpcResult<ReceivableResponse, T::Error> {
        let request = RpcRequest::new(action)
            .param("account", account)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    /// Whether the block `hash` is still waiting to be received.
    pub async fn receivable_exists(
        &self,
        hash: &BlockHash,
        options: ReceivableExistsOptions,
    ) -> RpcResult<ExistsResponse, T::Error> {
        let request = RpcRequest::new("receivable_exists")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    /// Deprecated name of [`receivable_exists`](Self::receivable_exists).
    pub async fn pending_exists(
        &self,
        hash: &BlockHash,
        options: ReceivableExistsOptions,
    ) -> RpcResult<ExistsResponse, T::Error> {
        let request = RpcRequest::new("pending_exists")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn representatives(
        &self,
        count: Option<u64>,
        sorting: Option<bool>,
    ) -> RpcResult<RepresentativesResponse, T::Error> {
        let request = RpcRequest::new("representatives")
            .param("count", nonzero(count))?
            .param("sorting", sorting)?;
        self.call(request).await
    }

    /// Representatives that voted recently. With `weight` the answer maps
    /// each one to its voting weight.
    pub async fn representatives_online(
        &self,
        weight: Option<bool>,
        accounts: Option<&[Account]>,
    ) -> RpcResult<RepresentativesOnlineResponse, T::Error> {
        let request = RpcRequest::new("representatives_online")
            .param("weight", weight)?
            .param("accounts", accounts)?;
        self.call(request).await
    }

    /// Accounts with receivable funds but no open block.
    pub async fn unopened(
        &self,
        account: Option<&Account>,
        count: Option<u64>,
        threshold: Option<RawAmount>,
    ) -> RpcResult<UnopenedResponse, T::Error> {
        let request = RpcRequest::new("unopened")
            .param("account", account)?
            .param("count", nonzero(count))?
            .param("threshold", threshold)?;
        self.call(request).await
    }

    /// Asks the node to verify the address checksum.
    pub async fn validate_account_number(
        &self,
        account: &str,
    ) -> RpcResult<ValidateAccountNumberResponse, T::Error> {
        let request = RpcRequest::new("validate_account_number").param("account", account)?;
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
            Account, RawAmount,
            options::{
                AccountHistoryOptions, BalanceOptions, LedgerOptions, ReceivableExistsOptions,
                ReceivableOptions,
            },
            responses::{OnlineRepresentatives, ReceivableBlocks},
        },
    };

    const GENESIS: &str = "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";
    const BURN: &str = "nano_1111111111111111111111111111111111111111111111111111hifc8npp";

    fn genesis() -> Account {
        GENESIS.parse().unwrap()
    }

    #[tokio::test]
    async fn test_account_balance() {
        let transport = MockTransport::new().respond(json!({
            "balance": "10000",
            "pending": "10000",
            "receivable": "10000"
        }));
        let node = NanoRpc::new(transport);

        let options = BalanceOptions::builder().include_only_confirmed(true).build();
        let balance = node.account_balance(&genesis(), options).await.unwrap();

        assert_eq!(balance.balance, RawAmount(10000));
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "account_balance",
                "account": GENESIS,
                "include_only_confirmed": true
            })
        );
    }

    #[tokio::test]
    async fn test_account_history_sends_count_as_string() {
        let transport = MockTransport::new().respond(json!({
            "account": GENESIS,
            "history": ""
        }));
        let node = NanoRpc::new(transport);

        let options = AccountHistoryOptions::builder().raw(true).offset(2).build();
        let history = node.account_history(&genesis(), 10, options).await.unwrap();

        assert!(history.history.is_empty());
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "account_history",
                "account": GENESIS,
                "count": "10",
                "raw": true,
                "offset": "2"
            })
        );
    }

    #[tokio::test]
    async fn test_pending_uses_legacy_action() {
        let transport = MockTransport::new().respond(json!({
            "blocks": {
                "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F": "6000000000000000000000000000000"
            }
        }));
        let node = NanoRpc::new(transport);

        let options = ReceivableOptions::builder()
            .threshold(RawAmount(1_000_000))
            .build();
        let response = node.pending(&genesis(), 1, options).await.unwrap();

        assert!(matches!(response.blocks, ReceivableBlocks::Amounts(_)));
        let request = node.transport().last_request();
        assert_eq!(request["action"], "pending");
        assert_eq!(request["threshold"], "1000000");
    }

    #[tokio::test]
    async fn test_zero_counts_are_not_sent() {
        let transport = MockTransport::new()
            .respond(json!({ "delegators": "" }))
            .respond(json!({ "representatives": "" }))
            .respond(json!({ "accounts": "" }));
        let node = NanoRpc::new(transport);

        node.delegators(&genesis(), None, Some(0), None).await.unwrap();
        node.representatives(Some(0), None).await.unwrap();
        node.unopened(None, Some(0), Some(RawAmount(1))).await.unwrap();

        assert_eq!(
            node.transport().requests(),
            vec![
                json!({ "action": "delegators", "account": GENESIS }),
                json!({ "action": "representatives" }),
                json!({ "action": "unopened", "threshold": "1" }),
            ]
        );
    }

    #[tokio::test]
    async fn test_delegators_with_paging() {
        let transport = MockTransport::new().respond(json!({
            "delegators": { BURN: "500000000000000000000000000000000000" }
        }));
        let node = NanoRpc::new(transport);

        let start: Account = BURN.parse().unwrap();
        let response = node
            .delegators(&genesis(), Some(RawAmount(1)), Some(50), Some(&start))
            .await
            .unwrap();

        assert_eq!(response.delegators[BURN].to_xno_string(), "500000");
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "delegators",
                "account": GENESIS,
                "threshold": "1",
                "count": "50",
                "start": BURN
            })
        );
    }

    #[tokio::test]
    async fn test_representatives_online_weighted() {
        let transport = MockTransport::new().respond(json!({
            "representatives": { GENESIS: "150462654614686936429917024683496890" }
        }));
        let node = NanoRpc::new(transport);

        let accounts = [genesis()];
        let response = node
            .representatives_online(Some(true), Some(&accounts))
            .await
            .unwrap();

        assert_eq!(response.representatives.accounts(), vec![genesis()]);
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "representatives_online",
                "weight": true,
                "accounts": [GENESIS]
            })
        );
    }

    #[tokio::test]
    async fn test_validate_account_number() {
        let transport = MockTransport::new().respond(json!({ "valid": "1" }));
        let node = NanoRpc::new(transport);

        assert!(node.validate_account_number(GENESIS).await.unwrap().valid);
    }

    #[tokio::test]
    async fn test_ledger() {
        let transport = MockTransport::new().respond(json!({
            "accounts": {
                BURN: {
                    "frontier": "E71AF3E9DD86BBD8B4620EFA63E065B34D358CFC091ACB4E103B965F95783321",
                    "open_block": "643B77F1ECEFBDBE1CC909872964C1DBBE23A6149BD3CEF2B50B76044659B60F",
                    "representative_block": "643B77F1ECEFBDBE1CC909872964C1DBBE23A6149BD3CEF2B50B76044659B60F",
                    "balance": "0",
                    "modified_timestamp": "1511476234",
                    "block_count": "2",
                    "representative": GENESIS,
                    "weight": "0",
                    "receivable": "0"
                }
            }
        }));
        let node = NanoRpc::new(transport);

        let options = LedgerOptions::builder()
            .representative(true)
            .weight(true)
            .receivable(true)
            .threshold(RawAmount(0))
            .build();
        let ledger = node.ledger(&genesis(), 1, options).await.unwrap();

        let info = &ledger.accounts[BURN];
        assert_eq!(info.block_count, 2);
        assert_eq!(info.modified_timestamp, 1511476234);
        assert_eq!(info.balance, RawAmount::ZERO);
        assert_eq!(info.representative, Some(genesis()));
        assert_eq!(info.pending, None);
        assert_eq!(
            node.transport().last_request(),
            json!({
                "action": "ledger",
                "account": GENESIS,
                "count": "1",
                "representative": true,
                "weight": true,
                "receivable": true,
                "threshold": "0"
            })
        );
    }

    #[tokio::test]
    async fn test_ledger_without_accounts() {
        let transport = MockTransport::new().respond(json!({ "accounts": "" }));
        let node = NanoRpc::new(transport);

        let ledger = node
            .ledger(&genesis(), 10, LedgerOptions::default())
            .await
            .unwrap();
        assert!(ledger.accounts.is_empty());
    }

    #[tokio::test]
    async fn test_receivable_exists() {
        let transport = MockTransport::new()
            .respond(json!({ "exists": "1" }))
            .respond(json!({ "exists": "0" }));
        let node = NanoRpc::new(transport);

        let hash = "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F"
            .parse()
            .unwrap();
        let options = ReceivableExistsOptions::builder()
            .include_active(true)
            .include_only_confirmed(false)
            .build();

        assert!(node.receivable_exists(&hash, options).await.unwrap().exists);
        assert!(
            !node
                .pending_exists(&hash, ReceivableExistsOptions::default())
                .await
                .unwrap()
                .exists
        );
        assert_eq!(
            node.transport().requests(),
            vec![
                json!({
                    "action": "receivable_exists",
                    "hash": "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F",
                    "include_active": true,
                    "include_only_confirmed": false
                }),
                json!({
                    "action": "pending_exists",
                    "hash": "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F"
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_representatives_online() {
        let transport = MockTransport::new().respond(json!({ "representatives": "" }));
        let node = NanoRpc::new(transport);

        let response = node.representatives_online(None, None).await.unwrap();
        assert_eq!(response.representatives, OnlineRepresentatives::Accounts(Vec::new()));
        assert!(response.representatives.accounts().is_empty());
        assert_eq!(
            node.transport().last_request(),
            json!({ "action": "representatives_online" })
        );
    }
}
