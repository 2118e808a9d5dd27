use crate::{
    NanoRpc,
    concepts::RpcTransport,
    errors::RpcResult,
    types::{
        AnyJson, BlockHash, RpcRequest,
        options::{
            BlockCreateParams, BlockInfoOptions, BlocksInfoOptions, BlocksOptions, ChainOptions,
            ProcessOptions, RepublishOptions, SignParams,
        },
        responses::{
            BlockAccountResponse, BlockCountResponse, BlockCreateResponse, BlockHashesResponse,
            BlockInfoResponse, BlocksInfoResponse, BlocksResponse, HashResponse, ProcessResponse,
            SignResponse, StartedResponse,
        },
    },
};

impl<T: RpcTransport> NanoRpc<T> {
    pub async fn block_account(&self, hash: &BlockHash) -> RpcResult<BlockAccountResponse, T::Error> {
        let request = RpcRequest::new("block_account").param("hash", hash)?;
        self.call(request).await
    }

    /// Starts an election for the block if it is not confirmed yet.
    pub async fn block_confirm(&self, hash: &BlockHash) -> RpcResult<StartedResponse, T::Error> {
        let request = RpcRequest::new("block_confirm").param("hash", hash)?;
        self.call(request).await
    }

    pub async fn block_count(
        &self,
        include_cemented: bool,
    ) -> RpcResult<BlockCountResponse, T::Error> {
        let request = RpcRequest::new("block_count").param("include_cemented", include_cemented)?;
        self.call(request).await
    }

    pub async fn block_create(
        &self,
        params: BlockCreateParams,
    ) -> RpcResult<BlockCreateResponse, T::Error> {
        let request = RpcRequest::new("block_create").extend(&params)?;
        self.call(request).await
    }

    /// Hash of `block`, given as a JSON object (`json_block`) or a JSON
    /// string.
    pub async fn block_hash(
        &self,
        block: &AnyJson,
        json_block: Option<bool>,
    ) -> RpcResult<HashResponse, T::Error> {
        let request = RpcRequest::new("block_hash")
            .param("block", block)?
            .param("json_block", json_block)?;
        self.call(request).await
    }

    pub async fn block_info(
        &self,
        hash: &BlockHash,
        options: BlockInfoOptions,
    ) -> RpcResult<BlockInfoResponse, T::Error> {
        let request = RpcRequest::new("block_info")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn blocks(
        &self,
        hashes: &[BlockHash],
        options: BlocksOptions,
    ) -> RpcResult<BlocksResponse, T::Error> {
        let request = RpcRequest::new("blocks")
            .param("hashes", hashes)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn blocks_info(
        &self,
        hashes: &[BlockHash],
        options: BlocksInfoOptions,
    ) -> RpcResult<BlocksInfoResponse, T::Error> {
        let request = RpcRequest::new("blocks_info")
            .param("hashes", hashes)?
            .extend(&options)?;
        self.call(request).await
    }

    /// Up to `count` hashes walking back from `block` through `previous`.
    pub async fn chain(
        &self,
        block: &BlockHash,
        count: u64,
        options: ChainOptions,
    ) -> RpcResult<BlockHashesResponse, T::Error> {
        self.chain_action("chain", block, count, options).await
    }

    /// Up to `count` hashes walking forward from `block`.
    pub async fn successors(
        &self,
        block: &BlockHash,
        count: u64,
        options: ChainOptions,
    ) -> RpcResult<BlockHashesResponse, T::Error> {
        self.chain_action("successors", block, count, options)
            .await
    }

    async fn chain_action(
        &self,
        action: &str,
        block: &BlockHash,
        count: u64,
        options: ChainOptions,
    ) -> RpcResult<BlockHashesResponse, T::Error> {
        let request = RpcRequest::new(action)
            .param("block", block)?
            .param("count", count.to_string())?
            .extend(&options)?;
        self.call(request).await
    }

    /// Publishes a signed block to the network.
    ///
    /// With `is_async` the node only queues the block and the answer
    /// carries `started` instead of `hash`.
    pub async fn process(
        &self,
        block: &AnyJson,
        options: ProcessOptions,
    ) -> RpcResult<ProcessResponse, T::Error> {
        let request = RpcRequest::new("process")
            .param("block", block)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn republish(
        &self,
        hash: &BlockHash,
        options: RepublishOptions,
    ) -> RpcResult<BlockHashesResponse, T::Error> {
        let request = RpcRequest::new("republish")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn sign(&self, params: SignParams) -> RpcResult<SignResponse, T::Error> {
        let request = RpcRequest::new("sign").extend(&params)?;
        self.call(request).await
    }
}
