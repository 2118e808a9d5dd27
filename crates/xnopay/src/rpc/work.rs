use crate::{
    NanoRpc,
    concepts::RpcTransport,
    errors::RpcResult,
    types::{
        BlockHash, RpcRequest,
        options::{WorkGenerateOptions, WorkValidateOptions},
        responses::{
            SuccessResponse, WorkGenerateResponse, WorkPeersResponse, WorkValidateResponse,
        },
    },
};

impl<T: RpcTransport> NanoRpc<T> {
    /// Stops generating work for `hash`.
    pub async fn work_cancel(&self, hash: &BlockHash) -> RpcResult<SuccessResponse, T::Error> {
        let request = RpcRequest::new("work_cancel").param("hash", hash)?;
        self.call(request).await
    }

    pub async fn work_generate(
        &self,
        hash: &BlockHash,
        options: WorkGenerateOptions,
    ) -> RpcResult<WorkGenerateResponse, T::Error> {
        let request = RpcRequest::new("work_generate")
            .param("hash", hash)?
            .extend(&options)?;
        self.call(request).await
    }

    pub async fn work_peer_add(
        &self,
        address: &str,
        port: u16,
    ) -> RpcResult<SuccessResponse, T::Error> {
        let request = RpcRequest::new("work_peer_add")
            .param("address", address)?
            .param("port", port.to_string())?;
        self.call(request).await
    }

    pub async fn work_peers_clear(&self) -> RpcResult<SuccessResponse, T::Error> {
        self.call(RpcRequest::new("work_peers_clear")).await
    }

    pub async fn work_peers(&self) -> RpcResult<WorkPeersResponse, T::Error> {
        self.call(RpcRequest::new("work_peers")).await
    }

    pub async fn work_validate(
        &self,
        hash: &BlockHash,
        work: &str,
        options: WorkValidateOptions,
    ) -> RpcResult<WorkValidateResponse, T::Error> {
        let request = RpcRequest::new("work_validate")
            .param("hash", hash)?
            .param("work", work)?
            .extend(&options)?;
        self.call(request).await
    }
}
