use crate::{
    NanoRpc,
    concepts::RpcTransport,
    errors::RpcResult,
    types::{RpcRequest, responses::KeyPairResponse},
};

impl<T: RpcTransport> NanoRpc<T> {
    /// Generates a random key pair on the node.
    pub async fn key_create(&self) -> RpcResult<KeyPairResponse, T::Error> {
        self.call(RpcRequest::new("key_create")).await
    }

    /// Derives the public key and account of a private key.
    pub async fn key_expand(&self, key: &str) -> RpcResult<KeyPairResponse, T::Error> {
        let request = RpcRequest::new("key_expand").param("key", key)?;
        self.call(request).await
    }

    /// Derives the key pair at `index` of `seed`.
    pub async fn deterministic_key(
        &self,
        seed: &str,
        index: u32,
    ) -> RpcResult<KeyPairResponse, T::Error> {
        let request = RpcRequest::new("deterministic_key")
            .param("seed", seed)?
            .param("index", index.to_string())?;
        self.call(request).await
    }
}
