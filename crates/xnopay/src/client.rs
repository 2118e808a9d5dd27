use serde::de::DeserializeOwned;

use crate::{
    concepts::RpcTransport,
    config::RetryPolicy,
    errors::{AttemptError, ClientError, RpcResult},
    types::{AnyJson, RpcRequest, node_error},
};

#[cfg(feature = "http-client")]
use crate::{
    auth::Authentication,
    config::NodeConfig,
    transports::http::{HttpTransport, HttpTransportError},
};

/// A Nano node RPC client.
///
/// Every node action is a method returning a typed response. Failed calls
/// are retried according to the [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct NanoRpc<T: RpcTransport> {
    transport: T,
    retry: RetryPolicy,
}

impl<T: RpcTransport> NanoRpc<T> {
    pub fn new(transport: T) -> Self {
        NanoRpc {
            transport,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Sends `request` and decodes the answer into `R`.
    ///
    /// This is what every typed method uses; call it directly for actions
    /// without a dedicated method.
    pub async fn call<R: DeserializeOwned>(&self, request: RpcRequest) -> RpcResult<R, T::Error> {
        let response = self.call_raw(&request).await?;
        serde_json::from_value(response).map_err(|source| ClientError::Decode {
            action: request.action().to_string(),
            source,
        })
    }

    /// Sends `request` with retries and returns the node's JSON answer.
    pub async fn call_raw(&self, request: &RpcRequest) -> RpcResult<AnyJson, T::Error> {
        let attempts = self.retry.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Sending RPC '{}' (attempt {}/{})",
                request.action(),
                attempt,
                attempts
            );

            let err = match self.send_once(request).await {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            #[cfg(feature = "tracing")]
            tracing::warn!(
                "RPC call '{}' attempt {} failed: {}",
                request.action(),
                attempt,
                err
            );

            if !err.is_retryable(self.retry.retry_node_errors) {
                return Err(err.into_client_error(request.action()));
            }

            if attempt >= attempts {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "RPC call '{}' failed after {} attempts",
                    request.action(),
                    attempt
                );

                return Err(ClientError::RetriesExhausted {
                    action: request.action().to_string(),
                    attempts: attempt,
                    last: err,
                });
            }

            tokio::time::sleep(self.retry.delay_after(attempt)).await;
        }
    }

    async fn send_once(&self, request: &RpcRequest) -> Result<AnyJson, AttemptError<T::Error>> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(AttemptError::Transport)?;

        match node_error(&response) {
            Some(message) => Err(AttemptError::Node(message)),
            None => Ok(response),
        }
    }
}

#[cfg(feature = "http-client")]
impl NanoRpc<HttpTransport> {
    /// Builds an HTTP client from `config`.
    pub fn from_config(config: &NodeConfig) -> Result<Self, HttpTransportError> {
        Ok(NanoRpc::new(HttpTransport::from_config(config)?).with_retry_policy(config.retry_policy()))
    }
}

/// Creates an HTTP client for the node at `node_url` with the default
/// retry policy.
///
/// ```no_run
/// use xnopay::{Authentication, rpc};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let node = rpc("http://localhost:7076", Authentication::None)?;
/// let version = node.version().await?;
/// println!("node vendor: {}", version.node_vendor);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "http-client")]
pub fn rpc(
    node_url: &str,
    auth: Authentication,
) -> Result<NanoRpc<HttpTransport>, HttpTransportError> {
    Ok(NanoRpc::new(HttpTransport::from_url(node_url)?.auth(&auth)?))
}
