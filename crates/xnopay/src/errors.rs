pub use xnopay_core::errors::{Error, Result};

/// Errors returned by [`NanoRpc`](crate::NanoRpc), generic over the
/// transport's own error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Transport error: {0}")]
    Transport(#[source] E),

    #[error("RPC error for '{action}': {message}")]
    Node { action: String, message: String },

    #[error("Request encoding error: {0}")]
    Request(#[from] xnopay_core::Error),

    #[error("Failed to decode response of '{action}': {source}")]
    Decode {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("RPC call '{action}' failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        action: String,
        attempts: u32,
        #[source]
        last: AttemptError<E>,
    },
}

impl<E> ClientError<E>
where
    E: std::error::Error + 'static,
{
    /// The node's message, when the node itself rejected the request.
    pub fn node_message(&self) -> Option<&str> {
        match self {
            ClientError::Node { message, .. } => Some(message),
            ClientError::RetriesExhausted {
                last: AttemptError::Node(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// Why a single attempt of a call failed.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Transport error: {0}")]
    Transport(#[source] E),

    #[error("RPC error: {0}")]
    Node(String),
}

impl<E> AttemptError<E>
where
    E: std::error::Error + 'static,
{
    pub(crate) fn is_retryable(&self, retry_node_errors: bool) -> bool {
        match self {
            AttemptError::Transport(_) => true,
            AttemptError::Node(_) => retry_node_errors,
        }
    }

    pub(crate) fn into_client_error(self, action: &str) -> ClientError<E> {
        match self {
            AttemptError::Transport(err) => ClientError::Transport(err),
            AttemptError::Node(message) => ClientError::Node {
                action: action.to_string(),
                message,
            },
        }
    }
}

pub type RpcResult<T, E> = std::result::Result<T, ClientError<E>>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_node_message_through_retries() {
        let err: ClientError<io::Error> = ClientError::RetriesExhausted {
            action: "process".to_string(),
            attempts: 4,
            last: AttemptError::Node("Fork".to_string()),
        };

        assert_eq!(err.node_message(), Some("Fork"));
        assert_eq!(
            err.to_string(),
            "RPC call 'process' failed after 4 attempts: RPC error: Fork"
        );
    }

    #[test]
    fn test_retryable_attempts() {
        let transport = AttemptError::Transport(io::Error::other("reset"));
        let node = AttemptError::<io::Error>::Node("Unable to parse JSON".to_string());

        assert!(transport.is_retryable(false));
        assert!(node.is_retryable(true));
        assert!(!node.is_retryable(false));
    }

    #[test]
    fn test_attempt_into_client_error() {
        let err = AttemptError::<io::Error>::Node("Bad account number".to_string())
            .into_client_error("account_info");

        assert!(matches!(err, ClientError::Node { ref action, .. } if action == "account_info"));
        assert_eq!(err.node_message(), Some("Bad account number"));
    }
}
