use std::time::Duration;

use bon::Builder;
use serde::Deserialize;
use url::Url;

use crate::auth::Authentication;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// How failed calls are retried.
///
/// A call is attempted `max_retries + 1` times. After failed attempt `n`
/// the client waits `base_delay * n` before the next one.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    #[builder(default = DEFAULT_RETRIES)]
    pub max_retries: u32,
    #[builder(default = Duration::from_millis(DEFAULT_RETRY_DELAY_MS))]
    pub base_delay: Duration,
    /// Also retry when the node answers with `{"error": ...}`.
    #[builder(default = true)]
    pub retry_node_errors: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::builder().build()
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    pub fn none() -> Self {
        RetryPolicy::builder().max_retries(0).build()
    }

    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before the attempt following failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

fn default_retry_node_errors() -> bool {
    true
}

/// Connection settings for a node.
///
/// Build it in code with `NodeConfig::builder()`, or deserialize it from
/// your application's configuration file:
///
/// ```
/// use xnopay::{auth::Authentication, config::NodeConfig};
///
/// let config: NodeConfig = serde_json::from_str(r#"{
///     "url": "http://localhost:7076",
///     "auth": { "type": "bearer", "token": "secret" },
///     "retries": 5
/// }"#).unwrap();
///
/// assert_eq!(config.retries, 5);
/// assert_eq!(config.auth, Authentication::bearer("secret"));
/// assert_eq!(config.retry_policy().attempts(), 6);
/// ```
#[derive(Builder, Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// RPC endpoint of the node, e.g. `http://localhost:7076`.
    pub url: Url,
    #[builder(default)]
    #[serde(default)]
    pub auth: Authentication,
    #[builder(default = DEFAULT_RETRIES)]
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[builder(default = DEFAULT_RETRY_DELAY_MS)]
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// See [`RetryPolicy::retry_node_errors`].
    #[builder(default = true)]
    #[serde(default = "default_retry_node_errors")]
    pub retry_node_errors: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[builder(into)]
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl NodeConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::builder()
            .max_retries(self.retries)
            .base_delay(Duration::from_millis(self.retry_delay_ms))
            .retry_node_errors(self.retry_node_errors)
            .build()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts(), 4);
        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(3), Duration::from_secs(3));
        assert!(policy.retry_node_errors);
    }

    #[test]
    fn test_no_retries() {
        assert_eq!(RetryPolicy::none().attempts(), 1);
    }

    #[test]
    fn test_config_defaults() {
        let config = NodeConfig::builder()
            .url(Url::parse("http://localhost:7076").unwrap())
            .build();

        assert_eq!(config.auth, Authentication::None);
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.timeout(), None);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_config_from_json() {
        let config: NodeConfig = serde_json::from_str(
            r#"{
                "url": "https://rpc.example.com/proxy",
                "auth": { "type": "basic", "username": "u", "password": "p" },
                "retry_delay_ms": 250,
                "timeout_secs": 10
            }"#,
        )
        .unwrap();

        assert_eq!(config.url.as_str(), "https://rpc.example.com/proxy");
        assert_eq!(config.retries, DEFAULT_RETRIES);
        assert!(config.retry_policy().retry_node_errors);
        assert_eq!(config.retry_policy().delay_after(2), Duration::from_millis(500));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_without_node_error_retries() {
        let config: NodeConfig = serde_json::from_str(
            r#"{ "url": "http://localhost:7076", "retry_node_errors": false }"#,
        )
        .unwrap();
        assert!(!config.retry_policy().retry_node_errors);

        let built = NodeConfig::builder()
            .url(Url::parse("http://localhost:7076").unwrap())
            .retry_node_errors(false)
            .build();
        assert_eq!(built.retry_policy(), config.retry_policy());
    }
}
