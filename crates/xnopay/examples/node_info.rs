//! Prints basic information about a node and the balance of an account.
//!
//! ```sh
//! NANO_NODE_URL=https://rpc.example.com NANO_API_KEY=... cargo run --example node_info
//! ```
//!
//! Authentication is picked from the environment: `NANO_BEARER_TOKEN`,
//! `NANO_API_KEY`, or `NANO_USERNAME` with `NANO_PASSWORD`. Without any of
//! them the node is called unauthenticated.

use std::env;

use tracing_subscriber::EnvFilter;
use xnopay::{
    Authentication, NanoRpc,
    config::NodeConfig,
    types::{Account, options::BalanceOptions},
};

const DEFAULT_NODE_URL: &str = "http://localhost:7076";
const GENESIS: &str = "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";

fn auth_from_env() -> Authentication {
    if let Ok(token) = env::var("NANO_BEARER_TOKEN") {
        return Authentication::bearer(token);
    }
    if let Ok(key) = env::var("NANO_API_KEY") {
        return Authentication::api_key(key);
    }
    match (env::var("NANO_USERNAME"), env::var("NANO_PASSWORD")) {
        (Ok(username), Ok(password)) => Authentication::basic(username, password),
        _ => Authentication::None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xnopay=debug")),
        )
        .init();

    let url = env::var("NANO_NODE_URL").unwrap_or_else(|_| DEFAULT_NODE_URL.to_string());
    let account: Account = env::args()
        .nth(1)
        .unwrap_or_else(|| GENESIS.to_string())
        .parse()?;

    let config = NodeConfig::builder()
        .url(url.parse()?)
        .auth(auth_from_env())
        .retries(2)
        .timeout_secs(10)
        .user_agent("xnopay-node-info")
        .build();
    tracing::info!("Connecting to {} with {:?}", config.url, config.auth);

    let node = NanoRpc::from_config(&config)?;

    let version = node.version().await?;
    tracing::info!(
        "Node {} (protocol {}, network {})",
        version.node_vendor,
        version.protocol_version,
        version.network.as_deref().unwrap_or("unknown")
    );

    let count = node.block_count(true).await?;
    tracing::info!(
        "Blocks: {} total, {} cemented, {} unchecked",
        count.count,
        count.cemented.unwrap_or_default(),
        count.unchecked
    );

    let balance = node
        .account_balance(&account, BalanceOptions::default())
        .await?;
    tracing::info!(
        "{} holds {} XNO ({} receivable)",
        account,
        balance.balance.to_xno_string(),
        balance
            .receivable
            .or(balance.pending)
            .unwrap_or_default()
            .to_xno_string()
    );

    Ok(())
}
