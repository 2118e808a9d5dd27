#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid account '{account}': {reason}")]
    InvalidAccount { account: String, reason: &'static str },

    #[error("Invalid block hash '{0}': {1}")]
    InvalidHash(String, hex::FromHexError),

    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: &'static str },

    #[error("'{0}' is reserved and cannot be used as a request parameter")]
    ReservedParameter(String),

    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn account(account: &str, reason: &'static str) -> Self {
        Error::InvalidAccount {
            account: account.to_string(),
            reason,
        }
    }

    pub(crate) fn amount(amount: &str, reason: &'static str) -> Self {
        Error::InvalidAmount {
            amount: amount.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
