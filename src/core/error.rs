use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExplorerError {
    #[error("account index {index} out of range for {len} account keys")]
    AccountIndexOutOfRange { index: usize, len: usize },
    #[error("invalid token amount {value:?}")]
    InvalidAmount { value: String },
    #[error("Address \"{address}\" is not valid")]
    InvalidAddress { address: String },
    #[error("invalid account data: {0}")]
    InvalidAccountData(String),
}

impl ExplorerError {
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
        }
    }

    pub fn invalid_account_data(message: impl Into<String>) -> Self {
        Self::InvalidAccountData(message.into())
    }
}
