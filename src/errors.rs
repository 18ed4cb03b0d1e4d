use ethers::providers::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Invalid address for {field}: {value}")]
    InvalidAddressError { field: &'static str, value: String },

    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    // Never carries the key material itself.
    #[error("Invalid wallet credential: {0}")]
    InvalidCredentialError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFundsError { balance: String, requested: String },

    #[error("Sender {from} does not match wallet address {wallet}")]
    SenderMismatchError { from: String, wallet: String },

    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider error: {0}")]
    StringifiedProviderError(String),

    #[error("Contract error: {0}")]
    ContractError(String),

    #[error("Transfer returned an empty transaction hash")]
    EmptyTransactionHashError,
}

impl CustomError {
    /// Whether the error was raised by local input validation, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CustomError::InvalidAddressError { .. }
                | CustomError::InvalidAmountError(_)
                | CustomError::InvalidCredentialError(_)
                | CustomError::ConfigError(_)
        )
    }
}
