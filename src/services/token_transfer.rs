use async_trait::async_trait;
use ethers::types::TxHash;

use crate::{errors::CustomError, models::transfer::TransferRequest};

/// Submits ERC-20 transfers to a chain.
#[async_trait]
pub trait TokenTransfer: Send + Sync {
    /// Sign and broadcast `request`, resolving once with the transaction hash.
    async fn transfer_tokens(&self, request: &TransferRequest) -> Result<TxHash, CustomError>;

    fn chain_id(&self) -> u64;
}
