use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::transfer::TransferRequest;

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: Uuid,
    pub from_address: String,
    pub to_address: String,
    pub token_address: String,
    pub amount: String,
    pub transaction_hash: String,
    pub chain_id: u64,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Accepted by the node; not yet known to be mined.
    Submitted,
}

impl TransferRecord {
    pub fn submitted(request: &TransferRequest, transaction_hash: String, chain_id: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_address: format!("{:?}", request.from),
            to_address: format!("{:?}", request.to),
            token_address: format!("{:?}", request.token),
            amount: request.amount.to_string(),
            transaction_hash,
            chain_id,
            timestamp: Utc::now(),
            status: TransactionStatus::Submitted,
        }
    }
}
