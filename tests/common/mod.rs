#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use ethers::types::TxHash;
use matic_token_transfer::{CustomError, TokenTransfer, TransferRequest};

pub const SENDER: &str = "0x87b917F40f7a031e13577200801b5f2f0D3E1b91";
pub const RECIPIENT: &str = "0xdea6D214E7505391FD64405fE8fbA206C2073Ee4";
pub const TOKEN: &str = "0xcc5de81d1af53dcb5d707b6b33a50f4ee46d983e";
pub const ONE_TOKEN: &str = "1000000000000000000";
pub const PRIVATE_KEY: &str = "0x01161625139843901B1BD54D04904DE80F875978900D369A25817F6CE970CA14";
pub const TX_HASH: &str = "0x5b2c9a0f7c1de3b1e0b8ba6f6f2c2a7d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b";

/// Outcome the mock returns from `transfer_tokens`.
pub enum Reply {
    Hash(TxHash),
    Fail(String),
}

pub struct MockTransfer {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<TransferRequest>>,
}

impl MockTransfer {
    pub fn returning(hash: &str) -> Self {
        let hash = hash.trim_start_matches("0x").parse().expect("valid tx hash");
        Self::with_reply(Reply::Hash(hash))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    pub fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<TransferRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenTransfer for MockTransfer {
    async fn transfer_tokens(&self, request: &TransferRequest) -> Result<TxHash, CustomError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Hash(hash) => Ok(*hash),
            Reply::Fail(message) => Err(CustomError::StringifiedProviderError(message.clone())),
        }
    }

    fn chain_id(&self) -> u64 {
        8995
    }
}

pub fn reference_request() -> TransferRequest {
    TransferRequest::parse(TOKEN, RECIPIENT, ONE_TOKEN, SENDER).expect("valid reference transfer")
}
