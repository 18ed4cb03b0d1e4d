pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::CustomError;
pub use models::{credential::Credential, network_config::NetworkConfig, transfer::TransferRequest};
pub use services::{
    matic_client::MaticClient, token_transfer::TokenTransfer, transfer_service::TransferService,
};
