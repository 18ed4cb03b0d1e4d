pub mod matic_client;
pub mod token_transfer;
pub mod transfer_service;
