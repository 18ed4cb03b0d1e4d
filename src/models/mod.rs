pub mod credential;
pub mod network_config;
pub mod token;
pub mod transaction;
pub mod transfer;
