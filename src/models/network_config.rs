use ethers::types::Address;
use url::Url;

use crate::{errors::CustomError, models::transfer::parse_address};

pub const TESTNET_CHILD_CHAIN_RPC: &str = "https://testnet2.matic.network";
pub const TESTNET_PARENT_CHAIN_RPC: &str =
    "https://ropsten.infura.io/v3/70645f042c3a409599c60f96f6dd9fbc";
pub const TESTNET_ROOT_CHAIN_ADDRESS: &str = "0x60e2b19b9a87a3f37827f2c8c8306be718a5f9b4";
pub const TESTNET_SYNCER_URL: &str = "https://matic-syncer2.api.matic.network/api/v1";
pub const TESTNET_WATCHER_URL: &str = "https://ropsten-watcher2.api.matic.network/api/v1";

/// Endpoints of a child chain and the parent chain it commits to.
///
/// Built through [`NetworkConfig::new`] so every endpoint is checked:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<matic_token_transfer::NetworkConfig>();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub child_chain_rpc: Url,
    pub parent_chain_rpc: Url,
    pub root_chain_address: Address,
    pub syncer_url: Url,
    pub watcher_url: Url,
    /// Expected child chain id. Queried from the node when unset.
    pub chain_id: Option<u64>,
}

impl NetworkConfig {
    pub fn new(
        child_chain_rpc: &str,
        parent_chain_rpc: &str,
        root_chain_address: &str,
        syncer_url: &str,
        watcher_url: &str,
    ) -> Result<Self, CustomError> {
        Ok(Self {
            child_chain_rpc: parse_url("child chain provider", child_chain_rpc)?,
            parent_chain_rpc: parse_url("parent chain provider", parent_chain_rpc)?,
            root_chain_address: parse_address("root chain", root_chain_address)?,
            syncer_url: parse_url("syncer", syncer_url)?,
            watcher_url: parse_url("watcher", watcher_url)?,
            chain_id: None,
        })
    }

    /// The public test network.
    pub fn testnet() -> Result<Self, CustomError> {
        Self::new(
            TESTNET_CHILD_CHAIN_RPC,
            TESTNET_PARENT_CHAIN_RPC,
            TESTNET_ROOT_CHAIN_ADDRESS,
            TESTNET_SYNCER_URL,
            TESTNET_WATCHER_URL,
        )
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, CustomError> {
    let url = Url::parse(raw)
        .map_err(|e| CustomError::ConfigError(format!("{} url {:?}: {}", name, raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CustomError::ConfigError(format!(
            "{} url {:?}: unsupported scheme {}",
            name, raw, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_endpoints_parse() {
        let config = NetworkConfig::testnet().unwrap();
        assert_eq!(config.child_chain_rpc.host_str(), Some("testnet2.matic.network"));
        assert_eq!(config.syncer_url.path(), "/api/v1");
        assert_eq!(
            format!("{:?}", config.root_chain_address),
            TESTNET_ROOT_CHAIN_ADDRESS
        );
        assert_eq!(config.chain_id, None);
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let err = NetworkConfig::new(
            "not a url",
            TESTNET_PARENT_CHAIN_RPC,
            TESTNET_ROOT_CHAIN_ADDRESS,
            TESTNET_SYNCER_URL,
            TESTNET_WATCHER_URL,
        )
        .unwrap_err();
        assert!(matches!(err, CustomError::ConfigError(msg) if msg.contains("child chain")));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = NetworkConfig::new(
            TESTNET_CHILD_CHAIN_RPC,
            "ws://localhost:8546",
            TESTNET_ROOT_CHAIN_ADDRESS,
            TESTNET_SYNCER_URL,
            TESTNET_WATCHER_URL,
        )
        .unwrap_err();
        assert!(matches!(err, CustomError::ConfigError(msg) if msg.contains("unsupported scheme")));
    }

    #[test]
    fn rejects_malformed_root_chain_address() {
        let err = NetworkConfig::new(
            TESTNET_CHILD_CHAIN_RPC,
            TESTNET_PARENT_CHAIN_RPC,
            "0x60e2b19b",
            TESTNET_SYNCER_URL,
            TESTNET_WATCHER_URL,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CustomError::InvalidAddressError { field: "root chain", .. }
        ));
    }
}
