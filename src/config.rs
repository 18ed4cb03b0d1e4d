use crate::{
    errors::CustomError,
    models::{
        credential::Credential,
        network_config::{
            NetworkConfig, TESTNET_CHILD_CHAIN_RPC, TESTNET_PARENT_CHAIN_RPC,
            TESTNET_ROOT_CHAIN_ADDRESS, TESTNET_SYNCER_URL, TESTNET_WATCHER_URL,
        },
        transfer::TransferRequest,
    },
};

pub const DEFAULT_FROM: &str = "0x87b917F40f7a031e13577200801b5f2f0D3E1b91";
pub const DEFAULT_TO: &str = "0xdea6D214E7505391FD64405fE8fbA206C2073Ee4";
pub const DEFAULT_TOKEN: &str = "0xcc5de81d1af53dcb5d707b6b33a50f4ee46d983e";
pub const DEFAULT_AMOUNT: &str = "1000000000000000000";

pub struct Config {
    pub network: NetworkConfig,
    pub credential: Credential,
    pub transfer: TransferRequest,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from `lookup`, falling back to testnet defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut network = NetworkConfig::new(
            &var("MATIC_PROVIDER", TESTNET_CHILD_CHAIN_RPC),
            &var("PARENT_PROVIDER", TESTNET_PARENT_CHAIN_RPC),
            &var("ROOT_CHAIN_ADDRESS", TESTNET_ROOT_CHAIN_ADDRESS),
            &var("SYNCER_URL", TESTNET_SYNCER_URL),
            &var("WATCHER_URL", TESTNET_WATCHER_URL),
        )?;
        if let Some(chain_id) = lookup("CHAIN_ID") {
            let chain_id = chain_id
                .parse::<u64>()
                .map_err(|e| CustomError::ConfigError(format!("CHAIN_ID {:?}: {}", chain_id, e)))?;
            network = network.with_chain_id(chain_id);
        }

        let credential = Credential::new(
            lookup("PRIVATE_KEY")
                .ok_or_else(|| CustomError::ConfigError("PRIVATE_KEY is not set".to_string()))?,
        )?;

        let transfer = TransferRequest::parse(
            &var("TRANSFER_TOKEN", DEFAULT_TOKEN),
            &var("TRANSFER_TO", DEFAULT_TO),
            &var("TRANSFER_AMOUNT", DEFAULT_AMOUNT),
            &var("TRANSFER_FROM", DEFAULT_FROM),
        )?;

        Ok(Self {
            network,
            credential,
            transfer,
        })
    }
}
