use std::{fmt, sync::Arc};

use async_trait::async_trait;
use ethers::{
    contract::abigen,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, TxHash},
};
use log::{debug, info};

use crate::{
    errors::CustomError,
    models::{
        credential::Credential,
        network_config::NetworkConfig,
        token::{format_units, TokenBalance},
        transfer::TransferRequest,
    },
};

use super::token_transfer::TokenTransfer;

abigen!(
    ERC20Contract,
    r#"[
        function balanceOf(address owner) external view returns (uint256)
        function decimals() external view returns (uint8)
        function symbol() external view returns (string)
        function transfer(address to, uint256 amount) external returns (bool)
    ]"#
);

type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Child chain client holding a wallet for one credential.
pub struct MaticClient {
    config: NetworkConfig,
    child: Arc<SignerClient>,
    parent: Provider<Http>,
    chain_id: u64,
    address: Address,
}

impl MaticClient {
    /// Connect to the configured chains and bind `credential` to the child chain.
    pub async fn new(config: NetworkConfig, credential: Credential) -> Result<Self, CustomError> {
        let child = provider(&config.child_chain_rpc)?;
        let parent = provider(&config.parent_chain_rpc)?;

        let connected_chain_id = child
            .get_chainid()
            .await
            .map_err(|e| CustomError::StringifiedProviderError(e.to_string()))?
            .as_u64();

        if let Some(expected) = config.chain_id {
            if expected != connected_chain_id {
                return Err(CustomError::NetworkError(format!(
                    "child chain reports id {} but {} was configured",
                    connected_chain_id, expected
                )));
            }
        }

        let wallet = credential.wallet(connected_chain_id)?;
        let address = wallet.address();
        info!(
            "connected to child chain {} ({}) as {:?}",
            connected_chain_id, config.child_chain_rpc, address
        );

        Ok(Self {
            child: Arc::new(SignerMiddleware::new(child, wallet)),
            parent,
            chain_id: connected_chain_id,
            address,
            config,
        })
    }

    /// Wallet address derived from the credential.
    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn parent_chain_id(&self) -> Result<u64, CustomError> {
        let chain_id = self.parent.get_chainid().await?;
        Ok(chain_id.as_u64())
    }

    /// ERC-20 balance of `owner` for `token`.
    ///
    /// `decimals()` and `symbol()` are optional in ERC-20; a token lacking them still yields a balance.
    pub async fn token_balance(
        &self,
        token: Address,
        owner: Address,
    ) -> Result<TokenBalance, CustomError> {
        let contract = ERC20Contract::new(token, self.child.clone());

        let decimals = match contract.decimals().call().await {
            Ok(decimals) => Some(decimals),
            Err(e) => {
                debug!("token {:?} has no decimals(): {}", token, e);
                None
            }
        };
        let symbol = match contract.symbol().call().await {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                debug!("token {:?} has no symbol(): {}", token, e);
                None
            }
        };
        let balance = contract
            .balance_of(owner)
            .call()
            .await
            .map_err(|e| CustomError::ContractError(e.to_string()))?;

        Ok(TokenBalance {
            token_address: format!("{:?}", token),
            formatted_balance: match decimals {
                Some(decimals) => format_units(balance, decimals),
                None => balance.to_string(),
            },
            symbol,
            balance,
            decimals,
        })
    }
}

#[async_trait]
impl TokenTransfer for MaticClient {
    async fn transfer_tokens(&self, request: &TransferRequest) -> Result<TxHash, CustomError> {
        if request.from != self.address {
            return Err(CustomError::SenderMismatchError {
                from: format!("{:?}", request.from),
                wallet: format!("{:?}", self.address),
            });
        }

        let contract = ERC20Contract::new(request.token, self.child.clone());

        let balance = contract
            .balance_of(request.from)
            .call()
            .await
            .map_err(|e| CustomError::ContractError(e.to_string()))?;
        if balance < request.amount {
            return Err(CustomError::InsufficientFundsError {
                balance: balance.to_string(),
                requested: request.amount.to_string(),
            });
        }

        // Child chain predates EIP-1559.
        let call = contract
            .transfer(request.to, request.amount)
            .from(request.from)
            .legacy();
        let pending_tx = call
            .send()
            .await
            .map_err(|e| CustomError::ContractError(e.to_string()))?;
        let tx_hash = *pending_tx;
        debug!("transfer accepted by child chain {}: {:?}", self.chain_id, tx_hash);

        Ok(tx_hash)
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

impl fmt::Debug for MaticClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaticClient")
            .field("config", &self.config)
            .field("chain_id", &self.chain_id)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

fn provider(url: &url::Url) -> Result<Provider<Http>, CustomError> {
    Provider::<Http>::try_from(url.as_str()).map_err(|e| CustomError::NetworkError(e.to_string()))
}
