use dotenv::dotenv;
use log::{error, info, warn};

use matic_token_transfer::{config::Config, CustomError, MaticClient, TransferService};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CustomError> {
    let Config {
        network,
        credential,
        transfer,
    } = Config::from_env()?;

    let client = MaticClient::new(network, credential).await?;
    match client.parent_chain_id().await {
        Ok(id) => info!("parent chain id {}", id),
        Err(e) => warn!("parent chain unreachable: {}", e),
    }

    match client.token_balance(transfer.token, client.address()).await {
        Ok(balance) => info!(
            "sender holds {} {}",
            balance.formatted_balance,
            balance.symbol.as_deref().unwrap_or("tokens")
        ),
        Err(e) => warn!("could not read sender balance: {}", e),
    }

    let service = TransferService::new(client);
    let record = service
        .send_with_handler(&transfer, |hash| {
            println!("Transaction Hash ----> {}", hash);
        })
        .await?;

    match serde_json::to_string_pretty(&record) {
        Ok(json) => info!("{}", json),
        Err(e) => warn!("could not serialize transfer record: {}", e),
    }

    Ok(())
}
