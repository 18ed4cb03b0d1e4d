use log::{error, info};

use crate::{
    errors::CustomError,
    models::{transaction::TransferRecord, transfer::TransferRequest},
};

use super::token_transfer::TokenTransfer;

pub struct TransferService<C> {
    client: C,
}

impl<C: TokenTransfer> TransferService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Submit `request` and resolve once with the submitted transfer.
    pub async fn send(&self, request: &TransferRequest) -> Result<TransferRecord, CustomError> {
        info!(
            "transferring {} of token {:?} from {:?} to {:?}",
            request.amount, request.token, request.from, request.to
        );

        let tx_hash = match self.client.transfer_tokens(request).await {
            Ok(hash) if hash.is_zero() => Err(CustomError::EmptyTransactionHashError),
            other => other,
        }
        .map_err(|e| {
            error!("transfer from {:?} failed: {}", request.from, e);
            e
        })?;

        let record =
            TransferRecord::submitted(request, format!("{:?}", tx_hash), self.client.chain_id());
        info!("transfer submitted: {}", record.transaction_hash);
        Ok(record)
    }

    /// Like [`send`](Self::send), handing the transaction hash to `on_transaction_hash`.
    ///
    /// The handler runs exactly once on success and not at all on failure.
    pub async fn send_with_handler<F>(
        &self,
        request: &TransferRequest,
        on_transaction_hash: F,
    ) -> Result<TransferRecord, CustomError>
    where
        F: FnOnce(&str),
    {
        let record = self.send(request).await?;
        on_transaction_hash(&record.transaction_hash);
        Ok(record)
    }
}
