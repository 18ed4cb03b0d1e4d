use std::fmt;
use std::str::FromStr;

use ethers::signers::{LocalWallet, Signer};

use crate::errors::CustomError;

/// Private key material for the sending wallet.
///
/// Has no `Display` or `Serialize` impl. `Debug` output is redacted.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(private_key: impl Into<String>) -> Result<Self, CustomError> {
        let private_key = private_key.into();
        let digits = private_key
            .strip_prefix("0x")
            .or_else(|| private_key.strip_prefix("0X"))
            .unwrap_or(&private_key);

        if digits.len() != 64 {
            return Err(CustomError::InvalidCredentialError(format!(
                "expected 64 hex digits, got {}",
                digits.len()
            )));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CustomError::InvalidCredentialError(
                "key contains non-hex characters".to_string(),
            ));
        }

        Ok(Self(private_key))
    }

    /// Build a wallet bound to `chain_id`.
    pub(crate) fn wallet(&self, chain_id: u64) -> Result<LocalWallet, CustomError> {
        // The underlying signer error can echo its input, so it is not forwarded.
        let wallet = LocalWallet::from_str(&self.0).map_err(|_| {
            CustomError::InvalidCredentialError("key is not a valid secp256k1 scalar".to_string())
        })?;
        Ok(wallet.with_chain_id(chain_id))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
