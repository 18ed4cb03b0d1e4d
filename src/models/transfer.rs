use std::str::FromStr;

use ethers::types::{Address, U256};

use crate::errors::CustomError;

/// A validated ERC-20 transfer on the child chain.
///
/// Amounts are in the token's smallest denomination. Only [`TransferRequest::parse`] builds
/// one from untrusted input, so it is not deserializable:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<matic_token_transfer::TransferRequest>();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub token: Address,
    pub to: Address,
    pub amount: U256,
    pub from: Address,
}

impl TransferRequest {
    /// Validate raw inputs. Nothing is sent if any of them is malformed.
    pub fn parse(token: &str, to: &str, amount: &str, from: &str) -> Result<Self, CustomError> {
        Ok(Self {
            token: parse_address("token", token)?,
            to: parse_address("recipient", to)?,
            amount: parse_amount(amount)?,
            from: parse_address("sender", from)?,
        })
    }
}

/// Parse a `0x`-prefixed, 40 hex digit account identifier.
///
/// Mixed case is accepted without checking the EIP-55 checksum.
pub fn parse_address(field: &'static str, raw: &str) -> Result<Address, CustomError> {
    let invalid = || CustomError::InvalidAddressError {
        field,
        value: raw.to_string(),
    };

    let digits = raw.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    Address::from_str(digits).map_err(|_| invalid())
}

/// Parse a non-negative integer amount given in decimal digits.
pub fn parse_amount(raw: &str) -> Result<U256, CustomError> {
    if raw.is_empty() {
        return Err(CustomError::InvalidAmountError("amount is empty".to_string()));
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(CustomError::InvalidAmountError(format!(
            "{} is not a non-negative integer",
            raw
        )));
    }

    U256::from_dec_str(raw)
        .map_err(|_| CustomError::InvalidAmountError(format!("{} does not fit in 256 bits", raw)))
}
