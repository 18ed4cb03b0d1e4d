use ethers::types::U256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token_address: String,
    pub symbol: Option<String>,
    pub balance: U256,
    pub decimals: Option<u8>,
    pub formatted_balance: String,
}

/// Render `amount` as a decimal number of whole tokens, trimming trailing zeros.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let decimals = decimals as usize;
    let mut amount_str = amount.to_string();

    if amount_str.len() <= decimals {
        amount_str.insert_str(0, &"0".repeat(decimals - amount_str.len() + 1));
    }

    if decimals > 0 {
        amount_str.insert(amount_str.len() - decimals, '.');
        amount_str = amount_str
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    if amount_str.is_empty() {
        "0".to_string()
    } else {
        amount_str
    }
}
