//! Conversion between decimal token amounts and 18-decimal base units

use crate::error::{ChainError, ChainResult};
use ethabi::ethereum_types::U256;

/// Fixed decimal scale of the reward token.
pub const TOKEN_DECIMALS: u32 = 18;

fn scale() -> U256 {
    U256::exp10(TOKEN_DECIMALS as usize)
}

/// Parse a decimal amount string (e.g. `"1.5"`) into base units.
///
/// Rejects empty strings, signs, non-digit characters and fractions with
/// more than 18 digits. The conversion is exact.
pub fn parse_units(amount: &str) -> ChainResult<U256> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(ChainError::InvalidAmount("empty amount".to_string()));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ChainError::InvalidAmount(amount.to_string()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ChainError::InvalidAmount(amount.to_string()));
    }
    if frac_part.len() > TOKEN_DECIMALS as usize {
        return Err(ChainError::InvalidAmount(format!(
            "{}: more than {} decimal places",
            amount, TOKEN_DECIMALS
        )));
    }

    let int_units = if int_part.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(int_part).map_err(|_| ChainError::InvalidAmount(amount.to_string()))?
    };

    let frac_units = if frac_part.is_empty() {
        U256::zero()
    } else {
        let padded = format!("{:0<width$}", frac_part, width = TOKEN_DECIMALS as usize);
        U256::from_dec_str(&padded).map_err(|_| ChainError::InvalidAmount(amount.to_string()))?
    };

    int_units
        .checked_mul(scale())
        .and_then(|v| v.checked_add(frac_units))
        .ok_or_else(|| ChainError::InvalidAmount(format!("{}: overflow", amount)))
}

/// Format base units back into a decimal string, trimming trailing zeros.
pub fn format_units(value: U256) -> String {
    let int_part = value / scale();
    let frac_part = value % scale();
    if frac_part.is_zero() {
        return int_part.to_string();
    }
    let frac = format!(
        "{:0>width$}",
        frac_part.to_string(),
        width = TOKEN_DECIMALS as usize
    );
    format!("{}.{}", int_part, frac.trim_end_matches('0'))
}
