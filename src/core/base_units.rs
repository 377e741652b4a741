use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use super::asset_context::AssetContext;
use super::display::format_amount;
use super::precision::{resolve_precision, PrecisionError};

/// THORChain represents every amount with 8 fractional digits, whatever the asset's own decimals.
pub const THORCHAIN_DECIMALS: u8 = 8;

/// Most fractional digits a display value holds without rounding.
const MAX_DISPLAY_PRECISION: u8 = 28;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Precision(#[from] PrecisionError),

    #[error("Invalid amount {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("Amount out of range: {0}")]
    Overflow(String),
}

impl ConversionError {
    fn parse(input: &str, reason: impl Into<String>) -> Self {
        ConversionError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Which digit count a base-unit amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitBasis {
    /// The asset's own precision, resolved from its context.
    #[default]
    Asset,
    /// THORChain wire format: always [`THORCHAIN_DECIMALS`], no context needed.
    Thorchain,
}

impl UnitBasis {
    pub fn precision(self, ctx: Option<&AssetContext>) -> Result<u8, PrecisionError> {
        match self {
            UnitBasis::Asset => resolve_precision(ctx),
            UnitBasis::Thorchain => Ok(THORCHAIN_DECIMALS),
        }
    }
}

/// Decimal string (e.g. `"1.5"`) → base units, rounding down past the precision.
pub fn to_base_units(
    amount: &str,
    ctx: Option<&AssetContext>,
    basis: UnitBasis,
) -> Result<u128, ConversionError> {
    let precision = basis.precision(ctx)?;
    to_raw(amount, precision)
}

/// Base units → display string, using the tiered formatting of [`format_amount`].
pub fn from_base_units(
    raw: &str,
    ctx: Option<&AssetContext>,
    basis: UnitBasis,
) -> Result<String, ConversionError> {
    let precision = basis.precision(ctx)?;
    if precision > MAX_DISPLAY_PRECISION {
        return Err(ConversionError::Overflow(format!(
            "precision {} exceeds {} displayable digits",
            precision, MAX_DISPLAY_PRECISION
        )));
    }
    let exact = human(parse_raw(raw)?, precision)?;
    let value = Decimal::from_str(&exact).map_err(|e| ConversionError::Overflow(e.to_string()))?;
    Ok(format_amount(value))
}

/// Base units → exact decimal string with trailing zeros trimmed (no floats).
pub fn from_base_units_exact(
    raw: &str,
    ctx: Option<&AssetContext>,
    basis: UnitBasis,
) -> Result<String, ConversionError> {
    let precision = basis.precision(ctx)?;
    let raw = parse_raw(raw)?;
    human(raw, precision)
}

/// Parses a non-negative decimal amount such as a balance or a typed-in value.
pub fn parse_amount(amount: &str) -> Result<Decimal, ConversionError> {
    let (integer_part, fractional_part) = split_amount(amount)?;
    let normalized = if fractional_part.is_empty() {
        integer_part.clone()
    } else {
        format!("{}.{}", integer_part, fractional_part)
    };
    Decimal::from_str(&normalized).map_err(|e| ConversionError::parse(amount, e.to_string()))
}

fn to_raw(amount: &str, precision: u8) -> Result<u128, ConversionError> {
    let (integer_part, fractional_part) = split_amount(amount)?;
    let scale = 10_u128
        .checked_pow(precision as u32)
        .ok_or_else(|| ConversionError::Overflow(format!("precision {} too large", precision)))?;
    let integer: u128 = integer_part
        .parse()
        .map_err(|_| ConversionError::Overflow(amount.to_string()))?;
    let integer_raw = integer
        .checked_mul(scale)
        .ok_or_else(|| ConversionError::Overflow(amount.to_string()))?;

    let digits = precision as usize;
    if fractional_part.len() > digits {
        debug!(amount, precision, "truncating fractional digits past precision");
    }
    let kept = &fractional_part[..fractional_part.len().min(digits)];
    let fractional_raw = if digits == 0 {
        0
    } else {
        format!("{:0<width$}", kept, width = digits)
            .parse::<u128>()
            .map_err(|_| ConversionError::Overflow(amount.to_string()))?
    };
    integer_raw
        .checked_add(fractional_raw)
        .ok_or_else(|| ConversionError::Overflow(amount.to_string()))
}

fn human(raw: u128, precision: u8) -> Result<String, ConversionError> {
    let divisor = 10_u128
        .checked_pow(precision as u32)
        .ok_or_else(|| ConversionError::Overflow(format!("precision {} too large", precision)))?;
    let integer_part = raw / divisor;
    let fractional_part = raw % divisor;
    if fractional_part == 0 {
        return Ok(integer_part.to_string());
    }
    let fractional_str = format!("{:0>width$}", fractional_part, width = precision as usize);
    Ok(format!(
        "{}.{}",
        integer_part,
        fractional_str.trim_end_matches('0')
    ))
}

fn parse_raw(raw: &str) -> Result<u128, ConversionError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::parse(raw, "base units must be a non-negative integer"));
    }
    raw.parse()
        .map_err(|_| ConversionError::Overflow(raw.to_string()))
}

/// Splits into (integer digits, fractional digits); the integer part is `"0"` when omitted.
fn split_amount(amount: &str) -> Result<(String, String), ConversionError> {
    let trimmed = amount.trim();
    if trimmed.contains(['e', 'E']) {
        let value = Decimal::from_scientific(&trimmed.to_ascii_lowercase())
            .map_err(|e| ConversionError::parse(amount, e.to_string()))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ConversionError::parse(amount, "amount must not be negative"));
        }
        return split_amount(&value.normalize().to_string());
    }
    if trimmed.starts_with('-') {
        return Err(ConversionError::parse(amount, "amount must not be negative"));
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() > 2 {
        return Err(ConversionError::parse(amount, "more than one decimal point"));
    }
    let integer_part = parts[0];
    let fractional_part = parts.get(1).copied().unwrap_or("");
    if integer_part.is_empty() && fractional_part.is_empty() {
        return Err(ConversionError::parse(amount, "no digits"));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer_part) || !all_digits(fractional_part) {
        return Err(ConversionError::parse(amount, "not a decimal number"));
    }
    let integer_part = if integer_part.is_empty() { "0" } else { integer_part };
    Ok((integer_part.to_string(), fractional_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_bare_fraction_and_scientific() {
        assert_eq!(split_amount(".5").unwrap(), ("0".into(), "5".into()));
        assert_eq!(split_amount("1e-7").unwrap(), ("0".into(), "0000001".into()));
        assert_eq!(split_amount("2.5E3").unwrap(), ("2500".into(), "".into()));
    }

    #[test]
    fn split_rejects_garbage() {
        assert!(split_amount("").is_err());
        assert!(split_amount(".").is_err());
        assert!(split_amount("+1").is_err());
        assert!(split_amount("1,5").is_err());
        assert!(split_amount("-1e3").is_err());
    }

    #[test]
    fn human_trims_trailing_zeros() {
        assert_eq!(human(150_000_000, 8).unwrap(), "1.5");
        assert_eq!(human(100, 2).unwrap(), "1");
        assert_eq!(human(7, 0).unwrap(), "7");
        assert_eq!(human(1, 18).unwrap(), "0.000000000000000001");
    }
}
