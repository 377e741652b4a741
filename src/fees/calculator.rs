use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::fee_quote::{FeeLevel, FeeQuote, FeeRate, FeeUnit};
use super::network_class::NetworkClass;
use crate::core::base_units::{parse_amount, ConversionError};
use crate::core::caip::AssetId;
use crate::core::display::{format_amount, format_usd};
use crate::core::precision::resolve_precision;
use crate::core::AssetContext;

/// Conservative size of a typical multi-input transaction; an overestimate on purpose.
pub const DEFAULT_UTXO_TX_SIZE_BYTES: u64 = 400;
/// Gas for a plain native transfer.
pub const DEFAULT_EVM_NATIVE_GAS_LIMIT: u64 = 21_000;
/// Approximate gas for an ERC-20 transfer; not a committed estimate for arbitrary contracts.
pub const DEFAULT_EVM_TOKEN_GAS_LIMIT: u64 = 65_000;

const NATIVE_PER_GWEI: Decimal = Decimal::from_parts(1, 0, 0, false, 9);
const NATIVE_PER_WEI: Decimal = Decimal::from_parts(1, 0, 0, false, 18);
const NATIVE_PER_SAT: Decimal = Decimal::from_parts(1, 0, 0, false, 8);
const ZERO_USD: Decimal = Decimal::from_parts(0, 0, 0, false, 2);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Fee unit {unit:?} does not apply to {class} networks")]
    UnitMismatch { class: NetworkClass, unit: FeeUnit },

    #[error("Fee value must not be negative: {0}")]
    NegativeFee(Decimal),

    #[error("USD price unavailable")]
    PriceUnavailable,

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Calibrated guesses used to turn a fee rate into a total fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeParams {
    pub utxo_tx_size_bytes: u64,
    pub evm_native_gas_limit: u64,
    pub evm_token_gas_limit: u64,
}

impl Default for FeeParams {
    fn default() -> Self {
        Self {
            utxo_tx_size_bytes: DEFAULT_UTXO_TX_SIZE_BYTES,
            evm_native_gas_limit: DEFAULT_EVM_NATIVE_GAS_LIMIT,
            evm_token_gas_limit: DEFAULT_EVM_TOKEN_GAS_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferKind {
    #[default]
    Native,
    Token,
}

impl TransferKind {
    /// Token transfer when the CAIP names a token standard; native otherwise.
    pub fn from_asset_context(ctx: &AssetContext) -> Self {
        match ctx.caip.parse::<AssetId>() {
            Ok(id) if id.is_token() => TransferKind::Token,
            _ => TransferKind::Native,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeeContext {
    pub transfer: TransferKind,
    /// Overrides the configured EVM gas limit.
    pub gas_limit: Option<u64>,
    pub price_usd: Option<Decimal>,
}

impl FeeContext {
    pub fn from_asset_context(ctx: &AssetContext) -> Self {
        Self {
            transfer: TransferKind::from_asset_context(ctx),
            gas_limit: None,
            price_usd: ctx.price_usd,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    pub native: Decimal,
    pub usd: Decimal,
}

impl FeeEstimate {
    pub fn native_display(&self) -> String {
        format_amount(self.native)
    }

    pub fn usd_display(&self) -> String {
        format_usd(self.usd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimates {
    pub slow: FeeEstimate,
    pub average: FeeEstimate,
    pub fastest: FeeEstimate,
}

impl FeeEstimates {
    pub fn get(&self, level: FeeLevel) -> &FeeEstimate {
        match level {
            FeeLevel::Slow => &self.slow,
            FeeLevel::Average => &self.average,
            FeeLevel::Fastest => &self.fastest,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    pub params: FeeParams,
}

impl FeeCalculator {
    pub fn new(params: FeeParams) -> Self {
        Self { params }
    }

    /// Native-unit fee for one quote level, plus its USD value (`0.00` without a price).
    #[instrument(level = "debug", skip(self, ctx))]
    pub fn estimate_fee(
        &self,
        class: NetworkClass,
        rate: &FeeRate,
        ctx: &FeeContext,
    ) -> Result<FeeEstimate, FeeError> {
        let native = self.native_fee(class, rate, ctx)?;
        let usd = native_to_usd(native, ctx.price_usd)?;
        debug!(%native, %usd, "estimated fee");
        Ok(FeeEstimate { native, usd })
    }

    pub fn estimate_all(
        &self,
        class: NetworkClass,
        quote: &FeeQuote,
        ctx: &FeeContext,
    ) -> Result<FeeEstimates, FeeError> {
        Ok(FeeEstimates {
            slow: self.estimate_fee(class, quote.get(FeeLevel::Slow), ctx)?,
            average: self.estimate_fee(class, quote.get(FeeLevel::Average), ctx)?,
            fastest: self.estimate_fee(class, quote.get(FeeLevel::Fastest), ctx)?,
        })
    }

    fn native_fee(
        &self,
        class: NetworkClass,
        rate: &FeeRate,
        ctx: &FeeContext,
    ) -> Result<Decimal, FeeError> {
        if rate.value.is_sign_negative() && !rate.value.is_zero() {
            return Err(FeeError::NegativeFee(rate.value));
        }
        let unit = quote_unit(class, rate);
        let value = rate.value;
        match (class, unit) {
            (NetworkClass::Evm, FeeUnit::Gwei) => {
                scale(value, self.gas_limit(ctx), NATIVE_PER_GWEI)
            }
            (NetworkClass::Evm, FeeUnit::Wei) => scale(value, self.gas_limit(ctx), NATIVE_PER_WEI),
            (NetworkClass::Utxo, FeeUnit::SatPerByte) => {
                scale(value, self.params.utxo_tx_size_bytes, NATIVE_PER_SAT)
            }
            (_, FeeUnit::Native) => Ok(value),
            (class, unit) => Err(FeeError::UnitMismatch { class, unit }),
        }
    }

    fn gas_limit(&self, ctx: &FeeContext) -> u64 {
        ctx.gas_limit.unwrap_or(match ctx.transfer {
            TransferKind::Native => self.params.evm_native_gas_limit,
            TransferKind::Token => self.params.evm_token_gas_limit,
        })
    }
}

fn scale(rate: Decimal, units: u64, factor: Decimal) -> Result<Decimal, FeeError> {
    rate.checked_mul(Decimal::from(units))
        .and_then(|total| total.checked_mul(factor))
        .map(|fee| fee.normalize())
        .ok_or(FeeError::Overflow)
}

/// Unit of a quoted rate: explicit if tagged, else the class default. An
/// untagged EVM quote is always a gas price in gwei, whatever its size.
fn quote_unit(class: NetworkClass, rate: &FeeRate) -> FeeUnit {
    if rate.unit != FeeUnit::Unspecified {
        return rate.unit;
    }
    match class {
        NetworkClass::Utxo => FeeUnit::SatPerByte,
        NetworkClass::Evm => FeeUnit::Gwei,
        NetworkClass::Tendermint | NetworkClass::Other => FeeUnit::Native,
    }
}

/// Legacy guess for untagged EVM total-fee amounts handed to [`fee_to_usd`]:
/// anything above 1 is taken as gwei. Never applied to quoted gas prices;
/// remove once every fee source tags its unit.
pub fn guess_evm_fee_unit(value: Decimal) -> FeeUnit {
    let unit = if value > Decimal::ONE {
        FeeUnit::Gwei
    } else {
        FeeUnit::Native
    };
    warn!(%value, ?unit, "EVM fee value without a unit, guessing from magnitude");
    unit
}

/// USD value of a total fee amount, normalizing gwei/wei to the native unit first.
pub fn fee_to_usd(
    value: Decimal,
    unit: FeeUnit,
    class: NetworkClass,
    price_usd: Option<Decimal>,
) -> Result<Decimal, FeeError> {
    let unit = match (class, unit) {
        (NetworkClass::Evm, FeeUnit::Unspecified) => guess_evm_fee_unit(value),
        (class, unit) => quote_unit(class, &FeeRate::new(value, unit)),
    };
    let native = match (class, unit) {
        (NetworkClass::Evm, FeeUnit::Gwei) => value.checked_mul(NATIVE_PER_GWEI),
        (NetworkClass::Evm, FeeUnit::Wei) => value.checked_mul(NATIVE_PER_WEI),
        (_, FeeUnit::Native) => Some(value),
        (class, unit) => return Err(FeeError::UnitMismatch { class, unit }),
    }
    .ok_or(FeeError::Overflow)?;
    native_to_usd(native, price_usd)
}

/// `amount × price`; `0.00` when no price is known.
pub fn native_to_usd(amount: Decimal, price_usd: Option<Decimal>) -> Result<Decimal, FeeError> {
    match price_usd {
        Some(price) => amount.checked_mul(price).ok_or(FeeError::Overflow),
        None => {
            debug!(%amount, "no USD price, reporting zero");
            Ok(ZERO_USD)
        }
    }
}

/// Native amount worth `usd`, rounded down to the asset's precision.
pub fn usd_to_native(usd: Decimal, ctx: &AssetContext) -> Result<Decimal, FeeError> {
    let price = match ctx.price_usd {
        Some(price) if !price.is_zero() => price,
        _ => return Err(FeeError::PriceUnavailable),
    };
    let precision = resolve_precision(Some(ctx)).map_err(ConversionError::from)?;
    let native = usd.checked_div(price).ok_or(FeeError::Overflow)?;
    Ok(native
        .round_dp_with_strategy(precision as u32, RoundingStrategy::ToZero)
        .normalize())
}

/// Balance left after the fee. Token transfers pay their fee in the chain's
/// native coin, so the whole token balance stays spendable.
pub fn max_sendable(
    ctx: &AssetContext,
    fee_native: Decimal,
    kind: TransferKind,
) -> Result<Decimal, FeeError> {
    let balance = parse_amount(&ctx.balance)?;
    match kind {
        TransferKind::Token => Ok(balance),
        TransferKind::Native => Ok(balance
            .checked_sub(fee_native)
            .ok_or(FeeError::Overflow)?
            .max(Decimal::ZERO)),
    }
}
