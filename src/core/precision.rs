use thiserror::Error;

use super::asset_context::AssetContext;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("Asset context is required but was not provided")]
    MissingContext,

    #[error("Asset {0:?} has neither precision nor decimals")]
    MissingPrecision(String),
}

/// Fractional digits of the asset's base unit. `precision` wins over `decimals`;
/// `0` is a real value. There is no default: a guessed precision would shift
/// amounts by orders of magnitude.
pub fn resolve_precision(ctx: Option<&AssetContext>) -> Result<u8, PrecisionError> {
    let ctx = ctx.ok_or(PrecisionError::MissingContext)?;
    ctx.precision
        .or(ctx.decimals)
        .ok_or_else(|| PrecisionError::MissingPrecision(ctx.caip.clone()))
}
