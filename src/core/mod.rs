pub mod asset_context;
pub mod base_units;
pub mod caip;
pub mod display;
pub mod network_id;
pub mod precision;

pub use asset_context::AssetContext;
pub use base_units::{
    from_base_units, from_base_units_exact, parse_amount, to_base_units, ConversionError,
    UnitBasis, THORCHAIN_DECIMALS,
};
pub use caip::{AssetId, CaipError, ChainId};
pub use display::{format_amount, format_amount_down, format_usd};
pub use network_id::resolve_network_id;
pub use precision::{resolve_precision, PrecisionError};
