pub mod config;
pub mod core;
pub mod fees;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use self::core::{
    from_base_units, resolve_network_id, resolve_precision, to_base_units, AssetContext,
    ConversionError, PrecisionError, UnitBasis,
};
pub use self::fees::{FeeCalculator, FeeContext, FeeError, FeeEstimate, FeeQuote, NetworkClass};
