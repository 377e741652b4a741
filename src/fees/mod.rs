pub mod calculator;
pub mod fee_quote;
pub mod network_class;

pub use calculator::{
    fee_to_usd, guess_evm_fee_unit, max_sendable, native_to_usd, usd_to_native, FeeCalculator,
    FeeContext, FeeError, FeeEstimate, FeeEstimates, FeeParams, TransferKind,
    DEFAULT_EVM_NATIVE_GAS_LIMIT, DEFAULT_EVM_TOKEN_GAS_LIMIT, DEFAULT_UTXO_TX_SIZE_BYTES,
};
pub use fee_quote::{FeeLevel, FeeQuote, FeeRate, FeeUnit};
pub use network_class::NetworkClass;
