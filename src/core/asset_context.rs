use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The asset/chain pairing the user is operating on, as handed over by the wallet SDK.
///
/// `caip` is authoritative for lookups; `symbol` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetContext {
    /// CAIP-2 network id, possibly wildcarded (`eip155:*`).
    #[serde(default)]
    pub network_id: String,
    /// CAIP-19 asset id, always prefixed with a concrete network id.
    #[serde(default)]
    pub caip: String,
    /// Alternate asset id field some SDK responses carry instead of `caip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    /// USD per one whole unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<Decimal>,
    /// Native-unit balance as a decimal string.
    #[serde(default = "zero_balance")]
    pub balance: String,
}

fn zero_balance() -> String {
    "0".to_string()
}

impl AssetContext {
    pub fn new(network_id: &str, caip: &str) -> Self {
        Self {
            network_id: network_id.to_string(),
            caip: caip.to_string(),
            balance: zero_balance(),
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_price_usd(mut self, price: Decimal) -> Self {
        self.price_usd = Some(price);
        self
    }

    pub fn with_balance(mut self, balance: &str) -> Self {
        self.balance = balance.to_string();
        self
    }

    pub fn with_asset_id(mut self, asset_id: &str) -> Self {
        self.asset_id = Some(asset_id.to_string());
        self
    }
}
