use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Speed level of a fee quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeLevel {
    Slow,
    Average,
    Fastest,
}

impl FeeLevel {
    pub const ALL: [FeeLevel; 3] = [FeeLevel::Slow, FeeLevel::Average, FeeLevel::Fastest];
}

/// Unit tag of a quoted fee value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeUnit {
    SatPerByte,
    Gwei,
    Wei,
    /// Flat fee in the asset's native unit (the SDK sends the ticker here).
    Native,
    Unspecified,
}

impl From<&str> for FeeUnit {
    fn from(unit: &str) -> Self {
        match unit.trim().to_ascii_lowercase().as_str() {
            "" => FeeUnit::Unspecified,
            "sat/byte" | "sats/byte" | "sat/vbyte" | "sat/vb" | "sat/b" => FeeUnit::SatPerByte,
            "gwei" => FeeUnit::Gwei,
            "wei" => FeeUnit::Wei,
            _ => FeeUnit::Native,
        }
    }
}

impl From<String> for FeeUnit {
    fn from(unit: String) -> Self {
        FeeUnit::from(unit.as_str())
    }
}

impl From<FeeUnit> for String {
    fn from(unit: FeeUnit) -> Self {
        match unit {
            FeeUnit::SatPerByte => "sat/byte",
            FeeUnit::Gwei => "gwei",
            FeeUnit::Wei => "wei",
            FeeUnit::Native => "native",
            FeeUnit::Unspecified => "",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRate {
    pub value: Decimal,
    #[serde(default = "unspecified")]
    pub unit: FeeUnit,
}

fn unspecified() -> FeeUnit {
    FeeUnit::Unspecified
}

impl FeeRate {
    pub fn new(value: Decimal, unit: FeeUnit) -> Self {
        Self { value, unit }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub slow: FeeRate,
    pub average: FeeRate,
    pub fastest: FeeRate,
}

impl FeeQuote {
    pub fn new(slow: FeeRate, average: FeeRate, fastest: FeeRate) -> Self {
        Self {
            slow,
            average,
            fastest,
        }
    }

    pub fn get(&self, level: FeeLevel) -> &FeeRate {
        match level {
            FeeLevel::Slow => &self.slow,
            FeeLevel::Average => &self.average,
            FeeLevel::Fastest => &self.fastest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_sdk_units() {
        assert_eq!(FeeUnit::from("sat/byte"), FeeUnit::SatPerByte);
        assert_eq!(FeeUnit::from("sat/vByte"), FeeUnit::SatPerByte);
        assert_eq!(FeeUnit::from("GWEI"), FeeUnit::Gwei);
        assert_eq!(FeeUnit::from("ATOM"), FeeUnit::Native);
        assert_eq!(FeeUnit::from(""), FeeUnit::Unspecified);
    }

    #[test]
    fn deserializes_quote() {
        let quote: FeeQuote = serde_json::from_value(json!({
            "slow": { "value": "12", "unit": "gwei" },
            "average": { "value": 20, "unit": "gwei" },
            "fastest": { "value": 35.5 }
        }))
        .unwrap();
        assert_eq!(quote.get(FeeLevel::Slow).value, Decimal::from(12));
        assert_eq!(quote.get(FeeLevel::Average).unit, FeeUnit::Gwei);
        assert_eq!(quote.get(FeeLevel::Fastest).value, Decimal::new(355, 1));
        assert_eq!(quote.get(FeeLevel::Fastest).unit, FeeUnit::Unspecified);
    }
}
