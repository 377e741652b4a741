//! Human-facing amount formatting.
//!
//! The number of places is picked by magnitude for readability. It is not the
//! precision an amount is stored or transacted with.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const SCIENTIFIC_BELOW: Decimal = Decimal::from_parts(1, 0, 0, false, 6);
const EIGHT_PLACES_BELOW: Decimal = Decimal::from_parts(1, 0, 0, false, 4);
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `0` → `"0"`, `< 1e-6` → `1.50e-7`, `< 1e-4` → 8 places, `< 1` → 6,
/// `< 100` → 4, otherwise 2. Fixed places keep trailing zeros.
pub fn format_amount(value: Decimal) -> String {
    format_tiered(value, RoundingStrategy::MidpointAwayFromZero)
}

/// Same tiers as [`format_amount`], truncated so the shown value never
/// exceeds `value`. For ceilings such as a max sendable amount.
pub fn format_amount_down(value: Decimal) -> String {
    format_tiered(value, RoundingStrategy::ToZero)
}

fn format_tiered(value: Decimal, strategy: RoundingStrategy) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < SCIENTIFIC_BELOW {
        let shown = match strategy {
            RoundingStrategy::ToZero => value
                .round_sf_with_strategy(3, RoundingStrategy::ToZero)
                .unwrap_or(value),
            _ => value,
        };
        let float = shown.to_f64().unwrap_or_default();
        return format!("{:.2e}", float);
    }
    let places = if magnitude < EIGHT_PLACES_BELOW {
        8
    } else if magnitude < Decimal::ONE {
        6
    } else if magnitude < HUNDRED {
        4
    } else {
        2
    };
    fixed(value, places, strategy)
}

/// USD amounts always show cents.
pub fn format_usd(value: Decimal) -> String {
    fixed(value, 2, RoundingStrategy::MidpointAwayFromZero)
}

fn fixed(value: Decimal, places: u32, strategy: RoundingStrategy) -> String {
    let mut rounded = value.round_dp_with_strategy(places, strategy);
    rounded.rescale(places);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn tiers() {
        assert_eq!(format_amount(Decimal::ZERO), "0");
        assert_eq!(format_amount(d("0.00000015")), "1.50e-7");
        assert_eq!(format_amount(d("0.00004")), "0.00004000");
        assert_eq!(format_amount(d("0.00042")), "0.000420");
        assert_eq!(format_amount(d("1.5")), "1.5000");
        assert_eq!(format_amount(d("99.99999")), "100.0000");
        assert_eq!(format_amount(d("1234.5678")), "1234.57");
    }

    #[test]
    fn rounding_down_never_exceeds_value() {
        assert_eq!(format_amount(d("0.0099999")), "0.010000");
        assert_eq!(format_amount_down(d("0.0099999")), "0.009999");
        assert_eq!(format_amount_down(d("99.99999")), "99.9999");
        assert_eq!(format_amount_down(d("0.000000149999")), "1.49e-7");
        assert_eq!(format_amount_down(Decimal::ZERO), "0");
    }

    #[test]
    fn usd_keeps_cents() {
        assert_eq!(format_usd(Decimal::ZERO), "0.00");
        assert_eq!(format_usd(d("1.305")), "1.31");
        assert_eq!(format_usd(d("12")), "12.00");
    }
}
