//! End-to-end checks over SDK-shaped payloads, the way the Send screen uses the crate.

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use vault_fees::core::{resolve_network_id, to_base_units, AssetContext, UnitBasis};
    use vault_fees::fees::{
        max_sendable, usd_to_native, FeeCalculator, FeeContext, FeeError, FeeLevel, FeeQuote,
        NetworkClass, TransferKind,
    };

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn usdc_on_polygon() -> AssetContext {
        serde_json::from_value(json!({
            "networkId": "eip155:*",
            "caip": "eip155:137/erc20:0x3c499c542cef5e3811e1192ce70d8cc03d5c3359",
            "symbol": "USDC",
            "decimals": 6,
            "priceUsd": 1,
            "balance": "250.5"
        }))
        .unwrap()
    }

    fn eth() -> AssetContext {
        serde_json::from_value(json!({
            "networkId": "eip155:1",
            "caip": "eip155:1/slip44:60",
            "symbol": "ETH",
            "precision": 18,
            "priceUsd": "3000",
            "balance": "0.01"
        }))
        .unwrap()
    }

    #[test]
    fn test_token_send_on_wildcard_network() {
        let ctx = usdc_on_polygon();
        let network_id = resolve_network_id(&ctx).unwrap();
        assert_eq!(network_id, "eip155:137");

        let class = NetworkClass::from_network_id(&network_id);
        let fee_ctx = FeeContext::from_asset_context(&ctx);
        assert_eq!(fee_ctx.transfer, TransferKind::Token);

        let quote: FeeQuote = serde_json::from_value(json!({
            "slow": { "value": "30", "unit": "gwei" },
            "average": { "value": "40", "unit": "gwei" },
            "fastest": { "value": "60", "unit": "gwei" }
        }))
        .unwrap();
        let fees = FeeCalculator::default()
            .estimate_all(class, &quote, &fee_ctx)
            .unwrap();
        assert_eq!(fees.get(FeeLevel::Average).native, d("0.0026"));

        let raw = to_base_units("12.345678", Some(&ctx), UnitBasis::Asset).unwrap();
        assert_eq!(raw, 12_345_678);
        assert_eq!(
            max_sendable(&ctx, fees.average.native, TransferKind::Token).unwrap(),
            d("250.5")
        );
    }

    #[test]
    fn test_native_max_sendable_subtracts_fee() {
        let ctx = eth();
        assert_eq!(
            max_sendable(&ctx, d("0.00042"), TransferKind::Native).unwrap(),
            d("0.00958")
        );
        assert_eq!(
            max_sendable(&ctx, d("0.02"), TransferKind::Native).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_max_sendable_bad_balance() {
        let ctx = eth().with_balance("lots");
        let err = max_sendable(&ctx, d("0.001"), TransferKind::Native).unwrap_err();
        assert!(matches!(err, FeeError::Conversion(_)));
    }

    #[test]
    fn test_usd_to_native_rounds_down_to_precision() {
        assert_eq!(
            usd_to_native(d("100"), &eth()).unwrap(),
            d("0.033333333333333333")
        );

        let btc = AssetContext::new(
            "bip122:000000000019d6689c085ae165831e93",
            "bip122:000000000019d6689c085ae165831e93/slip44:0",
        )
        .with_decimals(8)
        .with_price_usd(d("64000"));
        assert_eq!(usd_to_native(d("100"), &btc).unwrap(), d("0.0015625"));
    }

    #[test]
    fn test_usd_to_native_needs_price() {
        let mut ctx = eth();
        ctx.price_usd = None;
        assert_eq!(usd_to_native(d("10"), &ctx), Err(FeeError::PriceUnavailable));

        ctx.price_usd = Some(Decimal::ZERO);
        assert_eq!(usd_to_native(d("10"), &ctx), Err(FeeError::PriceUnavailable));
    }

    #[test]
    fn test_usd_to_native_needs_precision() {
        let ctx = AssetContext::new("eip155:1", "eip155:1/slip44:60").with_price_usd(d("3000"));
        assert!(matches!(
            usd_to_native(d("10"), &ctx),
            Err(FeeError::Conversion(_))
        ));
    }

    #[test]
    fn test_thorchain_swap_amount() {
        // 18-decimal ETH still goes over the wire with 8 digits
        let ctx = eth();
        assert_eq!(
            to_base_units("0.123456789", Some(&ctx), UnitBasis::Thorchain).unwrap(),
            12_345_678
        );
        assert_eq!(
            to_base_units("0.123456789", Some(&ctx), UnitBasis::Asset).unwrap(),
            123_456_789_000_000_000
        );
    }
}
