#[cfg(test)]
mod tests {
    use vault_fees::core::{resolve_precision, AssetContext, PrecisionError};

    fn eth() -> AssetContext {
        AssetContext::new("eip155:1", "eip155:1/slip44:60").with_symbol("ETH")
    }

    #[test]
    fn test_precision_only() {
        for p in [0u8, 6, 8, 18] {
            let ctx = eth().with_precision(p);
            assert_eq!(resolve_precision(Some(&ctx)).unwrap(), p);
        }
    }

    #[test]
    fn test_zero_precision_is_not_missing() {
        let ctx = eth().with_precision(0).with_decimals(18);
        assert_eq!(resolve_precision(Some(&ctx)).unwrap(), 0);
    }

    #[test]
    fn test_precision_wins_over_decimals() {
        let ctx = eth().with_precision(8).with_decimals(18);
        assert_eq!(resolve_precision(Some(&ctx)).unwrap(), 8);
    }

    #[test]
    fn test_decimals_fallback() {
        let ctx = eth().with_decimals(18);
        assert_eq!(resolve_precision(Some(&ctx)).unwrap(), 18);
    }

    #[test]
    fn test_missing_context() {
        assert_eq!(resolve_precision(None), Err(PrecisionError::MissingContext));
    }

    #[test]
    fn test_missing_precision_and_decimals() {
        let err = resolve_precision(Some(&AssetContext::default())).unwrap_err();
        assert_eq!(err, PrecisionError::MissingPrecision(String::new()));

        let err = resolve_precision(Some(&eth())).unwrap_err();
        assert!(err.to_string().contains("eip155:1/slip44:60"), "{}", err);
    }

    #[test]
    fn test_null_fields_from_json_are_missing() {
        let ctx: AssetContext = serde_json::from_value(serde_json::json!({
            "networkId": "cosmos:cosmoshub-4",
            "caip": "cosmos:cosmoshub-4/slip44:118",
            "precision": null,
            "decimals": null
        }))
        .unwrap();
        assert!(matches!(
            resolve_precision(Some(&ctx)),
            Err(PrecisionError::MissingPrecision(_))
        ));
    }
}
