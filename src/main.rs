use std::{env, fs, process};

use serde::Deserialize;
use tracing::{error, info};
use vault_fees::config::Config;
use vault_fees::core::format_amount_down;
use vault_fees::fees::{max_sendable, FeeLevel, FeeParams};
use vault_fees::telemetry::{get_subscriber, init_subscriber};
use vault_fees::{
    resolve_network_id, AssetContext, FeeCalculator, FeeContext, FeeQuote, NetworkClass,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Input {
    asset_context: AssetContext,
    fee_quote: FeeQuote,
}

fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    init_subscriber(get_subscriber(&config.log_level));

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: vault-fees <input.json>");
        process::exit(2);
    };
    if let Err(e) = run(&path, &config) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(path: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let input: Input = serde_json::from_str(&fs::read_to_string(path)?)?;
    let ctx = &input.asset_context;

    let network_id = resolve_network_id(ctx)
        .ok_or_else(|| format!("cannot resolve a concrete network id for {}", ctx.caip))?;
    let class = NetworkClass::from_network_id(&network_id);
    info!(%network_id, %class, symbol = %ctx.symbol, "estimating fees");

    let calculator = FeeCalculator::new(FeeParams::from(config));
    let fee_ctx = FeeContext::from_asset_context(ctx);
    let estimates = calculator.estimate_all(class, &input.fee_quote, &fee_ctx)?;

    println!("Network: {} ({})", network_id, class);
    for level in FeeLevel::ALL {
        let estimate = estimates.get(level);
        println!(
            "  {:?}: {} {} (${})",
            level,
            estimate.native_display(),
            ctx.symbol,
            estimate.usd_display()
        );
    }
    let max = max_sendable(ctx, estimates.average.native, fee_ctx.transfer)?;
    println!("Max sendable at average fee: {} {}", format_amount_down(max), ctx.symbol);
    Ok(())
}
