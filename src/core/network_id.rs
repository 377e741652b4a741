use tracing::{debug, warn};

use super::asset_context::AssetContext;
use super::caip::{is_wildcard, network_prefix};

/// Concrete network id for the asset, or `None` when only wildcards are available.
///
/// A wildcarded `networkId` (`eip155:*`) is replaced by the network part of
/// `caip`, then of `assetId`. `None` means the caller cannot proceed; a
/// wildcard must never reach the fee endpoints.
pub fn resolve_network_id(ctx: &AssetContext) -> Option<String> {
    if !ctx.network_id.is_empty() && !is_wildcard(&ctx.network_id) {
        return Some(ctx.network_id.clone());
    }

    let from_caip = concrete_prefix(&ctx.caip);
    let resolved = from_caip.or_else(|| ctx.asset_id.as_deref().and_then(concrete_prefix));
    match &resolved {
        Some(network_id) => debug!(
            wildcard = %ctx.network_id,
            %network_id,
            "resolved wildcard network id from asset id"
        ),
        None => warn!(
            network_id = %ctx.network_id,
            caip = %ctx.caip,
            "unable to resolve a concrete network id"
        ),
    }
    resolved
}

fn concrete_prefix(asset_id: &str) -> Option<String> {
    let prefix = network_prefix(asset_id);
    if prefix.is_empty() || is_wildcard(prefix) {
        None
    } else {
        Some(prefix.to_string())
    }
}
