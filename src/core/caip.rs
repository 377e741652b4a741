//! CAIP-2 network ids and CAIP-19 asset ids.
//!
//! Only the structure needed for fee and unit decisions is parsed: the
//! namespace/reference split of the network and the asset namespace.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const WILDCARD: char = '*';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaipError {
    #[error("Invalid CAIP-2 network id: {0}")]
    InvalidChainId(String),

    #[error("Invalid CAIP-19 asset id: {0}")]
    InvalidAssetId(String),
}

pub fn is_wildcard(id: &str) -> bool {
    id.contains(WILDCARD)
}

/// Network part of a CAIP-19 id: everything before the first `/`.
pub fn network_prefix(asset_id: &str) -> &str {
    asset_id.split('/').next().unwrap_or_default()
}

/// `namespace:reference`, e.g. `eip155:1` or `cosmos:cosmoshub-4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    pub namespace: String,
    pub reference: String,
}

impl FromStr for ChainId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| CaipError::InvalidChainId(s.to_string()))?;
        if namespace.is_empty() || reference.is_empty() || reference.contains('/') {
            return Err(CaipError::InvalidChainId(s.to_string()));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            reference: reference.to_string(),
        })
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

/// `chain_id/asset_namespace:asset_reference`, e.g. `eip155:1/erc20:0xa0b8...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId {
    pub chain_id: ChainId,
    pub asset_namespace: String,
    pub asset_reference: String,
}

impl AssetId {
    /// Token standards pay fees in the chain's native coin; `slip44` is the native coin itself.
    pub fn is_token(&self) -> bool {
        !matches!(self.asset_namespace.as_str(), "slip44" | "native")
    }
}

impl FromStr for AssetId {
    type Err = CaipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CaipError::InvalidAssetId(s.to_string());
        let (chain, asset) = s.split_once('/').ok_or_else(invalid)?;
        let chain_id = chain.parse::<ChainId>().map_err(|_| invalid())?;
        let (asset_namespace, asset_reference) = asset.split_once(':').ok_or_else(invalid)?;
        if asset_namespace.is_empty() || asset_reference.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            chain_id,
            asset_namespace: asset_namespace.to_string(),
            asset_reference: asset_reference.to_string(),
        })
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}:{}",
            self.chain_id, self.asset_namespace, self.asset_reference
        )
    }
}
