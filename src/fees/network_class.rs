use std::fmt;

use crate::core::caip::{network_prefix, ChainId};

/// How a network's fee quote is interpreted. Derived once from the CAIP-2 namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    /// `bip122:*`, fees quoted in sat/byte.
    Utxo,
    /// `eip155:*`, fees quoted as a gas price.
    Evm,
    /// `cosmos:*`, flat fee in the native unit.
    Tendermint,
    /// Ripple and anything else, flat fee in the native unit.
    Other,
}

impl NetworkClass {
    pub fn from_namespace(namespace: &str) -> Self {
        match namespace {
            "bip122" => NetworkClass::Utxo,
            "eip155" => NetworkClass::Evm,
            "cosmos" => NetworkClass::Tendermint,
            _ => NetworkClass::Other,
        }
    }

    /// Accepts a network id or a full asset id.
    pub fn from_network_id(id: &str) -> Self {
        let network = network_prefix(id);
        match network.parse::<ChainId>() {
            Ok(chain) => Self::from_namespace(&chain.namespace),
            Err(_) => NetworkClass::Other,
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkClass::Utxo => "UTXO",
            NetworkClass::Evm => "EVM",
            NetworkClass::Tendermint => "TENDERMINT",
            NetworkClass::Other => "OTHER",
        };
        f.write_str(name)
    }
}
