use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fees::{
    FeeParams, DEFAULT_EVM_NATIVE_GAS_LIMIT, DEFAULT_EVM_TOKEN_GAS_LIMIT,
    DEFAULT_UTXO_TX_SIZE_BYTES,
};

pub const CONFIG_FILE: &str = "vault-fees.yaml";
pub const ENV_PREFIX: &str = "VAULT_FEES_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Assumed UTXO transaction size in bytes
    pub utxo_tx_size_bytes: u64,

    /// Gas limit for native EVM transfers
    pub evm_native_gas_limit: u64,

    /// Gas limit for EVM token transfers
    pub evm_token_gas_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            utxo_tx_size_bytes: DEFAULT_UTXO_TX_SIZE_BYTES,
            evm_native_gas_limit: DEFAULT_EVM_NATIVE_GAS_LIMIT,
            evm_token_gas_limit: DEFAULT_EVM_TOKEN_GAS_LIMIT,
        }
    }
}

impl Config {
    /// Defaults, then `vault-fees.yaml`, then `VAULT_FEES_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("utxo_tx_size_bytes", self.utxo_tx_size_bytes),
            ("evm_native_gas_limit", self.evm_native_gas_limit),
            ("evm_token_gas_limit", self.evm_token_gas_limit),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be positive", name)));
            }
        }
        Ok(())
    }
}

impl From<&Config> for FeeParams {
    fn from(config: &Config) -> Self {
        Self {
            utxo_tx_size_bytes: config.utxo_tx_size_bytes,
            evm_native_gas_limit: config.evm_native_gas_limit,
            evm_token_gas_limit: config.evm_token_gas_limit,
        }
    }
}
