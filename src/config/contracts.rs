use serde::Serialize;
use std::sync::OnceLock;

use super::schema::Config;
use crate::address::{is_hex_address, ZERO_ADDRESS};
use crate::diag_note;

pub const CREDIT_PASSPORT_ENV: &str = "CREDIT_PASSPORT_ADDRESS";
pub const SYNAPSE_TOKEN_ENV: &str = "SYNAPSE_TOKEN_ADDRESS";

/// Deployed contract addresses. Each field is always a valid hex address;
/// unset or malformed values resolve to the zero address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractAddresses {
    pub credit_passport: String,
    pub synapse_token: String,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            credit_passport: ZERO_ADDRESS.to_string(),
            synapse_token: ZERO_ADDRESS.to_string(),
        }
    }
}

impl ContractAddresses {
    /// Resolve from the process environment only
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup (environment stand-in)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(&Config::default(), lookup)
    }

    /// Resolve each address: a valid lookup value wins, then a valid
    /// config file value, then the zero address.
    pub fn resolve<F>(config: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            credit_passport: pick_address(
                CREDIT_PASSPORT_ENV,
                lookup(CREDIT_PASSPORT_ENV),
                config.contracts.credit_passport.as_deref(),
            ),
            synapse_token: pick_address(
                SYNAPSE_TOKEN_ENV,
                lookup(SYNAPSE_TOKEN_ENV),
                config.contracts.synapse_token.as_deref(),
            ),
        }
    }
}

fn pick_address(key: &str, from_env: Option<String>, from_file: Option<&str>) -> String {
    if let Some(value) = from_env.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        if is_hex_address(value) {
            return value.to_string();
        }
        diag_note!("{} is not a hex address ({:?}), ignoring it", key, value);
    }

    if let Some(value) = from_file.map(str::trim).filter(|v| !v.is_empty()) {
        if is_hex_address(value) {
            return value.to_string();
        }
        diag_note!("config value for {} is not a hex address ({:?}), ignoring it", key, value);
    }

    diag_note!("{} not configured, using zero address", key);
    ZERO_ADDRESS.to_string()
}

static CONTRACTS: OnceLock<ContractAddresses> = OnceLock::new();

/// Contract addresses read from the environment on first call and
/// cached for the lifetime of the process.
pub fn contract_addresses() -> &'static ContractAddresses {
    CONTRACTS.get_or_init(ContractAddresses::from_env)
}
