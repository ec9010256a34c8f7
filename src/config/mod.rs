mod contracts;
mod schema;

pub use contracts::{
    contract_addresses, ContractAddresses, CREDIT_PASSPORT_ENV, SYNAPSE_TOKEN_ENV,
};
pub use schema::{Config, ContractsConfig, DisplayConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::address::{is_hex_address, ADDRESS_LEN};
use crate::output::{normalize_currency_code, MAX_FRACTION_DIGITS};

/// Get the config directory path (~/.config/synapse-utils/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("synapse-utils"))
}

/// Get the default config file path (~/.config/synapse-utils/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to an empty config when that file doesn't exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let default_path = get_config_path()?;
            if default_path.exists() {
                read_config(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

/// Validate a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let contracts = [
        ("credit_passport", &config.contracts.credit_passport),
        ("synapse_token", &config.contracts.synapse_token),
    ];
    for (name, value) in contracts {
        if let Some(value) = value {
            if !is_hex_address(value.trim()) {
                errors.push(format!(
                    "contracts.{}: '{}' is not a 0x-prefixed 40-digit hex address",
                    name, value
                ));
            }
        }
    }

    if normalize_currency_code(&config.display.currency).is_none() {
        errors.push(format!(
            "display.currency: '{}' is not a three-letter currency code",
            config.display.currency
        ));
    }

    if config.display.percent_digits > MAX_FRACTION_DIGITS {
        errors.push(format!(
            "display.percent_digits: must be at most {}",
            MAX_FRACTION_DIGITS
        ));
    }

    for (name, value) in [
        ("address_leading", config.display.address_leading),
        ("address_trailing", config.display.address_trailing),
    ] {
        if value > ADDRESS_LEN {
            errors.push(format!("display.{}: must be at most {}", name, ADDRESS_LEN));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("synapse-utils-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let path = temp_path("missing.yaml");
        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = temp_path("ok.yaml");
        fs::write(&path, "display:\n  currency: EUR\n").unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.display.currency, "EUR");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let path = temp_path("bad.yaml");
        fs::write(&path, "display: [unclosed\n").unwrap();
        let result = load_config(Some(path.clone()));
        fs::remove_file(&path).unwrap();
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("invalid YAML"));
    }

    #[test]
    fn test_valid_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_contract_address() {
        let mut config = Config::default();
        config.contracts.synapse_token = Some("0xabc".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("contracts.synapse_token"));
    }

    #[test]
    fn test_invalid_currency() {
        let mut config = Config::default();
        config.display.currency = "dollars".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("display.currency"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::default();
        config.contracts.credit_passport = Some("nope".to_string()); // Error 1
        config.display.currency = "X".to_string(); // Error 2
        config.display.percent_digits = 50; // Error 3
        config.display.address_trailing = 100; // Error 4
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
