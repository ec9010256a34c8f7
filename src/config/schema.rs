use serde::{Deserialize, Serialize};

/// Config file contents (~/.config/synapse-utils/config.yaml)
///
/// Example YAML:
/// ```yaml
/// contracts:
///   credit_passport: "0x52908400098527886E0F7030069857D2E4169EE7"
/// display:
///   currency: EUR
///   percent_digits: 1
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub contracts: ContractsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Contract address fallbacks used when the environment doesn't set them
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContractsConfig {
    #[serde(default)]
    pub credit_passport: Option<String>,

    #[serde(default)]
    pub synapse_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// ISO 4217 code used by `currency` when `--code` is omitted
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Fraction digits used by `percent` when `--digits` is omitted
    #[serde(default)]
    pub percent_digits: u8,

    #[serde(default = "default_leading")]
    pub address_leading: usize,

    #[serde(default = "default_trailing")]
    pub address_trailing: usize,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_leading() -> usize {
    6
}

fn default_trailing() -> usize {
    4
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            percent_digits: 0,
            address_leading: default_leading(),
            address_trailing: default_trailing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.contracts.credit_passport.is_none());
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.display.address_leading, 6);
        assert_eq!(config.display.address_trailing, 4);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_display_parse() {
        let yaml = r#"
display:
  currency: EUR
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.display.currency, "EUR");
        assert_eq!(config.display.percent_digits, 0);
        assert_eq!(config.display.address_trailing, 4);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
contracts:
  credit_passport: "0x52908400098527886E0F7030069857D2E4169EE7"
  synapse_token: "0x8617E340B3D01FA5F11F306F4090FD50E238070D"
display:
  currency: GBP
  percent_digits: 2
  address_leading: 8
  address_trailing: 6
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            config.contracts.credit_passport.as_deref(),
            Some("0x52908400098527886E0F7030069857D2E4169EE7")
        );
        assert!(config.contracts.synapse_token.is_some());
        assert_eq!(config.display.percent_digits, 2);
        assert_eq!(config.display.address_leading, 8);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
display:
  colour: red
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.contracts.synapse_token =
            Some("0x8617E340B3D01FA5F11F306F4090FD50E238070D".to_string());
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
