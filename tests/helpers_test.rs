//! Integration tests for the public helper API
//!
//! These go through the crate root re-exports the way a front-end
//! consumer would.

use synapse_utils::config::{validate_config, Config};
use synapse_utils::{
    address_equals, clamp_score, format_address, format_currency, format_number, get_score_tier,
    is_hex_address, is_zero_address, score_to_progress, to_percent, ContractAddresses, Risk, Tier,
    ZERO_ADDRESS,
};

const PASSPORT: &str = "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01";

#[test]
fn test_address_helpers_agree() {
    assert!(is_hex_address(PASSPORT));
    assert!(!is_zero_address(PASSPORT));
    assert!(address_equals(Some(PASSPORT), Some(&PASSPORT.to_uppercase().replacen("0X", "0x", 1))));
    assert_eq!(format_address(PASSPORT), "0xAbCd...Ef01");
}

#[test]
fn test_invalid_addresses_never_error() {
    let inputs = vec!["", "0x", "hello", "0x12345", "0xZZZZEf0123456789aBcDeF0123456789AbCdEf01"];

    for input in inputs {
        assert!(!is_hex_address(input), "Should reject: {}", input);
        assert!(!is_zero_address(input), "Should not be zero: {}", input);
        assert_eq!(format_address(input), "", "Should format as empty: {}", input);
    }
}

#[test]
fn test_score_tiers_across_range() {
    let cases = vec![
        (850.0, Tier::Excellent, Risk::Low),
        (800.0, Tier::Excellent, Risk::Low),
        (750.0, Tier::Good, Risk::Low),
        (650.0, Tier::Fair, Risk::Medium),
        (550.0, Tier::Poor, Risk::High),
        (450.0, Tier::VeryPoor, Risk::High),
        (-20.0, Tier::VeryPoor, Risk::High),
    ];

    for (score, tier, risk) in cases {
        let result = get_score_tier(score);
        assert_eq!(result.tier, tier, "Wrong tier for {}", score);
        assert_eq!(result.risk, risk, "Wrong risk for {}", score);
    }
}

#[test]
fn test_clamp_and_progress_stay_in_bounds() {
    for raw in [-1e9, -1.0, 0.0, 0.4, 425.0, 849.6, 851.0, 1e12, f64::NAN] {
        let clamped = clamp_score(raw);
        assert!(clamped <= 850, "clamp_score({}) = {}", raw, clamped);
        assert!(score_to_progress(raw) <= 100);
    }
}

#[test]
fn test_formatting_non_finite_defaults_to_zero() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(format_number(bad, None), "0");
        assert_eq!(format_currency(bad, "USD", None), "$0.00");
        assert_eq!(to_percent(bad, 0), "0%");
    }
}

#[test]
fn test_contracts_from_config_and_env() {
    let yaml = r#"
contracts:
  synapse_token: "0x8617E340B3D01FA5F11F306F4090FD50E238070D"
"#;
    let config: Config = serde_saphyr::from_str(yaml).unwrap();
    assert!(validate_config(&config).is_ok());

    let addresses = ContractAddresses::resolve(&config, |key| {
        (key == "CREDIT_PASSPORT_ADDRESS").then(|| PASSPORT.to_string())
    });
    assert_eq!(addresses.credit_passport, PASSPORT);
    assert_eq!(addresses.synapse_token, "0x8617E340B3D01FA5F11F306F4090FD50E238070D");

    let unset = ContractAddresses::resolve(&Config::default(), |_| None);
    assert_eq!(unset.credit_passport, ZERO_ADDRESS);
    assert_eq!(unset.synapse_token, ZERO_ADDRESS);
}
