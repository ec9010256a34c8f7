pub mod address;
pub mod config;
pub mod diagnostics;
pub mod output;
pub mod scoring;

pub use address::{
    address_equals, format_address, format_address_with, is_hex_address, is_zero_address,
    ZERO_ADDRESS,
};
pub use config::{contract_addresses, ContractAddresses};
pub use output::{
    format_currency, format_number, format_timestamp, relative_time_from_seconds, to_percent,
    NumberFormatOptions,
};
pub use scoring::{clamp_score, get_score_tier, score_to_progress, Risk, ScoreTier, Tier};
