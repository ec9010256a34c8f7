use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use synapse_utils::config::{self, Config, ContractAddresses};
use synapse_utils::output::{self, NumberFormatOptions};
use synapse_utils::{address, diagnostics, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NEGATIVE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum AddressCommand {
    /// Check whether a value is a hex address and whether it is the zero address
    Check { address: String },
    /// Shorten an address for display (0x1234...abcd)
    Short {
        address: String,
        /// Characters kept from the front (defaults to config, then 6)
        #[arg(long)]
        leading: Option<usize>,
        /// Characters kept from the back (defaults to config, then 4)
        #[arg(long)]
        trailing: Option<usize>,
    },
    /// Compare two addresses ignoring case
    Eq { a: String, b: String },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Address validation and display helpers
    #[command(subcommand)]
    Address(AddressCommand),
    /// Classify a credit score into its tier
    #[command(allow_negative_numbers = true)]
    Score { value: f64 },
    /// Format a number (en-US grouping, at most 2 fraction digits)
    #[command(allow_negative_numbers = true)]
    Number {
        value: f64,
        #[arg(long)]
        min_digits: Option<u8>,
        #[arg(long)]
        max_digits: Option<u8>,
        #[arg(long)]
        no_grouping: bool,
    },
    /// Format a currency amount
    #[command(allow_negative_numbers = true)]
    Currency {
        value: f64,
        /// ISO 4217 code (defaults to config, then USD)
        #[arg(long)]
        code: Option<String>,
    },
    /// Format a 0..1 ratio as a percent
    #[command(allow_negative_numbers = true)]
    Percent {
        ratio: f64,
        /// Maximum fraction digits (defaults to config, then 0)
        #[arg(long)]
        digits: Option<u8>,
    },
    /// Format a unix timestamp (seconds) in the local time zone
    #[command(allow_negative_numbers = true)]
    Time {
        seconds: f64,
        /// Also print the time relative to now
        #[arg(long)]
        relative: bool,
    },
    /// Relative time for a duration before (or after) now, e.g. "3h", "2days"
    Ago {
        duration: String,
        /// Treat the duration as in the future
        #[arg(long)]
        ahead: bool,
    },
    /// Show the resolved contract addresses
    Contracts,
}

#[derive(Parser, Debug)]
#[command(name = "synapse-utils")]
#[command(about = "Address, credit score and number formatting helpers", long_about = None)]
#[command(version)]
struct Cli {
    /// Print diagnostic notes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/synapse-utils/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print JSON instead of text where supported
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        diagnostics::capture();
    }

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = !cli.no_color && output::should_use_colors();
    let code = run(&cli, &config, use_colors);

    if cli.verbose {
        for note in diagnostics::drain() {
            eprintln!("note: {}", note);
        }
    }

    std::process::exit(code);
}

fn run(cli: &Cli, config: &Config, use_colors: bool) -> i32 {
    match &cli.command {
        Commands::Address(cmd) => run_address(cmd, cli.json, config),
        Commands::Score { value } => {
            if cli.json {
                let tier = scoring::get_score_tier(*value);
                let json = serde_json::json!({
                    "score": scoring::clamp_score(*value),
                    "tier": tier.tier,
                    "color": tier.color,
                    "risk": tier.risk,
                    "progress": scoring::score_to_progress(*value),
                });
                println!("{}", json);
            } else {
                println!(
                    "{}  {}",
                    output::render_tier_line(*value, use_colors),
                    output::render_progress_bar(*value, 20, use_colors)
                );
            }
            EXIT_SUCCESS
        }
        Commands::Number {
            value,
            min_digits,
            max_digits,
            no_grouping,
        } => {
            let options = NumberFormatOptions {
                minimum_fraction_digits: *min_digits,
                maximum_fraction_digits: *max_digits,
                use_grouping: !no_grouping,
            };
            println!("{}", output::format_number(*value, Some(options)));
            EXIT_SUCCESS
        }
        Commands::Currency { value, code } => {
            let code = code.as_deref().unwrap_or(&config.display.currency);
            if output::normalize_currency_code(code).is_none() {
                synapse_utils::diag_note!("'{}' is not a currency code, using USD", code);
            }
            println!("{}", output::format_currency(*value, code, None));
            EXIT_SUCCESS
        }
        Commands::Percent { ratio, digits } => {
            let digits = digits.unwrap_or(config.display.percent_digits);
            println!("{}", output::to_percent(*ratio, digits));
            EXIT_SUCCESS
        }
        Commands::Time { seconds, relative } => {
            let formatted = output::format_timestamp(*seconds);
            if formatted.is_empty() {
                eprintln!("Invalid timestamp: {}", seconds);
                return EXIT_NEGATIVE;
            }
            println!("{}", formatted);
            if *relative {
                println!("{}", output::relative_time_from_seconds(*seconds));
            }
            EXIT_SUCCESS
        }
        Commands::Ago { duration, ahead } => {
            let duration = match humantime::parse_duration(duration) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Invalid duration '{}': {}", duration, e);
                    return EXIT_NEGATIVE;
                }
            };
            let now = Utc::now();
            let offset = duration.as_secs_f64();
            let now_secs = now.timestamp_millis() as f64 / 1000.0;
            let target = if *ahead {
                now_secs + offset
            } else {
                now_secs - offset
            };
            println!("{}", output::relative_time_between(target, now));
            EXIT_SUCCESS
        }
        Commands::Contracts => {
            let addresses = ContractAddresses::resolve(config, |key| std::env::var(key).ok());
            if cli.json {
                match serde_json::to_string_pretty(&addresses) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize contract addresses: {}", e);
                        return EXIT_NEGATIVE;
                    }
                }
            } else {
                print_contract("credit passport", &addresses.credit_passport);
                print_contract("synapse token", &addresses.synapse_token);
            }
            EXIT_SUCCESS
        }
    }
}

fn run_address(cmd: &AddressCommand, json: bool, config: &Config) -> i32 {
    match cmd {
        AddressCommand::Check { address: value } => {
            let valid = address::is_hex_address(value);
            let zero = address::is_zero_address(value);
            if json {
                println!("{}", serde_json::json!({ "valid": valid, "zero": zero }));
            } else if zero {
                println!("valid (zero address)");
            } else if valid {
                println!("valid");
            } else {
                println!("invalid");
            }
            if valid {
                EXIT_SUCCESS
            } else {
                EXIT_NEGATIVE
            }
        }
        AddressCommand::Short {
            address: value,
            leading,
            trailing,
        } => {
            let short = address::format_address_with(
                value,
                leading.unwrap_or(config.display.address_leading),
                trailing.unwrap_or(config.display.address_trailing),
            );
            if short.is_empty() {
                eprintln!("Not a hex address: {}", value);
                return EXIT_NEGATIVE;
            }
            println!("{}", short);
            EXIT_SUCCESS
        }
        AddressCommand::Eq { a, b } => {
            let equal = address::address_equals(Some(a.as_str()), Some(b.as_str()));
            println!("{}", equal);
            if equal {
                EXIT_SUCCESS
            } else {
                EXIT_NEGATIVE
            }
        }
    }
}

fn print_contract(label: &str, value: &str) {
    if address::is_zero_address(value) {
        println!("{:<16} {} (unset)", label, value);
    } else {
        println!("{:<16} {}", label, value);
    }
}
