//! en-US number, currency and percent formatting
//!
//! Values are rounded half away from zero on their shortest round-trip
//! decimal form, so `1.005` with two fraction digits gives `1.01` even
//! though the nearest double is slightly below it. Non-finite input
//! formats as zero.

/// Upper bound on fraction digits, larger requests are clamped.
pub const MAX_FRACTION_DIGITS: u8 = 20;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Overrides for the per-helper fraction digit defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    /// Fixed number of fraction digits
    pub fn fixed(digits: u8) -> Self {
        Self {
            minimum_fraction_digits: Some(digits),
            maximum_fraction_digits: Some(digits),
            ..Self::default()
        }
    }

    /// Resolve (min, max) against defaults. An explicit minimum above the
    /// maximum raises the maximum to match.
    fn digits(&self, default_min: u8, default_max: u8) -> (usize, usize) {
        let max = self.maximum_fraction_digits.unwrap_or(default_max);
        let min = self
            .minimum_fraction_digits
            .unwrap_or_else(|| default_min.min(max));
        let min = min.min(MAX_FRACTION_DIGITS);
        let max = max.max(min).min(MAX_FRACTION_DIGITS);
        (min as usize, max as usize)
    }
}

/// Format a plain number: at most 2 fraction digits, grouped thousands
pub fn format_number(value: f64, options: Option<NumberFormatOptions>) -> String {
    let options = options.unwrap_or_default();
    let (min, max) = options.digits(0, 2);
    format_decimal(finite_or_zero(value), min, max, options.use_grouping)
}

/// Format a currency amount like `-$1,234.50`.
///
/// `currency` is an ISO 4217 code (any case); anything that isn't three
/// ASCII letters falls back to USD.
pub fn format_currency(value: f64, currency: &str, options: Option<NumberFormatOptions>) -> String {
    let options = options.unwrap_or_default();
    let code = normalize_currency_code(currency).unwrap_or_else(|| "USD".to_string());
    let (min, max) = options.digits(minor_units(&code), 2);

    let value = finite_or_zero(value);
    let body = format_decimal(value.abs(), min, max, options.use_grouping);
    let sign = if value.is_sign_negative() { "-" } else { "" };

    match symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{}{}{}", sign, code, NO_BREAK_SPACE, body),
    }
}

/// Format a ratio in `[0, 1]` as a percent, e.g. `0.256` -> `26%`.
/// Ratios outside the range are clamped.
pub fn to_percent(ratio: f64, fraction_digits: u8) -> String {
    let ratio = finite_or_zero(ratio).clamp(0.0, 1.0);
    let max = fraction_digits.min(MAX_FRACTION_DIGITS) as usize;

    // Scale by 100 on the decimal digits, not the double
    let repr = ratio.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let frac_padded = format!("{:0<2}", frac_part);
    let (shifted, rest) = frac_padded.split_at(2);
    let scaled_int = format!("{}{}", int_part, shifted);
    let scaled_int = match scaled_int.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let (int_digits, frac_digits) = round_digits(scaled_int, rest, max);
    format!("{}%", assemble(false, int_digits, frac_digits, 0, true))
}

/// Uppercase a three-letter currency code, or `None` if it isn't one
pub fn normalize_currency_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// ISO 4217 minor units for the codes that don't use 2
fn minor_units(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "UGX" | "XAF" | "XOF" | "PYG" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" | "IQD" | "LYD" => 3,
        _ => 2,
    }
}

/// Symbols as rendered in the en-US locale
fn symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "ILS" => "₪",
        "VND" => "₫",
        "TWD" => "NT$",
        "PHP" => "₱",
        _ => return None,
    };
    Some(symbol)
}

/// Render `value` with between `min` and `max` fraction digits.
/// Negative values keep their sign even when they round to zero.
fn format_decimal(value: f64, min: usize, max: usize, grouping: bool) -> String {
    // f64 Display never uses exponent notation and gives the shortest
    // representation that round-trips
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let (int_digits, frac_digits) = round_digits(int_part, frac_part, max);
    assemble(value.is_sign_negative(), int_digits, frac_digits, min, grouping)
}

fn assemble(
    negative: bool,
    int_digits: String,
    mut frac_digits: String,
    min: usize,
    grouping: bool,
) -> String {
    while frac_digits.len() > min && frac_digits.ends_with('0') {
        frac_digits.pop();
    }
    while frac_digits.len() < min {
        frac_digits.push('0');
    }

    let int_part = if grouping {
        group_thousands(&int_digits)
    } else {
        int_digits
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part);
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(&frac_digits);
    }
    out
}

/// Round the decimal `int_part.frac_part` half away from zero to `max`
/// fraction digits, returning the integer and fraction digit strings.
fn round_digits(int_part: &str, frac_part: &str, max: usize) -> (String, String) {
    if frac_part.len() <= max {
        return (int_part.to_string(), frac_part.to_string());
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(max))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes()[max] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - max;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
