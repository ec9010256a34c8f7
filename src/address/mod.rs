//! Hex address helpers
//!
//! Addresses are plain strings. Every helper accepts arbitrary input and
//! answers `false` or `""` for anything that isn't a `0x`-prefixed 20-byte
//! hex address.

/// The all-zero address, used wherever an address is unset.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub const ADDRESS_LEN: usize = 42;

/// Check for exactly `0x` followed by 40 hex digits (either case)
pub fn is_hex_address(value: &str) -> bool {
    value.len() == ADDRESS_LEN
        && value.starts_with("0x")
        && value.bytes().skip(2).all(|b| b.is_ascii_hexdigit())
}

/// Check whether a valid address is the zero address
pub fn is_zero_address(address: &str) -> bool {
    is_hex_address(address) && address.eq_ignore_ascii_case(ZERO_ADDRESS)
}

/// Compare two optional address strings ignoring ASCII case.
///
/// Missing or empty values never compare equal, not even to each other.
/// The inputs are not required to be valid addresses.
pub fn address_equals(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Shorten an address to `0x1234...abcd` (first 6, last 4 characters).
/// Returns an empty string for invalid input.
pub fn format_address(address: &str) -> String {
    format_address_with(address, 6, 4)
}

/// Shorten an address keeping `leading` characters from the front and
/// `trailing` from the back. Counts past the address length take the
/// whole address for that side.
pub fn format_address_with(address: &str, leading: usize, trailing: usize) -> String {
    if !is_hex_address(address) {
        return String::new();
    }

    // Valid addresses are pure ASCII, so byte offsets are char boundaries
    let head = &address[..leading.min(address.len())];
    let tail = &address[address.len() - trailing.min(address.len())..];
    format!("{}...{}", head, tail)
}
