//! Lossless conversion between address text, bit strings and integers.
//!
//! Malformed input never produces an error here. Each function degrades to
//! the sentinel that fits its return type (`0`, `"0"` or `None`).

pub mod bits;
pub mod ipv4;
pub mod ipv6;

pub use bits::{address_to_bits, bits_to_address};
pub use ipv4::{decimal_to_ipv4, ipv4_to_decimal, ipv4_to_long, long_to_ipv4, try_ipv4_to_long};
pub use ipv6::{decimal_to_ipv6, ipv6_to_decimal, ipv6_to_long, long_to_ipv6, try_ipv6_to_long};

use crate::family::{detect_family, AddressFamily};

/// Trimmed `decimal` if it is a non-empty run of ASCII digits. Rejects the
/// sign prefixes that integer `FromStr` would otherwise accept.
pub(crate) fn unsigned_digits(decimal: &str) -> Option<&str> {
    let digits = decimal.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

/// Decimal integer value of an address of either family, `"0"` if `text`
/// is neither.
pub fn address_to_decimal(text: &str) -> String {
    match detect_family(text) {
        Some(AddressFamily::V4) => ipv4_to_decimal(text),
        Some(AddressFamily::V6) => ipv6_to_decimal(text),
        None => "0".to_string(),
    }
}

/// Render a decimal integer as an address of `family`.
pub fn decimal_to_address(decimal: &str, family: AddressFamily) -> Option<String> {
    match family {
        AddressFamily::V4 => decimal_to_ipv4(decimal),
        AddressFamily::V6 => decimal_to_ipv6(decimal),
    }
}
