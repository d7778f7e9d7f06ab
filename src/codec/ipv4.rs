//! IPv4 text <-> 32-bit integer conversion.

use std::net::Ipv4Addr;

use super::unsigned_digits;
use crate::family::validate_v4;

/// Convert dotted-quad text to its network-order 32-bit value.
///
/// Returns `0` when `text` is not a valid IPv4 address. That sentinel is
/// indistinguishable from `0.0.0.0`; use [`try_ipv4_to_long`] when the
/// difference matters.
///
/// # Examples
/// ```
/// use addrkit::codec::ipv4::ipv4_to_long;
///
/// assert_eq!(ipv4_to_long("255.255.255.255"), 4294967295);
/// assert_eq!(ipv4_to_long("10.0.0.1"), 167772161);
/// assert_eq!(ipv4_to_long("nope"), 0);
/// ```
pub fn ipv4_to_long(text: &str) -> u32 {
    try_ipv4_to_long(text).unwrap_or(0)
}

/// Like [`ipv4_to_long`] but reports malformed input as `None`.
pub fn try_ipv4_to_long(text: &str) -> Option<u32> {
    if !validate_v4(text) {
        return None;
    }
    text.parse::<Ipv4Addr>().ok().map(u32::from)
}

/// Render a 32-bit value as dotted-quad text.
pub fn long_to_ipv4(value: u32) -> String {
    if value == 0 {
        return "0.0.0.0".to_string();
    }
    // Shift into the signed 32-bit range the same way a signed long2ip would
    // see it; the truncating cast recovers the low 32 bits unchanged.
    let raw_signed = i64::from(value) - (1i64 << 32);
    Ipv4Addr::from(raw_signed as u32).to_string()
}

/// Decimal text form of [`ipv4_to_long`]. `"0"` for malformed input.
pub fn ipv4_to_decimal(text: &str) -> String {
    ipv4_to_long(text).to_string()
}

/// Parse an unsigned decimal (surrounding whitespace ignored) and render it
/// as IPv4 text. `None` if it is not a number or does not fit in 32 bits.
pub fn decimal_to_ipv4(decimal: &str) -> Option<String> {
    unsigned_digits(decimal)?.parse::<u32>().ok().map(long_to_ipv4)
}
