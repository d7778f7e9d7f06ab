//! IPv6 text <-> 128-bit integer conversion.
//!
//! Values are carried as `u128`. The text side goes through a 128-character
//! bit string so that both directions share the layout used by
//! [`crate::codec::bits`].

use std::net::Ipv6Addr;

use super::unsigned_digits;
use crate::family::{validate_v6, AddressFamily};

const GROUP_BITS: usize = 16;

/// Expand raw address bytes into a big-endian `'0'`/`'1'` string, eight
/// characters per byte.
pub(crate) fn octets_to_bits(octets: &[u8]) -> String {
    octets.iter().map(|byte| format!("{:08b}", byte)).collect()
}

/// Convert IPv6 text to its 128-bit value. `0` when `text` is not a valid
/// IPv6 address.
///
/// # Examples
/// ```
/// use addrkit::codec::ipv6::ipv6_to_long;
///
/// assert_eq!(ipv6_to_long("::1"), 1);
/// assert_eq!(ipv6_to_long("1.2.3.4"), 0);
/// ```
pub fn ipv6_to_long(text: &str) -> u128 {
    try_ipv6_to_long(text).unwrap_or(0)
}

/// Like [`ipv6_to_long`] but reports malformed input as `None`.
pub fn try_ipv6_to_long(text: &str) -> Option<u128> {
    if !validate_v6(text) {
        return None;
    }
    let addr = text.parse::<Ipv6Addr>().ok()?;
    let bits = octets_to_bits(&addr.octets());
    u128::from_str_radix(&bits, 2).ok()
}

/// Render a 128-bit value as canonical (compressed, lowercase) IPv6 text.
pub fn long_to_ipv6(value: u128) -> String {
    let bits = format!("{:0width$b}", value, width = AddressFamily::V6.bit_width());
    let expanded = bits
        .as_bytes()
        .chunks(GROUP_BITS)
        .map(|group| {
            let word = group
                .iter()
                .fold(0u16, |acc, bit| (acc << 1) | u16::from(*bit == b'1'));
            format!("{:x}", word)
        })
        .collect::<Vec<_>>()
        .join(":");

    // Eight explicit groups always parse; re-rendering compresses zero runs.
    match expanded.parse::<Ipv6Addr>() {
        Ok(addr) => addr.to_string(),
        Err(_) => expanded,
    }
}

/// Decimal text form of [`ipv6_to_long`]. `"0"` for malformed input.
pub fn ipv6_to_decimal(text: &str) -> String {
    ipv6_to_long(text).to_string()
}

/// Parse an unsigned decimal (surrounding whitespace ignored) and render it
/// as IPv6 text. `None` if it is not a number or is `>= 2^128`.
pub fn decimal_to_ipv6(decimal: &str) -> Option<String> {
    unsigned_digits(decimal)?.parse::<u128>().ok().map(long_to_ipv6)
}
