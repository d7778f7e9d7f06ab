//! Address text <-> big-endian bit string conversion.
//!
//! The two families are not symmetric. IPv4 addresses become the plain binary
//! rendering of their 32-bit value with no left padding, while IPv6 addresses
//! always become exactly 128 characters. In the other direction the family is
//! chosen by length alone: up to 32 characters is IPv4, exactly 128 is IPv6,
//! anything else is rejected.

use std::net::Ipv6Addr;

use super::ipv4::{ipv4_to_long, long_to_ipv4};
use super::ipv6::{long_to_ipv6, octets_to_bits};
use crate::family::{detect_family, AddressFamily};

/// Convert an address of either family to its bit string.
///
/// # Examples
/// ```
/// use addrkit::codec::bits::address_to_bits;
///
/// assert_eq!(address_to_bits("0.0.0.5").as_deref(), Some("101"));
/// assert_eq!(address_to_bits("::").map(|b| b.len()), Some(128));
/// assert_eq!(address_to_bits("localhost"), None);
/// ```
pub fn address_to_bits(text: &str) -> Option<String> {
    match detect_family(text)? {
        AddressFamily::V4 => Some(format!("{:b}", ipv4_to_long(text))),
        AddressFamily::V6 => {
            let addr = text.parse::<Ipv6Addr>().ok()?;
            Some(octets_to_bits(&addr.octets()))
        }
    }
}

/// Convert a bit string back to address text, dispatching on its length.
pub fn bits_to_address(bits: &str) -> Option<String> {
    if !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let len = bits.len();
    if len <= AddressFamily::V4.bit_width() {
        return u32::from_str_radix(bits, 2).ok().map(long_to_ipv4);
    }
    if len != AddressFamily::V6.bit_width() {
        return None;
    }
    u128::from_str_radix(bits, 2).ok().map(long_to_ipv6)
}
