//! Address family validation and detection.
//!
//! Every conversion in [`crate::codec`] goes through this module first: a text
//! address is only ever classified by asking the standard library parsers
//! whether it is a well-formed IPv4 or IPv6 literal. No canonicalisation is
//! applied to the input.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IP address family of a text address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Width of an address of this family in bits.
    pub fn bit_width(self) -> usize {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "v4"),
            AddressFamily::V6 => write!(f, "v6"),
        }
    }
}

/// Which families a validation call accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilySelector {
    V4,
    V6,
    #[default]
    Any,
}

impl FamilySelector {
    pub fn accepts(self, family: AddressFamily) -> bool {
        match self {
            FamilySelector::V4 => family == AddressFamily::V4,
            FamilySelector::V6 => family == AddressFamily::V6,
            FamilySelector::Any => true,
        }
    }
}

impl FromStr for FamilySelector {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v4" => Ok(FamilySelector::V4),
            "v6" => Ok(FamilySelector::V6),
            "all" | "any" => Ok(FamilySelector::Any),
            other => Err(FamilyError::UnknownSelector(other.to_string())),
        }
    }
}

/// Errors raised for invalid arguments, as opposed to malformed addresses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FamilyError {
    #[error("Unknown address family selector '{0}' (expected v4, v6 or all)")]
    UnknownSelector(String),
}

/// Check whether `text` is a valid address of the family named by `selector`.
///
/// `selector` is one of `"v4"`, `"v6"` or `"all"` (`"any"` is accepted as an
/// alias). A malformed address yields `Ok(false)`; an unrecognised selector is
/// a caller bug and yields `Err`.
///
/// # Examples
/// ```
/// use addrkit::family::validate;
///
/// assert_eq!(validate("10.0.0.1", "v4"), Ok(true));
/// assert_eq!(validate("10.0.0.1", "v6"), Ok(false));
/// assert!(validate("10.0.0.1", "bogus").is_err());
/// ```
pub fn validate(text: &str, selector: &str) -> Result<bool, FamilyError> {
    let selector: FamilySelector = selector.parse()?;
    Ok(is_valid(text, selector))
}

/// Typed form of [`validate`]; cannot fail.
pub fn is_valid(text: &str, selector: FamilySelector) -> bool {
    detect_family(text).is_some_and(|family| selector.accepts(family))
}

/// Check if a string is a valid IPv4 address
pub fn validate_v4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

/// Check if a string is a valid IPv6 address
pub fn validate_v6(text: &str) -> bool {
    text.parse::<Ipv6Addr>().is_ok()
}

/// Classify `text`, trying IPv4 before IPv6. `None` means neither.
pub fn detect_family(text: &str) -> Option<AddressFamily> {
    if validate_v4(text) {
        Some(AddressFamily::V4)
    } else if validate_v6(text) {
        Some(AddressFamily::V6)
    } else {
        None
    }
}
