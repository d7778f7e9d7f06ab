//! # Addrkit - IP address helpers
//!
//! Validation, family detection and lossless conversion of IPv4/IPv6
//! addresses between text, big-endian bit strings and integers, plus
//! discovery of locally configured IPv4 addresses from `ifconfig` output.
//!
//! ## Modules
//!
//! - `family`: validation and IPv4/IPv6 detection
//! - `codec`: text <-> integer <-> bit string conversion
//! - `scanner`: `ifconfig` output parsing and the command boundary
//! - `config`: scanner configuration loaded from YAML
//!
//! ## Example Usage
//!
//! ```rust
//! use addrkit::codec::{address_to_bits, bits_to_address, ipv4_to_long, long_to_ipv6};
//! use addrkit::family::{detect_family, AddressFamily};
//!
//! assert_eq!(detect_family("10.0.0.1"), Some(AddressFamily::V4));
//! assert_eq!(ipv4_to_long("10.0.0.1"), 167772161);
//! assert_eq!(long_to_ipv6(1), "::1");
//!
//! let bits = address_to_bits("2001:db8::1").unwrap();
//! assert_eq!(bits_to_address(&bits).as_deref(), Some("2001:db8::1"));
//! ```
//!
//! ## Error Handling
//!
//! Malformed addresses, integers and bit strings are data, not errors: the
//! codec answers with `0`, `false` or `None`. Only caller mistakes, such as
//! an unknown family selector passed to [`family::validate`], and failures of
//! the external listing command are reported as `Err`.

pub mod codec;
pub mod config;
pub mod family;
pub mod scanner;

pub use family::{detect_family, validate, AddressFamily, FamilyError, FamilySelector};
pub use scanner::{scan_local_ipv4, InterfaceScanner, ScanError};
