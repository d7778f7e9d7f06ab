//! Parsing of `ifconfig` output into interface name -> IPv4 address pairs.
//!
//! Works line by line. A header line (`eth0      Link encap:Ethernet`) sets
//! the current interface name; an address line (`inet addr:10.0.0.1 ` or
//! `inet 10.0.0.1 `) records an address under that name. Everything else is
//! skipped. Extracted addresses are not re-validated.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// Name used until a header line has been seen.
pub const PLACEHOLDER_NAME: &str = "interface";

const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]\d|\d)";

/// Compiled regex patterns for ifconfig output
pub struct IfconfigPatterns {
    /// Match: "eth0      Link encap:Ethernet", "eth0:1    Link ..."
    pub header: Regex,
    /// Match: "inet addr:192.168.1.5  Bcast:..."
    pub labeled_addr: Regex,
    /// Match: "inet 10.0.0.1 netmask ..."
    pub bare_addr: Regex,
}

impl IfconfigPatterns {
    pub fn new() -> Self {
        let ipv4 = format!(r"({octet}(?:[.]{octet}){{3}})", octet = IPV4_OCTET);
        Self {
            header: Regex::new(r"^([a-z0-9]+)(:\d{1,2})?\s+Link")
                .expect("Invalid header regex"),
            labeled_addr: Regex::new(&format!(r"inet addr:{}\s", ipv4))
                .expect("Invalid labeled_addr regex"),
            bare_addr: Regex::new(&format!(r"inet {}\s", ipv4))
                .expect("Invalid bare_addr regex"),
        }
    }

    /// Interface name announced by a header line, alias suffix included.
    pub fn header_name(&self, line: &str) -> Option<String> {
        let caps = self.header.captures(line)?;
        let mut name = caps.get(1)?.as_str().to_string();
        if let Some(alias) = caps.get(2) {
            name.push_str(alias.as_str());
        }
        Some(name)
    }

    /// IPv4 address carried by an address line, labeled form first.
    pub fn address<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.labeled_addr
            .captures(line)
            .or_else(|| self.bare_addr.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for IfconfigPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Global patterns instance
pub static PATTERNS: LazyLock<IfconfigPatterns> = LazyLock::new(IfconfigPatterns::new);

/// One address observed in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Resolved key: the interface name, or `interface<N>` when no header
    /// preceded the address (N is the zero-based line index).
    pub name: String,
    pub address: String,
}

/// Every address line in `raw`, in order, with its resolved interface name.
pub fn scan_records(raw: &str) -> Vec<InterfaceRecord> {
    let mut records = Vec::new();
    let mut current = PLACEHOLDER_NAME.to_string();

    for (index, line) in raw.split('\n').enumerate() {
        if let Some(name) = PATTERNS.header_name(line) {
            current = name;
        } else if let Some(address) = PATTERNS.address(line) {
            let name = if current == PLACEHOLDER_NAME {
                format!("{}{}", PLACEHOLDER_NAME, index)
            } else {
                current.clone()
            };
            trace!("line {}: {} -> {}", index, name, address);
            records.push(InterfaceRecord {
                name,
                address: address.to_string(),
            });
        }
    }

    records
}

/// Map of interface name to IPv4 address. A later address for the same name
/// replaces an earlier one.
///
/// # Examples
/// ```
/// use addrkit::scanner::scan_local_ipv4;
///
/// let out = "eth0      Link encap:Ethernet\n          inet addr:192.168.1.5  Bcast:192.168.1.255\n";
/// let ips = scan_local_ipv4(out);
/// assert_eq!(ips.get("eth0").map(String::as_str), Some("192.168.1.5"));
/// ```
pub fn scan_local_ipv4(raw: &str) -> BTreeMap<String, String> {
    scan_records(raw)
        .into_iter()
        .map(|record| (record.name, record.address))
        .collect()
}
