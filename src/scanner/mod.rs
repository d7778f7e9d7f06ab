//! Local IPv4 discovery from `ifconfig`-style output.
//!
//! Parsing ([`parser`]) is pure and works on any text. [`InterfaceScanner`]
//! couples it to an [`InterfaceListing`] that actually produces the text,
//! normally by running the program named in [`ScannerConfig`].

pub mod command;
pub mod parser;

pub use command::{CommandListing, InterfaceListing, ScanError, StaticListing};
pub use parser::{scan_local_ipv4, scan_records, InterfaceRecord, PLACEHOLDER_NAME};

use std::collections::BTreeMap;

use log::debug;

use crate::config::ScannerConfig;

/// Runs the configured listing and parses its output.
#[derive(Debug, Clone)]
pub struct InterfaceScanner<L = CommandListing> {
    config: ScannerConfig,
    listing: L,
}

impl InterfaceScanner<CommandListing> {
    /// Scanner that executes `config.ifconfig_path` as a child process.
    pub fn from_config(config: ScannerConfig) -> Self {
        let listing = CommandListing::new(config.args.clone(), config.timeout);
        Self { config, listing }
    }
}

impl Default for InterfaceScanner<CommandListing> {
    fn default() -> Self {
        Self::from_config(ScannerConfig::default())
    }
}

impl<L: InterfaceListing> InterfaceScanner<L> {
    pub fn new(config: ScannerConfig, listing: L) -> Self {
        Self { config, listing }
    }

    /// All IPv4 addresses found in the listing, keyed by interface name.
    pub fn local_ipv4s(&self) -> Result<BTreeMap<String, String>, ScanError> {
        let raw = self.listing.run(&self.config.ifconfig_path)?;
        let ips = scan_local_ipv4(&raw);
        debug!(
            "Found {} IPv4 address(es) in {} output",
            ips.len(),
            self.config.ifconfig_path.display()
        );
        Ok(ips)
    }

    /// Address recorded for `if_name`, `None` if the listing never shows it.
    pub fn lookup_local_ipv4(&self, if_name: &str) -> Result<Option<String>, ScanError> {
        let mut ips = self.local_ipv4s()?;
        Ok(ips.remove(if_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Listing that only answers for one path, to check the configured path
    /// is the one being run.
    struct ExpectPath(PathBuf, String);

    impl InterfaceListing for ExpectPath {
        fn run(&self, path: &Path) -> Result<String, ScanError> {
            assert_eq!(path, self.0.as_path());
            Ok(self.1.clone())
        }
    }

    const IPROUTE_STYLE: &str = "\
eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 10.0.2.15  netmask 255.255.255.0  broadcast 10.0.2.255
lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        inet 127.0.0.1  netmask 255.0.0.0
";

    #[test]
    fn test_lookup_uses_configured_path() {
        let config = ScannerConfig {
            ifconfig_path: PathBuf::from("/usr/local/sbin/ifconfig"),
            ..ScannerConfig::default()
        };
        let scanner = InterfaceScanner::new(
            config,
            ExpectPath(
                PathBuf::from("/usr/local/sbin/ifconfig"),
                "lo        Link encap:Local Loopback\n  inet addr:127.0.0.1  Mask:255.0.0.0\n".to_string(),
            ),
        );
        assert_eq!(scanner.lookup_local_ipv4("lo").unwrap().as_deref(), Some("127.0.0.1"));
        assert_eq!(scanner.lookup_local_ipv4("eth0").unwrap(), None);
    }

    #[test]
    fn test_headerless_format_uses_placeholders() {
        let scanner = InterfaceScanner::new(
            ScannerConfig::default(),
            StaticListing(IPROUTE_STYLE.to_string()),
        );
        let ips = scanner.local_ipv4s().unwrap();
        assert_eq!(ips.len(), 2);
        assert_eq!(ips["interface1"], "10.0.2.15");
        assert_eq!(ips["interface3"], "127.0.0.1");
    }

    #[test]
    fn test_listing_failure_propagates() {
        let config = ScannerConfig {
            ifconfig_path: PathBuf::from("/nonexistent/addrkit-ifconfig"),
            ..ScannerConfig::default()
        };
        let scanner = InterfaceScanner::from_config(config);
        assert!(matches!(
            scanner.lookup_local_ipv4("eth0"),
            Err(ScanError::Spawn { .. })
        ));
    }
}
