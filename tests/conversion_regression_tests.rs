#[cfg(test)]
mod conversion_regression_tests {
    use std::net::Ipv6Addr;
    use std::path::Path;

    use addrkit::codec::{
        address_to_bits, bits_to_address, decimal_to_ipv4, decimal_to_ipv6, ipv4_to_decimal,
        ipv4_to_long, ipv6_to_decimal, ipv6_to_long, long_to_ipv4, long_to_ipv6,
    };
    use addrkit::config::ScannerConfig;
    use addrkit::family::{detect_family, validate, AddressFamily, FamilyError};
    use addrkit::scanner::{
        scan_local_ipv4, InterfaceListing, InterfaceScanner, ScanError, StaticListing,
    };

    const IPV4_SAMPLES: &[&str] = &[
        "0.0.0.0",
        "0.0.0.1",
        "1.2.3.4",
        "10.0.0.1",
        "127.0.0.1",
        "128.0.0.0",
        "192.168.1.5",
        "255.255.255.254",
        "255.255.255.255",
    ];

    const IPV6_SAMPLES: &[&str] = &[
        "::",
        "::1",
        "fe80::1",
        "FE80:0000:0000:0000:0202:B3FF:FE1E:8329",
        "2001:db8:0:0:1:0:0:1",
        "2001:0db8:85a3::8a2e:0370:7334",
        "::ffff:10.0.0.1",
        "1::",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    ];

    fn canonical_v6(text: &str) -> String {
        text.parse::<Ipv6Addr>().unwrap().to_string()
    }

    /// Integer round trip gives back IPv4 text verbatim and IPv6 text in
    /// canonical form
    #[test]
    fn test_integer_round_trip() {
        for text in IPV4_SAMPLES {
            assert_eq!(long_to_ipv4(ipv4_to_long(text)), *text);
            assert_eq!(decimal_to_ipv4(&ipv4_to_decimal(text)).as_deref(), Some(*text));
        }
        for text in IPV6_SAMPLES {
            assert_eq!(long_to_ipv6(ipv6_to_long(text)), canonical_v6(text));
            assert_eq!(
                decimal_to_ipv6(&ipv6_to_decimal(text)),
                Some(canonical_v6(text))
            );
        }
    }

    #[test]
    fn test_bits_round_trip() {
        for text in IPV4_SAMPLES {
            let bits = address_to_bits(text).unwrap();
            assert!(bits.len() <= 32);
            assert_eq!(bits_to_address(&bits).as_deref(), Some(*text));
        }
        for text in IPV6_SAMPLES {
            let bits = address_to_bits(text).unwrap();
            assert_eq!(bits.len(), 128);
            assert_eq!(bits_to_address(&bits), Some(canonical_v6(text)));
        }
    }

    #[test]
    fn test_ipv4_boundaries() {
        assert_eq!(decimal_to_ipv4("0").as_deref(), Some("0.0.0.0"));
        assert_eq!(decimal_to_ipv4("4294967295").as_deref(), Some("255.255.255.255"));
        assert_eq!(decimal_to_ipv4("4294967296"), None);
    }

    #[test]
    fn test_bit_string_lengths() {
        assert_eq!(bits_to_address(&"0".repeat(128)).as_deref(), Some("::"));
        for len in 33..=127 {
            assert_eq!(bits_to_address(&"1".repeat(len)), None, "length {}", len);
        }
        assert_eq!(bits_to_address(&"0".repeat(129)), None);
        // A zero-padded 32-bit string stays IPv4
        assert_eq!(bits_to_address(&"0".repeat(32)).as_deref(), Some("0.0.0.0"));
    }

    #[test]
    fn test_classification_is_total() {
        let inputs = [
            "", " ", "1.1.1.1", "::", "1.1.1", "1.1.1.1.1", "::g", "localhost",
            "2001:db8::/32", "0x7f000001", "१.१.१.१", "::ffff:1.2.3.4", "-1",
        ];
        for text in inputs {
            let family = detect_family(text);
            match family {
                Some(AddressFamily::V4) => assert_eq!(validate(text, "v4"), Ok(true)),
                Some(AddressFamily::V6) => assert_eq!(validate(text, "v6"), Ok(true)),
                None => assert_eq!(validate(text, "all"), Ok(false)),
            }
        }
    }

    #[test]
    fn test_bad_selector_is_loud_bad_data_is_quiet() {
        for text in ["1.2.3.4", "::1", "junk"] {
            assert_eq!(
                validate(text, "bogus"),
                Err(FamilyError::UnknownSelector("bogus".to_string()))
            );
        }
        assert_eq!(ipv4_to_long("junk"), 0);
        assert_eq!(ipv6_to_long("junk"), 0);
        assert_eq!(address_to_bits("junk"), None);
        assert_eq!(bits_to_address("junk"), None);
        assert_eq!(decimal_to_ipv4("junk"), None);
        assert_eq!(validate("junk", "v4"), Ok(false));
    }

    #[test]
    fn test_scan_net_tools_header() {
        let ips = scan_local_ipv4(
            "eth0      Link encap:Ethernet\n          inet addr:192.168.1.5  Bcast:...\n",
        );
        assert_eq!(ips.len(), 1);
        assert_eq!(ips["eth0"], "192.168.1.5");
    }

    #[test]
    fn test_scan_without_header_keeps_both_entries() {
        let ips = scan_local_ipv4("inet 10.0.0.1 netmask 255.0.0.0\ninet 10.0.0.1 netmask 255.0.0.0\n");
        assert_eq!(ips.len(), 2);
        assert_eq!(ips["interface0"], "10.0.0.1");
        assert_eq!(ips["interface1"], "10.0.0.1");
    }

    struct FailingListing;

    impl InterfaceListing for FailingListing {
        fn run(&self, path: &Path) -> Result<String, ScanError> {
            Err(ScanError::NonUtf8 {
                path: path.to_path_buf(),
            })
        }
    }

    #[test]
    fn test_lookup_through_injected_listing() {
        let scanner = InterfaceScanner::new(
            ScannerConfig::default(),
            StaticListing(
                "eth0      Link encap:Ethernet\n  inet addr:192.168.1.5  Mask:255.255.255.0\n"
                    .to_string(),
            ),
        );
        assert_eq!(scanner.lookup_local_ipv4("eth0").unwrap().as_deref(), Some("192.168.1.5"));
        assert_eq!(scanner.lookup_local_ipv4("wlan0").unwrap(), None);

        let broken = InterfaceScanner::new(ScannerConfig::default(), FailingListing);
        assert!(broken.lookup_local_ipv4("eth0").is_err());
    }
}
