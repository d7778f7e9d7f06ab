use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use addrkit::codec::{self, address_to_bits, bits_to_address, decimal_to_address};
use addrkit::config::{self, ScannerConfig};
use addrkit::family::{self, detect_family, AddressFamily};
use addrkit::scanner::{scan_local_ipv4, InterfaceScanner};

/// IPv4/IPv6 validation, conversion and local address discovery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to a scanner configuration YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Interface-listing program to run (overrides the config file)
    #[arg(long, global = true)]
    ifconfig: Option<PathBuf>,

    /// Kill the listing program after this long, e.g. "5s"
    #[arg(long, global = true, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Check whether an address is valid
    Validate {
        address: String,
        /// Accepted family: v4, v6 or all
        #[arg(short, long, default_value = "all")]
        family: String,
    },

    /// Print the family of an address (v4, v6 or none)
    Family { address: String },

    /// Convert an address to its decimal integer value
    ToInt { address: String },

    /// Convert a decimal integer to an address
    FromInt {
        value: String,
        /// Render as IPv6 instead of IPv4
        #[arg(long)]
        v6: bool,
    },

    /// Convert an address to its big-endian bit string
    ToBits { address: String },

    /// Convert a bit string (<= 32 or exactly 128 bits) to an address
    FromBits { bits: String },

    /// List local IPv4 addresses by interface
    Scan {
        /// Parse saved listing output instead of running the program
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the IPv4 address of one interface
    Lookup { interface: String },
}

fn parse_timeout(s: &str) -> std::result::Result<Duration, String> {
    humantime_serde::re::humantime::parse_duration(s).map_err(|e| e.to_string())
}

fn load_scanner_config(args: &Args) -> Result<ScannerConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)
            .wrap_err_with(|| format!("Failed to load configuration '{}'", path.display()))?,
        None => ScannerConfig::default(),
    };
    if let Some(path) = &args.ifconfig {
        config.ifconfig_path = path.clone();
    }
    if args.timeout.is_some() {
        config.timeout = args.timeout;
    }
    config.validate()?;
    debug!("Scanner configuration: {:?}", config);
    Ok(config)
}

fn print_or_none(value: Option<String>) {
    println!("{}", value.unwrap_or_else(|| "none".to_string()));
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    let level = args.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    run(&args)
}

/// Execute one subcommand. The scanner configuration is only loaded by the
/// subcommands that run the listing program.
fn run(args: &Args) -> Result<()> {
    match &args.command {
        Commands::Validate { address, family: selector } => {
            let valid = family::validate(address, selector)?;
            println!("{}", valid);
        }
        Commands::Family { address } => {
            print_or_none(detect_family(address).map(|f| f.to_string()));
        }
        Commands::ToInt { address } => {
            println!("{}", codec::address_to_decimal(address));
        }
        Commands::FromInt { value, v6 } => {
            let family = if *v6 { AddressFamily::V6 } else { AddressFamily::V4 };
            print_or_none(decimal_to_address(value, family));
        }
        Commands::ToBits { address } => {
            print_or_none(address_to_bits(address));
        }
        Commands::FromBits { bits } => {
            print_or_none(bits_to_address(bits));
        }
        Commands::Scan { input, json } => {
            let ips = match input {
                Some(path) => {
                    info!("Parsing saved listing: {:?}", path);
                    let raw = fs::read_to_string(path)
                        .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
                    scan_local_ipv4(&raw)
                }
                None => InterfaceScanner::from_config(load_scanner_config(args)?).local_ipv4s()?,
            };
            if *json {
                println!("{}", serde_json::to_string_pretty(&ips)?);
            } else {
                for (name, address) in &ips {
                    println!("{}\t{}", name, address);
                }
            }
        }
        Commands::Lookup { interface } => {
            let scanner = InterfaceScanner::from_config(load_scanner_config(args)?);
            print_or_none(scanner.lookup_local_ipv4(interface)?);
        }
    }

    Ok(())
}
