//! Scanner configuration and YAML loading.
//!
//! ```yaml
//! ifconfig_path: /sbin/ifconfig
//! args: ["-a"]
//! timeout: 5s
//! ```
//!
//! Every field is optional.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

/// Default location of the interface-listing program
pub const DEFAULT_IFCONFIG_PATH: &str = "/sbin/ifconfig";

/// Settings for [`crate::scanner::InterfaceScanner`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub ifconfig_path: PathBuf,
    pub args: Vec<String>,
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            ifconfig_path: PathBuf::from(DEFAULT_IFCONFIG_PATH),
            args: Vec::new(),
            timeout: None,
        }
    }
}

impl ScannerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ifconfig_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "ifconfig_path cannot be empty".to_string(),
            ));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::Invalid(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid scanner configuration: {0}")]
    Invalid(String),
}

/// Load and validate a scanner configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<ScannerConfig, ConfigError> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let config: ScannerConfig =
        serde_yaml::from_reader(file).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;

    config.validate()?;

    Ok(config)
}
