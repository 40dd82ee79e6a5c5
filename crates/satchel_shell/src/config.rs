//! Shell Configuration
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables: `SATCHEL_CAPACITY`, `SATCHEL_NAME_WIDTH`
//! 2. Config file named by `SATCHEL_CONFIG`, or `satchel.toml` in the
//!    working directory if present
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! [inventory]
//! capacity = 10
//!
//! [display]
//! name_width = 7
//! prompt = "> "
//! banner = true
//! ```

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked for in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "satchel.toml";

/// Errors from config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Inventory capacity must be at least 1")]
    InvalidCapacity,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Raw TOML structure for the inventory section
#[derive(Debug, Deserialize, Default)]
struct InventoryToml {
    capacity: Option<usize>,
}

/// Raw TOML structure for the display section
#[derive(Debug, Deserialize, Default)]
struct DisplayToml {
    name_width: Option<usize>,
    prompt: Option<String>,
    banner: Option<bool>,
}

/// Root TOML structure
#[derive(Debug, Deserialize, Default)]
struct ConfigToml {
    #[serde(default)]
    inventory: InventoryToml,
    #[serde(default)]
    display: DisplayToml,
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Number of inventory slots
    pub capacity: NonZeroUsize,
    /// Column width for item names in the listing
    pub name_width: usize,
    /// Prompt printed before reading a menu choice
    pub prompt: String,
    /// Print the welcome banner on startup
    pub banner: bool,
    /// Config file the values came from, if any
    pub config_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            capacity: satchel_inventory::DEFAULT_CAPACITY,
            name_width: 7,
            prompt: "> ".to_string(),
            banner: true,
            config_path: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration from all sources
    pub fn load() -> ConfigResult<Self> {
        Self::load_from_sources(Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Load configuration from `default_file` and variables looked up by `lookup`.
    ///
    /// A file named by `SATCHEL_CONFIG` must exist; `default_file` is only
    /// read if it does. Variable overrides are applied last.
    pub fn load_from_sources(
        default_file: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let mut config = match lookup("SATCHEL_CONFIG") {
            Some(path) => Self::load_from_file(path)?,
            None if default_file.exists() => Self::load_from_file(default_file)?,
            None => {
                log::debug!("No config file, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        log::info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let raw: ConfigToml = toml::from_str(content)?;
        let defaults = Self::default();

        let capacity = match raw.inventory.capacity {
            Some(capacity) => non_zero_capacity(capacity)?,
            None => defaults.capacity,
        };

        Ok(Self {
            capacity,
            name_width: raw.display.name_width.unwrap_or(defaults.name_width),
            prompt: raw.display.prompt.unwrap_or(defaults.prompt),
            banner: raw.display.banner.unwrap_or(defaults.banner),
            config_path: None,
        })
    }

    /// Override values from environment-style variables.
    ///
    /// `lookup` returns the value of a variable, or None if it is unset.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<()> {
        if let Some(value) = lookup("SATCHEL_CAPACITY") {
            self.capacity = non_zero_capacity(parse_number("SATCHEL_CAPACITY", &value)?)?;
            log::info!("Capacity from env: {}", self.capacity);
        }

        if let Some(value) = lookup("SATCHEL_NAME_WIDTH") {
            self.name_width = parse_number("SATCHEL_NAME_WIDTH", &value)?;
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        log::info!("Shell Configuration:");
        log::info!("  Capacity: {}", self.capacity);
        log::info!("  Name width: {}", self.name_width);
        if let Some(path) = &self.config_path {
            log::info!("  Config: {}", path.display());
        }
    }
}

fn non_zero_capacity(capacity: usize) -> ConfigResult<NonZeroUsize> {
    NonZeroUsize::new(capacity).ok_or(ConfigError::InvalidCapacity)
}

fn parse_number(key: &str, value: &str) -> ConfigResult<usize> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
