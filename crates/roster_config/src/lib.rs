//! Loader configuration for Roster Check (YAML/TOML formats).
//!
//! This crate provides the [`LoaderConfig`] consumed by the source loader, and
//! functions to parse it from YAML and TOML files.
//!
//! # Example
//!
//! ```rust
//! use roster_config::parse_yaml;
//!
//! let yaml = r#"
//! max_bytes: 500000
//! timeout_secs: 10
//! format: excel
//! sheet: People
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse config");
//! assert_eq!(config.max_bytes, 500_000);
//! assert_eq!(config.sheet.as_deref(), Some("People"));
//! ```

mod config;

pub use config::*;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML content is malformed or holds an unknown setting
    #[error("Invalid YAML loader configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML content is malformed or holds an unknown setting
    #[error("Invalid TOML loader configuration: {0}")]
    Toml(String),

    /// The config file could not be read
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file name does not say whether it is YAML or TOML
    #[error("Config file {} must end in .yml, .yaml or .toml", path.display())]
    UnsupportedExtension { path: PathBuf },

    /// A setting holds an unusable value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Creates a new invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a YAML string.
pub fn parse_yaml(content: &str) -> Result<LoaderConfig> {
    let config: LoaderConfig = serde_yaml_ng::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use roster_config::parse_toml;
///
/// let toml = r#"
/// max_bytes = 2048
/// delimiter = ";"
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert_eq!(config.delimiter, ';');
/// ```
pub fn parse_toml(content: &str) -> Result<LoaderConfig> {
    let config: LoaderConfig =
        toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedExtension` when the extension is missing
/// or is neither YAML nor TOML.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        _ => Err(ConfigError::UnsupportedExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// Parse a configuration from a file with automatic format detection.
///
/// ```no_run
/// use roster_config::parse_file;
/// use std::path::{Path, PathBuf};
///
/// let config = parse_file(Path::new("roster.yml")).unwrap();
/// println!("Size limit: {} bytes", config.max_bytes);
/// ```
pub fn parse_file(path: &Path) -> Result<LoaderConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}

/// Serialize a configuration in the given format.
pub fn to_string(config: &LoaderConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Yaml => Ok(serde_yaml_ng::to_string(config)?),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::Toml(e.to_string()))
        }
    }
}
