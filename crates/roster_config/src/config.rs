//! Configuration for tabular source loading.

use crate::{ConfigError, Result};
use roster_core::SourceFormat;
use serde::{Deserialize, Serialize};

/// Default byte ceiling for a source, checked before parsing.
pub const DEFAULT_MAX_BYTES: u64 = 1_000_000;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`LoaderConfig::max_bytes`].
pub const ENV_MAX_BYTES: &str = "ROSTER_MAX_BYTES";

/// Environment variable overriding [`LoaderConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "ROSTER_TIMEOUT_SECS";

/// Environment variable overriding [`LoaderConfig::sheet`].
pub const ENV_SHEET: &str = "ROSTER_SHEET";

/// Settings for fetching and parsing a tabular source.
///
/// Every field has a default, so an empty config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Maximum source size in bytes; larger sources are rejected
    pub max_bytes: u64,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Format override; detected from the source extension when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,

    /// Spreadsheet sheet to read; the first sheet when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,

    /// CSV field delimiter
    pub delimiter: char,

    /// User agent sent with HTTP requests
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            format: None,
            sheet: None,
            delimiter: ',',
            user_agent: concat!("roster/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LoaderConfig {
    /// Creates a new builder for `LoaderConfig`.
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_bytes == 0 {
            return Err(ConfigError::invalid_value(
                "max_bytes",
                "must be greater than zero",
            ));
        }

        if !self.delimiter.is_ascii() {
            return Err(ConfigError::invalid_value(
                "delimiter",
                format!("'{}' is not an ASCII character", self.delimiter),
            ));
        }

        Ok(())
    }

    /// Returns the CSV delimiter as a byte.
    pub fn delimiter_byte(&self) -> u8 {
        // `validate` guarantees ASCII; fall back to a comma otherwise.
        u8::try_from(self.delimiter).unwrap_or(b',')
    }

    /// Applies `ROSTER_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a key lookup, using the `ROSTER_*` keys.
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_BYTES) {
            self.max_bytes = parse_u64(ENV_MAX_BYTES, &raw)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_u64(ENV_TIMEOUT_SECS, &raw)?;
        }

        if let Some(sheet) = lookup(ENV_SHEET).filter(|s| !s.is_empty()) {
            self.sheet = Some(sheet);
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid_value(key, format!("'{raw}' is not a whole number")))
}

/// Builder for `LoaderConfig`.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Sets the byte ceiling.
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.config.max_bytes = max_bytes;
        self
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Forces the source format instead of detecting it.
    pub fn format(mut self, format: SourceFormat) -> Self {
        self.config.format = Some(format);
        self
    }

    /// Sets the spreadsheet sheet name.
    pub fn sheet(mut self, sheet: impl Into<String>) -> Self {
        self.config.sheet = Some(sheet.into());
        self
    }

    /// Sets the CSV delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Sets the HTTP user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<LoaderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
