//! Source loader orchestration.

use crate::{Result, Source, fetch, parser_for};
use roster_config::LoaderConfig;
use roster_core::{Dataset, SourceFormat};
use tracing::info;

/// A source that has been fetched and parsed.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    /// Where the data came from
    pub source: Source,
    /// Format the bytes were parsed as
    pub format: SourceFormat,
    /// Size of the raw source in bytes
    pub size: u64,
    /// Parsed rows and header
    pub dataset: Dataset,
}

/// Fetches tabular sources and parses them into datasets.
///
/// # Example
///
/// ```no_run
/// use roster_config::LoaderConfig;
/// use roster_loader::Loader;
///
/// # async fn example() -> Result<(), roster_loader::LoadError> {
/// let loader = Loader::new(LoaderConfig::default());
/// let loaded = loader.load("https://example.com/people.csv").await?;
/// println!("Loaded {} records", loaded.dataset.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Decides how a source will be parsed.
    ///
    /// A configured format wins; otherwise the extension decides, and
    /// unknown extensions are read as CSV.
    pub fn resolve_format(&self, source: &Source) -> SourceFormat {
        self.config
            .format
            .or_else(|| {
                source
                    .extension()
                    .and_then(|ext| SourceFormat::from_extension(&ext))
            })
            .unwrap_or(SourceFormat::Csv)
    }

    /// Fetches and parses the source at `location`.
    pub async fn load(&self, location: &str) -> Result<LoadedSource> {
        let source = Source::parse(location);
        let format = self.resolve_format(&source);
        info!("Loading {} source: {}", format, source);

        let bytes = fetch(&source, &self.config).await?;
        let size = bytes.len() as u64;

        let dataset = self.parse(bytes, format)?;
        info!(
            "Loaded {} records with {} columns ({} bytes)",
            dataset.len(),
            dataset.header().len(),
            size
        );

        Ok(LoadedSource {
            source,
            format,
            size,
            dataset,
        })
    }

    /// Parses already fetched bytes as `format`.
    pub fn parse(&self, bytes: Vec<u8>, format: SourceFormat) -> Result<Dataset> {
        parser_for(format, &self.config).parse(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_format_from_extension() {
        let loader = Loader::default();
        assert_eq!(
            loader.resolve_format(&Source::parse("people.xlsx")),
            SourceFormat::Excel
        );
        assert_eq!(
            loader.resolve_format(&Source::parse("people.csv")),
            SourceFormat::Csv
        );
        assert_eq!(
            loader.resolve_format(&Source::parse("https://example.com/export")),
            SourceFormat::Csv
        );
    }

    #[test]
    fn test_resolve_format_override() {
        let config = LoaderConfig::builder()
            .format(SourceFormat::Excel)
            .build()
            .unwrap();
        let loader = Loader::new(config);

        assert_eq!(
            loader.resolve_format(&Source::parse("people.csv")),
            SourceFormat::Excel
        );
    }
}
