pub mod check;
pub mod init;
pub mod validate;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use roster_config::{LoaderConfig, parse_file};
use roster_core::SourceFormat;
use roster_loader::{LoadedSource, Loader, Source};
use std::path::PathBuf;
use tracing::{debug, info};

/// Source format accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Excel,
}

impl From<FormatArg> for SourceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => SourceFormat::Csv,
            FormatArg::Excel => SourceFormat::Excel,
        }
    }
}

/// Arguments shared by every command that loads a roster.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Local path or http(s) URL of the roster
    pub source: String,

    /// Source format (detected from the extension by default)
    #[arg(short = 't', long = "type", value_enum)]
    pub source_type: Option<FormatArg>,

    /// Loader configuration file (YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum source size in bytes
    #[arg(long)]
    pub max_bytes: Option<u64>,

    /// Spreadsheet sheet to read (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,
}

/// Resolves the loader configuration.
///
/// Precedence, lowest first: defaults or config file, `ROSTER_*` environment
/// variables, command-line flags.
pub fn build_loader(args: &SourceArgs) -> Result<Loader> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Using loader configuration: {}", path.display());
            parse_file(path)
                .with_context(|| format!("Failed to load configuration: {}", path.display()))?
        }
        None => LoaderConfig::default(),
    };

    config = config
        .apply_env_overrides()
        .context("Invalid ROSTER_* environment override")?;

    if let Some(source_type) = args.source_type {
        config.format = Some(source_type.into());
    }
    if let Some(max_bytes) = args.max_bytes {
        config.max_bytes = max_bytes;
    }
    if let Some(sheet) = &args.sheet {
        config.sheet = Some(sheet.clone());
    }

    config.validate().context("Invalid loader configuration")?;
    debug!("Loader configuration: {:?}", config);

    Ok(Loader::new(config))
}

/// Loads the roster named by `args`.
pub async fn load_source(args: &SourceArgs) -> Result<LoadedSource> {
    let loader = build_loader(args)?;
    let format = loader.resolve_format(&Source::parse(&args.source));

    loader
        .load(&args.source)
        .await
        .with_context(|| format!("Failed to read {} file: {}", format, args.source))
}
