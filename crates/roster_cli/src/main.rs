mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::SourceArgs;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about = "Validate CSV and Excel people rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a roster file or URL
    Validate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print the first N parsed rows when the roster is valid
        #[arg(short, long)]
        rows: Option<usize>,
    },

    /// Load a roster and summarize its columns without validating rows
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a default loader configuration
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write TOML instead of YAML
        #[arg(long)]
        toml: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            source,
            format,
            rows,
        } => commands::validate::execute(&source, &format, rows).await,

        Commands::Check { source } => commands::check::execute(&source).await,

        Commands::Init { output, toml } => commands::init::execute(output.as_deref(), toml),
    }
}
