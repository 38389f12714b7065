use anyhow::{Context, Result};
use roster_config::{ConfigFormat, LoaderConfig};
use std::fs::File;
use std::io::Write;
use tracing::info;

use crate::output;

pub fn execute(output_path: Option<&str>, toml: bool) -> Result<()> {
    let format = if toml {
        ConfigFormat::Toml
    } else {
        ConfigFormat::Yaml
    };
    info!("Writing default loader configuration as {:?}", format);

    let content = roster_config::to_string(&LoaderConfig::default(), format)
        .context("Failed to serialize loader configuration")?;

    // Output to file or stdout
    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path))?;
        output::print_success(&format!("Configuration written to: {}", path));
    } else {
        println!("{}", content);
    }

    Ok(())
}
