use anyhow::Result;
use colored::*;
use roster_core::RequiredField;
use tracing::info;

use super::SourceArgs;
use crate::output;

pub async fn execute(args: &SourceArgs) -> Result<()> {
    info!("Checking roster columns: {}", args.source);

    let loaded = super::load_source(args).await?;
    let dataset = &loaded.dataset;

    output::print_info(&format!(
        "Loaded {} file: {} ({} bytes)",
        loaded.format, loaded.source, loaded.size
    ));

    println!("\nRoster Summary:");
    println!("  Format:   {}", loaded.format);
    println!("  Columns:  {}", dataset.header().join(", "));
    println!("  Records:  {}", dataset.len());

    println!("\nRequired Columns:");
    let mut missing = Vec::new();
    for field in RequiredField::ALL {
        if dataset.has_column(field.as_str()) {
            println!("  {} {}", "✓".green(), field);
        } else {
            println!("  {} {}", "✗".red(), field);
            missing.push(field.as_str());
        }
    }

    if missing.is_empty() {
        output::print_success("All required columns are present");
    } else {
        output::print_error(&format!("Missing fields: {}", missing.join(", ")));
    }

    Ok(())
}
