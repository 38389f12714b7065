use anyhow::Result;
use roster_validator::RecordValidator;
use tracing::info;

use super::SourceArgs;
use crate::output;

pub async fn execute(args: &SourceArgs, format: &str, rows: Option<usize>) -> Result<()> {
    info!("Validating roster: {}", args.source);

    let loaded = super::load_source(args).await?;

    let summary = RecordValidator::new().validate_with_stats(&loaded.dataset);
    info!(
        "Checked {} of {} records in {} ms",
        summary.records_checked,
        loaded.dataset.len(),
        summary.duration_ms
    );

    output::print_validation_report(&loaded, &summary, format, rows);

    if !summary.outcome.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}
