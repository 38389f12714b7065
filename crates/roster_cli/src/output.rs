use colored::*;
use roster_core::{Dataset, FieldError};
use roster_loader::LoadedSource;
use roster_validator::ValidationSummary;
use serde_json::{Value, json};

pub fn print_validation_report(
    loaded: &LoadedSource,
    summary: &ValidationSummary,
    format: &str,
    rows: Option<usize>,
) {
    let error = summary.outcome.clone().into_result().err();

    match format {
        "json" => print_json_report(loaded, summary, error.as_ref(), rows),
        _ => print_text_report(loaded, summary, error.as_ref(), rows),
    }
}

fn print_text_report(
    loaded: &LoadedSource,
    summary: &ValidationSummary,
    error: Option<&FieldError>,
    rows: Option<usize>,
) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));
    println!(
        "  Source: {} ({}, {} bytes)",
        loaded.source, loaded.format, loaded.size
    );

    match error {
        None => println!(
            "\n{} {}",
            "✓".green().bold(),
            format!("{} file is valid.", loaded.format).green().bold()
        ),
        Some(err) => println!(
            "\n{} {}",
            "✗".red().bold(),
            err.to_string().red().bold()
        ),
    }

    if error.is_none() {
        if let Some(limit) = rows {
            print_rows(&loaded.dataset.sample(limit));
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Records:         {}", loaded.dataset.len());
    println!("  Records checked: {}", summary.records_checked);
    println!("{}", "═".repeat(60));
}

fn print_rows(dataset: &Dataset) {
    let header = dataset.header();
    let widths: Vec<usize> = header
        .iter()
        .map(|column| {
            dataset
                .records()
                .filter_map(|record| record.get(column))
                .map(|value| value.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("\n{}", "Rows:".bold());
    println!(
        "  {}",
        line(header.iter().map(String::as_str).collect()).bold()
    );
    for record in dataset.records() {
        let cells = header
            .iter()
            .map(|column| record.get(column).map(String::as_str).unwrap_or(""))
            .collect();
        println!("  {}", line(cells));
    }
}

fn print_json_report(
    loaded: &LoadedSource,
    summary: &ValidationSummary,
    error: Option<&FieldError>,
    rows: Option<usize>,
) {
    let error_json = error.map(|err| {
        json!({
            "kind": err.kind(),
            "field": err.field().map(|f| f.as_str()),
            "index": err.row(),
            "message": err.to_string(),
        })
    });

    let mut output = json!({
        "valid": error.is_none(),
        "source": loaded.source.to_string(),
        "format": loaded.format,
        "size_bytes": loaded.size,
        "error": error_json,
        "summary": {
            "record_count": loaded.dataset.len(),
            "records_checked": summary.records_checked,
            "duration_ms": summary.duration_ms,
        }
    });

    if let (None, Some(limit)) = (error, rows) {
        let records: Vec<Value> = loaded
            .dataset
            .sample(limit)
            .records()
            .map(|record| json!(record))
            .collect();
        output["rows"] = Value::Array(records);
    }

    println!("{:#}", output);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
