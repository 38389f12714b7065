//! Format-specific parsing into a [`Dataset`].
//!
//! Every format reduces its rows to string-valued records keyed by header
//! name, so the same validator serves all of them.

use crate::{LoadError, Result};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use roster_config::LoaderConfig;
use roster_core::{Dataset, Record, SourceFormat};
use std::io::Cursor;
use tracing::debug;

/// Turns raw source bytes into a dataset.
pub trait TabularParser: Send + Sync {
    /// Parses `bytes` into a dataset.
    fn parse(&self, bytes: Vec<u8>) -> Result<Dataset>;
}

/// Returns the parser for `format`, configured from `config`.
pub fn parser_for(format: SourceFormat, config: &LoaderConfig) -> Box<dyn TabularParser> {
    match format {
        SourceFormat::Csv => Box::new(CsvParser::new(config.delimiter_byte())),
        SourceFormat::Excel => Box::new(SpreadsheetParser::new(config.sheet.clone())),
    }
}

/// Parses UTF-8 delimited text with a header row.
#[derive(Debug, Clone)]
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    /// Creates a parser using `delimiter` between fields.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TabularParser for CsvParser {
    fn parse(&self, bytes: Vec<u8>) -> Result<Dataset> {
        let text = String::from_utf8(bytes).map_err(|e| LoadError::Encoding(e.to_string()))?;
        // Spreadsheet exports often prefix UTF-8 CSVs with a BOM, which would
        // otherwise end up in the first column name.
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            // Cells beyond the header are dropped; missing cells stay absent.
            let record: Record = header
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect();
            records.push(record);
        }

        debug!("Parsed CSV with {} columns and {} rows", header.len(), records.len());
        Ok(Dataset::new(header, records))
    }
}

/// Parses spreadsheet workbooks (xlsx, xlsm, xlsb, xls, ods).
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetParser {
    sheet: Option<String>,
}

impl SpreadsheetParser {
    /// Creates a parser reading `sheet`, or the first sheet when `None`.
    pub fn new(sheet: Option<String>) -> Self {
        Self { sheet }
    }
}

impl TabularParser for SpreadsheetParser {
    fn parse(&self, bytes: Vec<u8>) -> Result<Dataset> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| LoadError::spreadsheet(e.to_string()))?;

        let range = match &self.sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| LoadError::spreadsheet(format!("sheet '{name}': {e}")))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| LoadError::spreadsheet("workbook has no sheets"))?
                .map_err(|e| LoadError::spreadsheet(e.to_string()))?,
        };

        let dataset = dataset_from_rows(range.rows());
        debug!(
            "Parsed sheet with {} columns and {} rows",
            dataset.header().len(),
            dataset.len()
        );
        Ok(dataset)
    }
}

/// Builds a dataset from spreadsheet rows.
///
/// The first row with any content is the header. Fully empty rows are
/// skipped, and columns with an empty header cell are ignored.
pub fn dataset_from_rows<'a, I>(rows: I) -> Dataset
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter().filter(|row| !is_empty_row(row));

    let Some(header_row) = rows.next() else {
        return Dataset::empty();
    };

    let columns: Vec<(usize, String)> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| (idx, cell_to_string(cell)))
        .filter(|(_, name)| !name.is_empty())
        .collect();

    let records = rows
        .map(|row| {
            columns
                .iter()
                .filter_map(|(idx, name)| {
                    row.get(*idx)
                        .map(|cell| (name.clone(), cell_to_string(cell)))
                })
                .collect::<Record>()
        })
        .collect();

    let header = columns.into_iter().map(|(_, name)| name).collect();
    Dataset::new(header, records)
}

fn is_empty_row(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// Stringifies a cell the way it would read in the sheet.
///
/// Integral floats print without a fractional part, e.g. `1234567890`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
