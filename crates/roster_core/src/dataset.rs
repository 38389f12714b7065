//! Dataset representation for validation.
//!
//! Both CSV and spreadsheet sources are reduced to the same shape: a header of
//! observed column names and an ordered list of string-valued records.

use std::collections::HashMap;

/// A single row of data, keyed by column name.
pub type Record = HashMap<String, String>;

/// A fully loaded tabular dataset.
///
/// The header is kept separately from the records so that column presence can
/// be checked even when the dataset has no rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    header: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a new dataset with no header and no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new dataset from a header and records.
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Returns the number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the observed column names in source order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns true if the header contains `column` (case-sensitive).
    pub fn has_column(&self, column: &str) -> bool {
        self.header.iter().any(|h| h == column)
    }

    /// Returns an iterator over the records in source order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Gets a specific record by index.
    pub fn get_record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Adds a record to the dataset.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Takes the first `size` records, keeping the header.
    ///
    /// If `size` is greater than the number of records, returns all records.
    pub fn sample(&self, size: usize) -> Dataset {
        Dataset {
            header: self.header.clone(),
            records: self.records.iter().take(size).cloned().collect(),
        }
    }
}
