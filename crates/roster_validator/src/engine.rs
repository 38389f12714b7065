//! Main validation engine.
//!
//! This module provides the `RecordValidator` that checks a dataset header for
//! required columns and then every record's field values, stopping at the
//! first failure.

use crate::rules::{is_valid_date_of_birth, is_valid_gender, is_valid_phone};
use roster_core::{Dataset, DatasetValidator, Record, RequiredField, ValidationOutcome};
use std::time::Instant;
use tracing::debug;

const GENDER_REASON: &str = "must be male or female";
const FORMAT_REASON: &str = "bad format";

/// Validates a dataset against the required roster columns and field formats.
///
/// # Example
///
/// ```rust
/// use roster_core::{Dataset, DatasetValidator, Record};
/// use roster_validator::RecordValidator;
///
/// let header = ["name", "gender", "phone number", "date of birth"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let record = Record::from([
///     ("name".to_string(), "Ada".to_string()),
///     ("gender".to_string(), "Female".to_string()),
///     ("phone number".to_string(), "+44 20 7946 0958".to_string()),
///     ("date of birth".to_string(), "10/12/1815".to_string()),
/// ]);
/// let dataset = Dataset::new(header, vec![record]);
///
/// assert!(RecordValidator::new().validate(&dataset).is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Creates a new record validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a dataset and reports how much of it was inspected.
    pub fn validate_with_stats(&self, dataset: &Dataset) -> ValidationSummary {
        let start = Instant::now();
        let outcome = self.validate(dataset);

        let records_checked = match &outcome {
            ValidationOutcome::Valid => dataset.len(),
            ValidationOutcome::MissingFields { .. } => 0,
            ValidationOutcome::InvalidField { index, .. } => index + 1,
        };

        ValidationSummary {
            outcome,
            records_checked,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn missing_fields(dataset: &Dataset) -> Vec<String> {
        RequiredField::ALL
            .iter()
            .filter(|field| !dataset.has_column(field.as_str()))
            .map(|field| field.as_str().to_string())
            .collect()
    }

    fn validate_record(record: &Record, index: usize) -> Option<ValidationOutcome> {
        if !is_valid_gender(field_value(record, RequiredField::Gender)) {
            return Some(ValidationOutcome::invalid(
                RequiredField::Gender,
                index,
                GENDER_REASON,
            ));
        }

        if !is_valid_phone(field_value(record, RequiredField::PhoneNumber)) {
            return Some(ValidationOutcome::invalid(
                RequiredField::PhoneNumber,
                index,
                FORMAT_REASON,
            ));
        }

        if !is_valid_date_of_birth(field_value(record, RequiredField::DateOfBirth)) {
            return Some(ValidationOutcome::invalid(
                RequiredField::DateOfBirth,
                index,
                FORMAT_REASON,
            ));
        }

        None
    }
}

impl DatasetValidator for RecordValidator {
    fn validate(&self, dataset: &Dataset) -> ValidationOutcome {
        let missing = Self::missing_fields(dataset);
        if !missing.is_empty() {
            debug!("Dataset is missing required columns: {:?}", missing);
            return ValidationOutcome::MissingFields { fields: missing };
        }

        for (index, record) in dataset.records().enumerate() {
            if let Some(outcome) = Self::validate_record(record, index) {
                debug!("Record {} failed validation: {:?}", index, outcome);
                return outcome;
            }
        }

        debug!("All {} records passed validation", dataset.len());
        ValidationOutcome::Valid
    }
}

/// Validates a dataset with the default [`RecordValidator`].
pub fn validate(dataset: &Dataset) -> ValidationOutcome {
    RecordValidator::new().validate(dataset)
}

/// A validation outcome together with execution statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    /// The validation result
    pub outcome: ValidationOutcome,

    /// Number of records inspected before the validator stopped
    pub records_checked: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

// Short rows leave a column's value absent; it is checked as empty.
fn field_value(record: &Record, field: RequiredField) -> &str {
    record.get(field.as_str()).map(String::as_str).unwrap_or("")
}
