//! Result of validating a dataset.

use crate::{FieldError, RequiredField};
use serde::Serialize;

/// Result of checking a [`Dataset`](crate::Dataset).
///
/// Validation is all-or-nothing: at most one failure is ever reported, the
/// first one encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every required column is present and every record is well-formed
    Valid,

    /// The header lacks one or more required columns
    MissingFields {
        /// Missing column names, in required-field order
        fields: Vec<String>,
    },

    /// A record holds a malformed value
    InvalidField {
        /// Offending column
        field: RequiredField,
        /// Zero-based index of the offending record
        index: usize,
        /// Short description of the expected constraint
        reason: String,
    },
}

impl ValidationOutcome {
    /// Creates an `InvalidField` outcome.
    pub fn invalid(field: RequiredField, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            index,
            reason: reason.into(),
        }
    }

    /// Returns true for [`ValidationOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Converts the outcome into a result carrying the user-facing error.
    pub fn into_result(self) -> Result<(), FieldError> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::MissingFields { fields } => Err(FieldError::MissingFields(fields)),
            ValidationOutcome::InvalidField {
                field,
                index,
                reason,
            } => Err(FieldError::for_field(field, index, reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_into_result() {
        assert!(ValidationOutcome::Valid.is_valid());
        assert!(ValidationOutcome::Valid.into_result().is_ok());
    }

    #[test]
    fn test_missing_fields_message() {
        let outcome = ValidationOutcome::MissingFields {
            fields: vec!["gender".to_string(), "date of birth".to_string()],
        };
        assert!(!outcome.is_valid());

        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Missing fields: gender, date of birth");
    }

    #[test]
    fn test_invalid_field_maps_to_field_error() {
        let outcome = ValidationOutcome::invalid(RequiredField::PhoneNumber, 3, "bad format");
        let err = outcome.into_result().unwrap_err();

        assert!(matches!(err, FieldError::InvalidPhone { index: 3 }));
        assert_eq!(err.to_string(), "Invalid phone number format.");
    }

    #[test]
    fn test_invalid_name_is_not_reported_as_missing_column() {
        let outcome = ValidationOutcome::invalid(RequiredField::Name, 2, "bad format");
        let err = outcome.into_result().unwrap_err();

        assert!(matches!(
            err,
            FieldError::InvalidValue { field: RequiredField::Name, index: 2, .. }
        ));
        assert_eq!(err.to_string(), "Invalid name value: bad format.");
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = ValidationOutcome::invalid(RequiredField::Gender, 0, "must be male or female");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "invalid_field");
        assert_eq!(json["field"], "gender");
        assert_eq!(json["index"], 0);
    }
}
