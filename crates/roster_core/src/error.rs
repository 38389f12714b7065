//! Error types for roster validation.
//!
//! The `Display` output of each variant is the message shown to the user.
//! Row indices are carried for callers but are not part of the message.

use crate::RequiredField;
use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// A terminal validation failure for a dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Header lacks required columns
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Gender is neither `male` nor `female`
    #[error("Invalid gender value. Must be 'male' or 'female'.")]
    InvalidGender {
        /// Zero-based record index
        index: usize,
    },

    /// Phone number does not match the phone pattern
    #[error("Invalid phone number format.")]
    InvalidPhone {
        /// Zero-based record index
        index: usize,
    },

    /// Date of birth is not laid out as `DD/MM/YYYY`
    #[error("Invalid date of birth format. Must be 'day/month/year'.")]
    InvalidDate {
        /// Zero-based record index
        index: usize,
    },

    /// Any other malformed value. The validator never checks `name`, but an
    /// outcome built for it by hand still maps to a row-level error.
    #[error("Invalid {field} value: {reason}.")]
    InvalidValue {
        field: RequiredField,
        /// Zero-based record index
        index: usize,
        reason: String,
    },
}

impl FieldError {
    /// Creates the error for a malformed value in `field`.
    pub fn for_field(field: RequiredField, index: usize, reason: impl Into<String>) -> Self {
        match field {
            RequiredField::Gender => Self::InvalidGender { index },
            RequiredField::PhoneNumber => Self::InvalidPhone { index },
            RequiredField::DateOfBirth => Self::InvalidDate { index },
            RequiredField::Name => Self::InvalidValue {
                field,
                index,
                reason: reason.into(),
            },
        }
    }

    /// Returns the offending record index, if the failure is row-level.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MissingFields(_) => None,
            Self::InvalidGender { index }
            | Self::InvalidPhone { index }
            | Self::InvalidDate { index }
            | Self::InvalidValue { index, .. } => Some(*index),
        }
    }

    /// Returns the column the failure refers to, if it is row-level.
    pub fn field(&self) -> Option<RequiredField> {
        match self {
            Self::MissingFields(_) => None,
            Self::InvalidGender { .. } => Some(RequiredField::Gender),
            Self::InvalidPhone { .. } => Some(RequiredField::PhoneNumber),
            Self::InvalidDate { .. } => Some(RequiredField::DateOfBirth),
            Self::InvalidValue { field, .. } => Some(*field),
        }
    }

    /// Stable machine-readable kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "missing_fields",
            Self::InvalidGender { .. } => "invalid_gender",
            Self::InvalidPhone { .. } => "invalid_phone",
            Self::InvalidDate { .. } => "invalid_date",
            Self::InvalidValue { .. } => "invalid_value",
        }
    }
}
