//! Required roster columns and source formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column every roster must carry.
///
/// Column names are matched case-sensitively against the dataset header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredField {
    /// `name`
    #[serde(rename = "name")]
    Name,
    /// `gender`
    #[serde(rename = "gender")]
    Gender,
    /// `phone number`
    #[serde(rename = "phone number")]
    PhoneNumber,
    /// `date of birth`
    #[serde(rename = "date of birth")]
    DateOfBirth,
}

impl RequiredField {
    /// All required fields, in the order missing columns are reported.
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Name,
        RequiredField::Gender,
        RequiredField::PhoneNumber,
        RequiredField::DateOfBirth,
    ];

    /// Returns the column name as it appears in a source header.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Gender => "gender",
            RequiredField::PhoneNumber => "phone number",
            RequiredField::DateOfBirth => "date of birth",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical format of a tabular source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Comma-separated values
    Csv,
    /// Spreadsheet workbook (xlsx, xlsm, xlsb, xls, ods)
    Excel,
}

impl SourceFormat {
    /// Human-readable label used in user messages.
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "CSV",
            SourceFormat::Excel => "Excel",
        }
    }

    /// Detects the format from a file extension, if it is a known one.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Excel),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_field_names() {
        let names: Vec<&str> = RequiredField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["name", "gender", "phone number", "date of birth"]);
    }

    #[test]
    fn test_required_field_serde_uses_column_name() {
        let json = serde_json::to_string(&RequiredField::PhoneNumber).unwrap();
        assert_eq!(json, "\"phone number\"");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("csv"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_extension("XLSX"), Some(SourceFormat::Excel));
        assert_eq!(SourceFormat::from_extension("ods"), Some(SourceFormat::Excel));
        assert_eq!(SourceFormat::from_extension("json"), None);
    }
}
