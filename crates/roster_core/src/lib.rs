//! # Roster Check Core
//!
//! Core data structures and types for Roster Check.
//!
//! This crate provides the building blocks shared by the loader, the validator
//! and the CLI. A roster is a tabular dataset (CSV or spreadsheet) of people
//! that must carry four required columns with well-formed values.
//!
//! ## Key Concepts
//!
//! - **Record**: one row's field-name to value mapping
//! - **Dataset**: the ordered records of a source plus its observed header
//! - **Required fields**: `name`, `gender`, `phone number`, `date of birth`
//! - **ValidationOutcome**: result of checking a dataset
//!
//! ## Example
//!
//! ```rust
//! use roster_core::{Dataset, Record, RequiredField};
//!
//! let header = RequiredField::ALL.iter().map(|f| f.as_str().to_string()).collect();
//! let mut dataset = Dataset::new(header, Vec::new());
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), "Ada".to_string());
//! dataset.add_record(record);
//!
//! assert_eq!(dataset.len(), 1);
//! assert!(dataset.has_column("phone number"));
//! ```

pub mod dataset;
pub mod error;
pub mod fields;
pub mod outcome;
pub mod validator;

pub use dataset::*;
pub use error::*;
pub use fields::*;
pub use outcome::*;
pub use validator::*;
