//! # Roster Check Validator
//!
//! Validation engine for roster datasets. Checking happens in two stages:
//!
//! - Header check: all four required columns must be present
//! - Record check: per-record gender, phone number and date of birth formats
//!
//! The first failure ends validation and is returned as the outcome.
//!
//! ## Example
//!
//! ```rust
//! use roster_core::{Dataset, ValidationOutcome};
//!
//! let outcome = roster_validator::validate(&Dataset::empty());
//!
//! match outcome {
//!     ValidationOutcome::MissingFields { fields } => assert_eq!(fields.len(), 4),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

mod engine;
pub mod rules;

pub use engine::*;
