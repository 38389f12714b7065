//! Validation trait for roster datasets.
//!
//! Different implementations can validate datasets regardless of which source
//! format they were loaded from.

use crate::{Dataset, ValidationOutcome};

/// Core trait for validating a loaded dataset.
///
/// Implementations must be pure: the same dataset always yields the same
/// outcome, and the dataset is never modified.
///
/// # Example
///
/// ```rust
/// use roster_core::{Dataset, DatasetValidator, ValidationOutcome};
///
/// struct AcceptAll;
///
/// impl DatasetValidator for AcceptAll {
///     fn validate(&self, _dataset: &Dataset) -> ValidationOutcome {
///         ValidationOutcome::Valid
///     }
/// }
///
/// assert!(AcceptAll.validate(&Dataset::empty()).is_valid());
/// ```
pub trait DatasetValidator: Send + Sync {
    /// Validates a dataset, stopping at the first failure.
    fn validate(&self, dataset: &Dataset) -> ValidationOutcome;
}
