//! Per-field value rules.
//!
//! Each rule checks the literal string value of a single field:
//! - gender: `male` or `female`, case-insensitive
//! - phone number: optional `+`, a digit, 8+ digits/spaces/hyphens, a digit
//! - date of birth: `DD/MM/YYYY` digit layout, no calendar check
//!
//! Both patterns tolerate one trailing newline, which a quoted CSV cell can
//! carry, the way a `$` anchor does in most regex engines.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for phone numbers. At least 10 characters after the optional `+`.
pub const PHONE_PATTERN: &str = r"^\+?\d[\d\s-]{7,}\d\n?$";

/// Pattern for dates of birth. Purely lexical, so `99/99/9999` matches.
pub const DATE_OF_BIRTH_PATTERN: &str = r"^\d{2}/\d{2}/\d{4}\n?$";

const GENDERS: [&str; 2] = ["male", "female"];

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

static DATE_OF_BIRTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DATE_OF_BIRTH_PATTERN).expect("date of birth pattern is a valid regex")
});

/// Returns true if `value` is `male` or `female`, ignoring case.
pub fn is_valid_gender(value: &str) -> bool {
    let lowered = value.to_lowercase();
    GENDERS.contains(&lowered.as_str())
}

/// Returns true if `value` matches [`PHONE_PATTERN`].
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Returns true if `value` matches [`DATE_OF_BIRTH_PATTERN`].
pub fn is_valid_date_of_birth(value: &str) -> bool {
    DATE_OF_BIRTH_RE.is_match(value)
}
