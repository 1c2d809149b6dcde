//! Field rules shared by the Client and Category models.
//!
//! Validation never stops at the first failure: every rule is checked and the
//! violations are collected in field order so the API can report them all in
//! one response.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use crate::domain::Error;

/// Minimum length for required names.
pub const NAME_MIN: usize = 3;
/// Maximum length for every text field.
pub const FIELD_MAX: usize = 100;
/// Pattern an email address must match: one `@` between non-blank runs.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+$";

/// Heading of the aggregated validation message.
const INVALID_MODEL_HEADING: &str = "Invalid model. Errors:";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_matches(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// A single broken field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the rule.
    pub message: String,
}

/// Every violation found while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Start an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a broken rule.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }

    /// Append another collection's violations.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.violations.extend(other.violations);
    }

    /// True when no rule was broken.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INVALID_MODEL_HEADING}")?;
        for violation in &self.violations {
            writeln!(f, "{}", violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        let violations: Vec<_> = value
            .violations
            .iter()
            .map(|violation| json!({ "field": violation.field, "message": violation.message }))
            .collect();
        Error::invalid_request(value.to_string()).with_details(json!({
            "code": "invalid_model",
            "violations": violations,
        }))
    }
}

/// Treat blank strings as absent.
pub fn normalise_optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Check a required name: present and between [`NAME_MIN`] and [`FIELD_MAX`]
/// characters.
pub fn check_required_name(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
) {
    let Some(value) = value.filter(|text| !text.trim().is_empty()) else {
        errors.push(field, format!("The {label} field is required."));
        return;
    };
    let length = value.chars().count();
    if length < NAME_MIN {
        errors.push(
            field,
            format!("The field {label} must be at least {NAME_MIN} characters long."),
        );
    }
    if length > FIELD_MAX {
        errors.push(
            field,
            format!("The field {label} must be at most {FIELD_MAX} characters long."),
        );
    }
}

/// Check an optional text field against [`FIELD_MAX`].
pub fn check_max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
) {
    if value.is_some_and(|text| text.chars().count() > FIELD_MAX) {
        errors.push(
            field,
            format!("The field {label} must be at most {FIELD_MAX} characters long."),
        );
    }
}

/// Check an optional email address against [`EMAIL_PATTERN`] and [`FIELD_MAX`].
pub fn check_email(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    if !email_matches(value) {
        errors.push(
            field,
            format!("The field Email must match the regular expression '{EMAIL_PATTERN}'."),
        );
    }
    check_max_length(errors, field, "Email", Some(value));
}
