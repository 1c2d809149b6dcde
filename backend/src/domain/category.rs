//! Category model.

use std::fmt;

use crate::domain::validation::{ValidationErrors, check_required_name};

/// Server-assigned category identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identity value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw identity value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Server-assigned identity.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// Validated category fields ready to be persisted.
///
/// ## Invariants
/// - `name` holds 3–100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    name: String,
}

impl CategoryDraft {
    /// Validate the supplied name.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::CategoryDraft;
    ///
    /// assert!(CategoryDraft::new(Some("Partners".into())).is_ok());
    /// assert!(CategoryDraft::new(Some("ab".into())).is_err());
    /// ```
    pub fn new(name: Option<String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_name(&mut errors, "name", "Name", name.as_deref());
        errors.finish(|| Self {
            name: name.unwrap_or_default(),
        })
    }

    /// The validated name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Message used when a category identity does not resolve.
pub fn category_not_found_message(id: CategoryId) -> String {
    format!("Category with ID='{id}' not found.")
}
