//! Client model, status enumeration and field validation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::category::{Category, CategoryId};
use crate::domain::validation::{
    ValidationErrors, check_email, check_max_length, check_required_name, normalise_optional,
};

/// Server-assigned client identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(i32);

impl ClientId {
    /// Wrap a raw identity value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw identity value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message used when a client identity does not resolve.
pub fn client_not_found_message(id: ClientId) -> String {
    format!("Client with ID='{id}' not found.")
}

/// Lifecycle status of a client. Serialised as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    /// Code 0.
    Active,
    /// Code 1.
    Inactive,
    /// Code 2.
    Archived,
    /// Code 3.
    Pending,
}

/// Raised when a status code or name matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown client status: {0}")]
pub struct ClientStatusError(pub String);

impl ClientStatus {
    /// Every status in declaration order.
    pub const ALL: [ClientStatus; 4] = [
        ClientStatus::Active,
        ClientStatus::Inactive,
        ClientStatus::Archived,
        ClientStatus::Pending,
    ];

    /// Stable integer stored in the database and sent on the wire.
    pub const fn code(self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Inactive => 1,
            Self::Archived => 2,
            Self::Pending => 3,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Archived => "Archived",
            Self::Pending => "Pending",
        }
    }

    /// Ordered name → code pairs, as consumed by the client editor.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::ClientStatus;
    ///
    /// let mapping = ClientStatus::mapping();
    /// assert_eq!(mapping[0], ("Active", 0));
    /// assert_eq!(mapping.len(), 4);
    /// ```
    pub fn mapping() -> Vec<(&'static str, i32)> {
        Self::ALL
            .iter()
            .map(|status| (status.name(), status.code()))
            .collect()
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ClientStatus {
    type Error = ClientStatusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == value)
            .ok_or_else(|| ClientStatusError(value.to_string()))
    }
}

impl FromStr for ClientStatus {
    type Err = ClientStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClientStatusError(s.to_owned()))
    }
}

/// Status as supplied by a caller: either the integer code or the name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusInput {
    /// Integer status code.
    Code(i64),
    /// Status name, matched case-insensitively.
    Name(String),
}

impl StatusInput {
    fn resolve(&self) -> Option<ClientStatus> {
        match self {
            Self::Code(code) => i32::try_from(*code)
                .ok()
                .and_then(|code| ClientStatus::try_from(code).ok()),
            Self::Name(name) => name.parse().ok(),
        }
    }
}

/// Persisted client.
///
/// ## Invariants
/// - `id` and `created_on` are assigned by the server on creation and never
///   change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Server-assigned identity.
    pub id: ClientId,
    /// Display name, 3 to 100 characters.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Fax number.
    pub fax: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Lifecycle status.
    pub status: ClientStatus,
    /// Creation time, stamped by the service.
    pub created_on: DateTime<Utc>,
    /// Owning category.
    pub category_id: CategoryId,
    /// Joined category, present on read paths.
    pub category: Option<Category>,
}

impl Client {
    /// Overwrite every mutable field from `draft`.
    ///
    /// Identity and creation time are left untouched. The joined category is
    /// dropped when the category changes because it no longer matches.
    pub fn apply(&mut self, draft: &ClientDraft) {
        self.name = draft.name.clone();
        self.address = draft.address.clone();
        self.email = draft.email.clone();
        self.fax = draft.fax.clone();
        self.phone = draft.phone.clone();
        self.status = draft.status;
        if self.category_id != draft.category_id {
            self.category = None;
        }
        self.category_id = draft.category_id;
    }
}

/// Unvalidated client fields as received from a caller.
///
/// Identity and creation time are deliberately absent: callers cannot set
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFields {
    /// Required name.
    pub name: Option<String>,
    /// Optional email address.
    pub email: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional fax number.
    pub fax: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
    /// Required status, by code or name.
    pub status: Option<StatusInput>,
    /// Required category identity.
    pub category_id: Option<i64>,
}

impl ClientFields {
    /// Apply every field rule and build a [`ClientDraft`].
    ///
    /// Blank optional strings are treated as absent.
    ///
    /// # Examples
    /// ```
    /// use directory_backend::domain::{ClientFields, StatusInput};
    ///
    /// let fields = ClientFields {
    ///     name: Some("Acme".into()),
    ///     status: Some(StatusInput::Code(0)),
    ///     category_id: Some(1),
    ///     ..ClientFields::default()
    /// };
    /// assert!(fields.validate().is_ok());
    /// ```
    pub fn validate(self) -> Result<ClientDraft, ValidationErrors> {
        let email = normalise_optional(self.email);
        let phone = normalise_optional(self.phone);
        let fax = normalise_optional(self.fax);
        let address = normalise_optional(self.address);

        let mut errors = ValidationErrors::new();
        check_required_name(&mut errors, "name", "Name", self.name.as_deref());
        check_email(&mut errors, "email", email.as_deref());
        check_max_length(&mut errors, "phone", "Phone", phone.as_deref());
        check_max_length(&mut errors, "fax", "Fax", fax.as_deref());
        check_max_length(&mut errors, "address", "Address", address.as_deref());

        let status = match &self.status {
            None => {
                errors.push("status", "The Status field is required.");
                None
            }
            Some(input) => {
                let resolved = input.resolve();
                if resolved.is_none() {
                    errors.push(
                        "status",
                        "The field Status must be one of Active, Inactive, Archived, Pending.",
                    );
                }
                resolved
            }
        };

        let category_id = match self.category_id {
            None => {
                errors.push("categoryId", "The CategoryId field is required.");
                None
            }
            Some(raw) => match i32::try_from(raw) {
                Ok(value) if value > 0 => Some(CategoryId::new(value)),
                _ => {
                    errors.push("categoryId", "The field CategoryId must be a positive integer.");
                    None
                }
            },
        };

        match (status, category_id) {
            (Some(status), Some(category_id)) if errors.is_empty() => Ok(ClientDraft {
                name: self.name.unwrap_or_default(),
                email,
                phone,
                fax,
                address,
                status,
                category_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated mutable client fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub(crate) name: String,
    pub(crate) email: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) fax: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) status: ClientStatus,
    pub(crate) category_id: CategoryId,
}

impl ClientDraft {
    /// Validated name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email, absent when blank.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone, absent when blank.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Fax, absent when blank.
    pub fn fax(&self) -> Option<&str> {
        self.fax.as_deref()
    }

    /// Address, absent when blank.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Resolved status.
    pub fn status(&self) -> ClientStatus {
        self.status
    }

    /// Referenced category.
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Materialise a new client with server-assigned identity and timestamp.
    pub fn into_client(self, id: ClientId, created_on: DateTime<Utc>) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            fax: self.fax,
            address: self.address,
            status: self.status,
            created_on,
            category_id: self.category_id,
            category: None,
        }
    }
}
