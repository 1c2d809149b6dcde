//! Wire records exchanged with the directory API.

use serde::{Deserialize, Serialize};

/// A category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Server-assigned identity.
    pub category_id: i32,
    /// Display name.
    pub name: String,
}

/// A client as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Server-assigned identity.
    pub client_id: i32,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Fax number.
    #[serde(default)]
    pub fax: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Status code.
    pub status: i32,
    /// Creation time as sent by the server.
    pub created_on: String,
    /// Owning category identity.
    pub category_id: i32,
    /// Joined category.
    #[serde(default)]
    pub category: Option<CategoryRecord>,
    /// Link to the record's edit page, filled in by the directory.
    #[serde(skip)]
    pub edit_link: String,
}

/// The body sent when creating or updating a client.
///
/// Empty text fields are sent as empty strings; the server treats them as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSubmission {
    /// Identity of the edited record, `0` for a new one. Ignored by the server.
    pub client_id: i32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Fax number.
    pub fax: String,
    /// Postal address.
    pub address: String,
    /// Selected status code.
    pub status: Option<i32>,
    /// Selected category identity.
    pub category_id: Option<i32>,
}

/// One entry of the status drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption {
    /// Status code sent to the server.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl StatusOption {
    /// Convert an ordered name to code mapping into options.
    ///
    /// # Examples
    /// ```
    /// use directory_client::StatusOption;
    ///
    /// let options = StatusOption::from_mapping([("Item1", 1), ("Item2", 2)]);
    /// assert_eq!(options[1].name, "Item2");
    /// assert_eq!(options[1].id, 2);
    /// ```
    pub fn from_mapping<'a>(mapping: impl IntoIterator<Item = (&'a str, i32)>) -> Vec<Self> {
        mapping
            .into_iter()
            .map(|(name, id)| Self {
                id,
                name: name.to_owned(),
            })
            .collect()
    }

    /// The statuses the server accepts, in code order.
    pub fn defaults() -> Vec<Self> {
        Self::from_mapping([("Active", 0), ("Inactive", 1), ("Archived", 2), ("Pending", 3)])
    }
}
