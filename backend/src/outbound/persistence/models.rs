//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Category, CategoryId, Client, ClientDraft, ClientId, ClientStatus};

use super::schema::{categories, clients};

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub category_id: i32,
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.category_id),
            name: row.name,
        }
    }
}

/// Insertable struct for creating category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the clients table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub client_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<String>,
    pub status: i32,
    pub created_on: DateTime<Utc>,
    pub category_id: i32,
}

impl ClientRow {
    /// Convert into a domain client, attaching the joined category if loaded.
    ///
    /// Fails only when the stored status code is outside the known range.
    pub(crate) fn into_client(self, category: Option<CategoryRow>) -> Result<Client, String> {
        let status = ClientStatus::try_from(self.status)
            .map_err(|err| format!("client {}: {err}", self.client_id))?;
        Ok(Client {
            id: ClientId::new(self.client_id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            fax: self.fax,
            address: self.address,
            status,
            created_on: self.created_on,
            category_id: CategoryId::new(self.category_id),
            category: category.map(Category::from),
        })
    }
}

/// Insertable struct for creating client records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clients)]
pub(crate) struct NewClientRow<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub fax: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: i32,
    pub created_on: DateTime<Utc>,
    pub category_id: i32,
}

impl<'a> NewClientRow<'a> {
    pub(crate) fn from_draft(draft: &'a ClientDraft, created_on: DateTime<Utc>) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
            phone: draft.phone(),
            fax: draft.fax(),
            address: draft.address(),
            status: draft.status().code(),
            created_on,
            category_id: draft.category_id().get(),
        }
    }
}

/// Changeset for the mutable client columns.
///
/// Identity and `created_on` are deliberately absent. `None` clears a column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = clients)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ClientUpdate<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub fax: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: i32,
    pub category_id: i32,
}

impl<'a> From<&'a Client> for ClientUpdate<'a> {
    fn from(client: &'a Client) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
            fax: client.fax.as_deref(),
            address: client.address.as_deref(),
            status: client.status.code(),
            category_id: client.category_id.get(),
        }
    }
}
