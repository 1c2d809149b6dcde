//! JSON request and response bodies for the directory endpoints.
//!
//! Payloads accept the same shape the API returns, but identity and
//! `createdOn` members are never read: unknown members are ignored, so a
//! caller echoing a full record back cannot assign them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, Client, ClientFields, StatusInput};

/// Request payload for creating or updating a client.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[schema(example = "Name1")]
    pub name: Option<String>,
    #[schema(example = "name1@ignas.me")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<String>,
    /// Integer code (0–3) or status name.
    #[schema(value_type = Option<i32>, example = 0)]
    pub status: Option<StatusInput>,
    #[schema(example = 1)]
    pub category_id: Option<i64>,
}

impl From<ClientPayload> for ClientFields {
    fn from(value: ClientPayload) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            fax: value.fax,
            address: value.address,
            status: value.status,
            category_id: value.category_id,
        }
    }
}

/// Request payload for creating a category.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[schema(example = "Partners")]
    pub name: Option<String>,
}

/// Category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    /// Server-assigned identity.
    pub category_id: i32,
    /// Display name.
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id.get(),
            name: value.name,
        }
    }
}

/// Client as returned by the API. Absent optional fields serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    /// Server-assigned identity.
    pub client_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<String>,
    #[schema(example = 0)]
    pub status: i32,
    /// RFC 3339 timestamp.
    pub created_on: String,
    pub category_id: i32,
    /// Joined category.
    pub category: Option<CategoryResponse>,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        Self {
            client_id: value.id.get(),
            name: value.name,
            email: value.email,
            phone: value.phone,
            fax: value.fax,
            address: value.address,
            status: value.status.code(),
            created_on: value.created_on.to_rfc3339(),
            category_id: value.category_id.get(),
            category: value.category.map(CategoryResponse::from),
        }
    }
}
