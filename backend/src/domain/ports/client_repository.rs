//! Port for client persistence adapters and their errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CategoryId, Client, ClientDraft, ClientId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by client repository adapters.
    pub enum ClientRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "client repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "client repository query failed: {message}",
        /// The referenced category does not exist.
        MissingCategory { category_id: CategoryId } =>
            "category {category_id} referenced by client does not exist",
    }
}

/// Storage contract for clients.
///
/// Adapters only move rows; identity assignment, timestamping and not-found
/// semantics live in [`crate::domain::ClientsService`]. Read operations join
/// the owning category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Every client with its category.
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError>;

    /// One client with its category, or `None` when the identity is unknown.
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError>;

    /// Insert a new row; the store assigns the identity.
    async fn insert(
        &self,
        draft: &ClientDraft,
        created_on: DateTime<Utc>,
    ) -> Result<Client, ClientRepositoryError>;

    /// Write back the mutable columns of an existing client.
    async fn save(&self, client: &Client) -> Result<Client, ClientRepositoryError>;

    /// Remove a client row.
    async fn remove(&self, id: ClientId) -> Result<(), ClientRepositoryError>;
}
