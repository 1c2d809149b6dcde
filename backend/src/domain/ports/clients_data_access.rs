//! Driving port for client record data access.
//!
//! Inbound adapters call this port; [`crate::domain::ClientsService`] is the
//! production implementation. Failures are already mapped onto
//! [`crate::domain::Error`], with [`crate::domain::ErrorCode::NotFound`]
//! reserved for identities that do not resolve.

use async_trait::async_trait;

use crate::domain::{Client, ClientDraft, ClientId, Error};

/// Client operations offered to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientsDataAccess: Send + Sync {
    /// Every client, each joined with its category.
    async fn list(&self) -> Result<Vec<Client>, Error>;

    /// One client, or a not-found error.
    async fn get_by_id(&self, id: ClientId) -> Result<Client, Error>;

    /// Persist a new client; identity and creation time are server-assigned.
    async fn add(&self, draft: ClientDraft) -> Result<Client, Error>;

    /// Overwrite the mutable fields of an existing client.
    async fn update(&self, id: ClientId, draft: ClientDraft) -> Result<Client, Error>;

    /// Remove an existing client.
    async fn delete(&self, id: ClientId) -> Result<(), Error>;
}
