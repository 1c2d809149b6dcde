//! Client record data access.
//!
//! Implements [`ClientsDataAccess`] over a [`ClientRepository`]. The service
//! owns the rules the store does not: identities and creation timestamps are
//! assigned here, never taken from callers, and unknown identities surface as
//! [`crate::domain::ErrorCode::NotFound`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::category::category_not_found_message;
use crate::domain::client::client_not_found_message;
use crate::domain::ports::{ClientRepository, ClientRepositoryError, ClientsDataAccess};
use crate::domain::{Client, ClientDraft, ClientId, Error};

/// Client service implementing the driving port.
#[derive(Clone)]
pub struct ClientsService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ClientsService<R> {
    /// Create a service over `repo`, stamping new records with `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use directory_backend::domain::ClientsService;
    /// # use directory_backend::outbound::memory::MemoryStore;
    /// # use mockable::DefaultClock;
    /// let service = ClientsService::new(Arc::new(MemoryStore::new()), Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

pub(crate) fn map_client_repository_error(error: ClientRepositoryError) -> Error {
    match error {
        ClientRepositoryError::Connection { message } => {
            Error::internal(format!("client repository unavailable: {message}"))
        }
        ClientRepositoryError::Query { message } => {
            Error::internal(format!("client repository error: {message}"))
        }
        ClientRepositoryError::MissingCategory { category_id } => {
            Error::invalid_request(category_not_found_message(category_id))
        }
    }
}

impl<R> ClientsService<R>
where
    R: ClientRepository,
{
    async fn require(&self, id: ClientId) -> Result<Client, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_client_repository_error)?
            .ok_or_else(|| Error::not_found(client_not_found_message(id)))
    }
}

#[async_trait]
impl<R> ClientsDataAccess for ClientsService<R>
where
    R: ClientRepository,
{
    async fn list(&self) -> Result<Vec<Client>, Error> {
        let clients = self
            .repo
            .list()
            .await
            .map_err(map_client_repository_error)?;
        debug!(count = clients.len(), "listed clients");
        Ok(clients)
    }

    async fn get_by_id(&self, id: ClientId) -> Result<Client, Error> {
        self.require(id).await
    }

    async fn add(&self, draft: ClientDraft) -> Result<Client, Error> {
        let created_on = self.clock.utc();
        let client = self
            .repo
            .insert(&draft, created_on)
            .await
            .map_err(map_client_repository_error)?;
        info!(client_id = %client.id, "client created");
        Ok(client)
    }

    async fn update(&self, id: ClientId, draft: ClientDraft) -> Result<Client, Error> {
        let mut client = self.require(id).await?;
        client.apply(&draft);
        let saved = self
            .repo
            .save(&client)
            .await
            .map_err(map_client_repository_error)?;
        info!(client_id = %saved.id, "client updated");
        Ok(saved)
    }

    async fn delete(&self, id: ClientId) -> Result<(), Error> {
        let client = self.require(id).await?;
        self.repo
            .remove(client.id)
            .await
            .map_err(map_client_repository_error)?;
        info!(client_id = %id, "client deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "clients_service_tests.rs"]
mod tests;
