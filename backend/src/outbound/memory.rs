//! In-memory store implementing both repository ports.
//!
//! Used when no database URL is configured, and by integration tests. Clients
//! and categories share one lock so reads can join and writes can check the
//! category reference atomically.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, ClientRepository, ClientRepositoryError,
};
use crate::domain::{Category, CategoryDraft, CategoryId, Client, ClientDraft, ClientId};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    clients: BTreeMap<ClientId, Client>,
    last_category_id: i32,
    last_client_id: i32,
}

impl Tables {
    fn join(&self, client: &Client) -> Client {
        let mut joined = client.clone();
        joined.category = self.categories.get(&client.category_id).cloned();
        joined
    }

    fn require_category(&self, id: CategoryId) -> Result<(), ClientRepositoryError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(ClientRepositoryError::missing_category(id))
        }
    }
}

/// Process-local directory store. Identities start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert(&self, draft: &CategoryDraft) -> Result<Category, CategoryRepositoryError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id = tables
            .last_category_id
            .checked_add(1)
            .ok_or_else(|| CategoryRepositoryError::query("category identities exhausted"))?;
        let category = Category {
            id: CategoryId::new(tables.last_category_id),
            name: draft.name().to_owned(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.values().map(|client| tables.join(client)).collect())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.get(&id).map(|client| tables.join(client)))
    }

    async fn insert(
        &self,
        draft: &ClientDraft,
        created_on: DateTime<Utc>,
    ) -> Result<Client, ClientRepositoryError> {
        let mut tables = self.tables.write().await;
        tables.require_category(draft.category_id())?;
        tables.last_client_id = tables
            .last_client_id
            .checked_add(1)
            .ok_or_else(|| ClientRepositoryError::query("client identities exhausted"))?;
        let client = draft
            .clone()
            .into_client(ClientId::new(tables.last_client_id), created_on);
        tables.clients.insert(client.id, client.clone());
        Ok(tables.join(&client))
    }

    async fn save(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let mut tables = self.tables.write().await;
        tables.require_category(client.category_id)?;
        let Some(stored) = tables.clients.get_mut(&client.id) else {
            return Err(ClientRepositoryError::query(format!(
                "client {} vanished before update",
                client.id
            )));
        };
        let created_on = stored.created_on;
        *stored = Client {
            created_on,
            category: None,
            ..client.clone()
        };
        let saved = stored.clone();
        Ok(tables.join(&saved))
    }

    async fn remove(&self, id: ClientId) -> Result<(), ClientRepositoryError> {
        self.tables.write().await.clients.remove(&id);
        Ok(())
    }
}
