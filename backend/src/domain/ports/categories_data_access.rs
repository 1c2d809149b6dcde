//! Driving port for category record data access.

use async_trait::async_trait;

use crate::domain::{Category, CategoryDraft, CategoryId, Error};

/// Category operations offered to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesDataAccess: Send + Sync {
    /// Every category.
    async fn list(&self) -> Result<Vec<Category>, Error>;

    /// One category, or a not-found error.
    async fn get_by_id(&self, id: CategoryId) -> Result<Category, Error>;

    /// Persist a new category with a server-assigned identity.
    async fn add(&self, draft: CategoryDraft) -> Result<Category, Error>;
}
