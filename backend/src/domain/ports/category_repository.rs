//! Port for category persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Category, CategoryDraft, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "category repository query failed: {message}",
    }
}

/// Storage contract for categories. Categories are list/create only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// One category, or `None` when the identity is unknown.
    async fn find_by_id(&self, id: CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;

    /// Insert a new row; the store assigns the identity.
    async fn insert(&self, draft: &CategoryDraft) -> Result<Category, CategoryRepositoryError>;
}
