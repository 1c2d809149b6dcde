//! Category record data access.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::category::category_not_found_message;
use crate::domain::ports::{CategoriesDataAccess, CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryDraft, CategoryId, Error};

/// Category service implementing the driving port.
#[derive(Clone)]
pub struct CategoriesService<R> {
    repo: Arc<R>,
}

impl<R> CategoriesService<R> {
    /// Create a service over `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_category_repository_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::internal(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> CategoriesDataAccess for CategoriesService<R>
where
    R: CategoryRepository,
{
    async fn list(&self) -> Result<Vec<Category>, Error> {
        let categories = self
            .repo
            .list()
            .await
            .map_err(map_category_repository_error)?;
        debug!(count = categories.len(), "listed categories");
        Ok(categories)
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Category, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_category_repository_error)?
            .ok_or_else(|| Error::not_found(category_not_found_message(id)))
    }

    async fn add(&self, draft: CategoryDraft) -> Result<Category, Error> {
        let category = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_category_repository_error)?;
        info!(category_id = %category.id, "category created");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockCategoryRepository;

    fn make_service(repo: MockCategoryRepository) -> CategoriesService<MockCategoryRepository> {
        CategoriesService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn add_returns_stored_category() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert()
            .withf(|draft| draft.name() == "Partners")
            .times(1)
            .return_once(|draft| {
                Ok(Category {
                    id: CategoryId::new(4),
                    name: draft.name().to_owned(),
                })
            });

        let draft = CategoryDraft::new(Some("Partners".into())).expect("valid draft");
        let category = make_service(repo).add(draft).await.expect("add succeeds");
        assert_eq!(category.id, CategoryId::new(4));
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = make_service(repo)
            .get_by_id(CategoryId::new(9))
            .await
            .expect_err("not found");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Category with ID='9' not found.");
    }

    #[tokio::test]
    async fn connection_failures_are_internal() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(CategoryRepositoryError::connection("refused")));

        let error = make_service(repo).list().await.expect_err("failure");
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains("refused"));
    }
}
