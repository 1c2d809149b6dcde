//! Sample data seeding.
//!
//! Populates an empty directory with three categories and five clients so a
//! fresh deployment has something to browse. Seeding is skipped as soon as
//! either table holds a row.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, ClientRepository, ClientRepositoryError,
};
use crate::domain::validation::ValidationErrors;
use crate::domain::{CategoryDraft, ClientFields, StatusInput};

const SAMPLE_CATEGORIES: [&str; 3] = ["Partners", "日本IT企業", "Other"];

/// Sample fax and phone numbers are multiples of this.
const NUMBER_STEP: usize = 111_111;

/// Category index and status code for each sample client, in insertion order.
const SAMPLE_CLIENTS: [(usize, i64); 5] = [(0, 0), (1, 1), (2, 2), (0, 3), (1, 0)];

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Sample rows were inserted.
    Applied {
        /// Categories inserted.
        categories: usize,
        /// Clients inserted.
        clients: usize,
    },
    /// The store already held data.
    AlreadyPopulated,
}

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// A sample record broke a field rule.
    #[error("sample data failed validation: {0}")]
    Invalid(#[from] ValidationErrors),
    /// The category store rejected a call.
    #[error("category seeding failed: {0}")]
    Categories(#[from] CategoryRepositoryError),
    /// The client store rejected a call.
    #[error("client seeding failed: {0}")]
    Clients(#[from] ClientRepositoryError),
}

/// Seeds sample categories and clients into empty stores.
#[derive(Clone)]
pub struct ExampleDataSeeder<C, K> {
    categories: Arc<C>,
    clients: Arc<K>,
    clock: Arc<dyn Clock>,
}

impl<C, K> ExampleDataSeeder<C, K> {
    /// Create a seeder over both repositories.
    pub fn new(categories: Arc<C>, clients: Arc<K>, clock: Arc<dyn Clock>) -> Self {
        Self {
            categories,
            clients,
            clock,
        }
    }
}

fn sample_client(number: usize, category_id: i32, status: i64) -> ClientFields {
    let fax = NUMBER_STEP * number;
    let phone = fax + NUMBER_STEP;
    ClientFields {
        name: Some(format!("Name{number}")),
        email: Some(format!("name{number}@ignas.me")),
        phone: Some(phone.to_string()),
        fax: Some(fax.to_string()),
        address: Some(format!("{number} Street, East Sussex, BN1 4AA, Brighton, UK")),
        status: Some(StatusInput::Code(status)),
        category_id: Some(i64::from(category_id)),
    }
}

impl<C, K> ExampleDataSeeder<C, K>
where
    C: CategoryRepository,
    K: ClientRepository,
{
    /// Insert the sample rows unless either store already holds data.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError`] when a repository call fails.
    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, SeedingError> {
        if !self.categories.list().await?.is_empty() || !self.clients.list().await?.is_empty() {
            info!("directory already populated; skipping sample data");
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let mut category_ids = Vec::with_capacity(SAMPLE_CATEGORIES.len());
        for name in SAMPLE_CATEGORIES {
            let draft = CategoryDraft::new(Some(name.to_owned()))?;
            category_ids.push(self.categories.insert(&draft).await?.id);
        }

        let created_on = self.clock.utc();
        let mut clients = 0;
        for (offset, (category_index, status)) in SAMPLE_CLIENTS.into_iter().enumerate() {
            let Some(category_id) = category_ids.get(category_index) else {
                continue;
            };
            let draft = sample_client(offset + 1, category_id.get(), status).validate()?;
            self.clients.insert(&draft, created_on).await?;
            clients += 1;
        }

        info!(
            categories = category_ids.len(),
            clients,
            "sample data applied"
        );
        Ok(SeedOutcome::Applied {
            categories: category_ids.len(),
            clients,
        })
    }
}
