//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use directory_backend::domain::ports::{CategoryRepository, ClientRepository};
use directory_backend::domain::{
    CategoriesService, ClientsService, ExampleDataSeeder, SeedOutcome, SeedingError,
};
use directory_backend::inbound::http::state::HttpState;
use directory_backend::outbound::memory::MemoryStore;
use directory_backend::outbound::persistence::{DieselCategoryRepository, DieselClientRepository};

use super::ServerConfig;

/// Build the services over one pair of repositories and optionally seed them.
async fn assemble<C, K>(
    categories: Arc<C>,
    clients: Arc<K>,
    seed_example_data: bool,
) -> Result<HttpState, SeedingError>
where
    C: CategoryRepository + 'static,
    K: ClientRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    if seed_example_data {
        let seeder = ExampleDataSeeder::new(categories.clone(), clients.clone(), clock.clone());
        if let SeedOutcome::Applied {
            categories,
            clients,
        } = seeder.seed_if_empty().await?
        {
            info!(categories, clients, "store seeded");
        }
    }

    Ok(HttpState::new(
        Arc::new(ClientsService::new(clients, clock)),
        Arc::new(CategoriesService::new(categories)),
    ))
}

/// Construct the HTTP state, using Diesel repositories when a pool is
/// configured and a shared [`MemoryStore`] otherwise.
///
/// # Errors
///
/// Returns [`SeedingError`] when sample data cannot be written.
pub(crate) async fn build_http_state(
    config: &ServerConfig,
) -> Result<web::Data<HttpState>, SeedingError> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            assemble(
                Arc::new(DieselCategoryRepository::new(pool.clone())),
                Arc::new(DieselClientRepository::new(pool.clone())),
                config.seed_example_data,
            )
            .await?
        }
        None => {
            info!("no database configured; using in-memory store");
            let store = Arc::new(MemoryStore::new());
            assemble(store.clone(), store, config.seed_example_data).await?
        }
    };
    Ok(web::Data::new(state))
}
