//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoriesDataAccess, ClientsDataAccess};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Client record access.
    pub clients: Arc<dyn ClientsDataAccess>,
    /// Category record access.
    pub categories: Arc<dyn CategoriesDataAccess>,
}

impl HttpState {
    /// Construct state from the record data access ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use directory_backend::domain::{CategoriesService, ClientsService};
    /// use directory_backend::inbound::http::state::HttpState;
    /// use directory_backend::outbound::memory::MemoryStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// let state = HttpState::new(
    ///     Arc::new(ClientsService::new(store.clone(), Arc::new(DefaultClock))),
    ///     Arc::new(CategoriesService::new(store)),
    /// );
    /// let _ = state.clients.clone();
    /// ```
    pub fn new(
        clients: Arc<dyn ClientsDataAccess>,
        categories: Arc<dyn CategoriesDataAccess>,
    ) -> Self {
        Self {
            clients,
            categories,
        }
    }
}
