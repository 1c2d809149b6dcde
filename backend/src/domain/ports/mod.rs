//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*DataAccess`) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod categories_data_access;
mod category_repository;
mod client_repository;
mod clients_data_access;

#[cfg(test)]
pub use categories_data_access::MockCategoriesDataAccess;
pub use categories_data_access::CategoriesDataAccess;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError};
#[cfg(test)]
pub use clients_data_access::MockClientsDataAccess;
pub use clients_data_access::ClientsDataAccess;
