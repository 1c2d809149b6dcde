//! Domain primitives, services and ports.
//!
//! Purpose: Define the strongly typed client and category records used by the
//! API and persistence layers, the rules that validate them, and the services
//! that own identity assignment and not-found semantics.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Client, ClientFields, ClientDraft — client records before and after
//!   validation.
//! - Category, CategoryDraft — category records.
//! - ClientsService, CategoriesService — record data access.

pub mod categories_service;
pub mod category;
pub mod client;
pub mod clients_service;
pub mod error;
pub mod example_data;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::categories_service::CategoriesService;
pub use self::category::{Category, CategoryDraft, CategoryId};
pub use self::client::{
    Client, ClientDraft, ClientFields, ClientId, ClientStatus, ClientStatusError, StatusInput,
};
pub use self::clients_service::ClientsService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeeder, SeedOutcome, SeedingError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{ValidationErrors, Violation};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use directory_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
