//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` endpoint and the health probes, plus the
//! schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe the
//! error envelope without coupling domain types to utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported by
//! the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::dto::{CategoryPayload, CategoryResponse, ClientPayload, ClientResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clients directory API",
        description = "CRUD access to client records grouped by category, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::clients::list_clients,
        crate::inbound::http::clients::get_client,
        crate::inbound::http::clients::create_client,
        crate::inbound::http::clients::update_client,
        crate::inbound::http::clients::delete_client,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ClientPayload,
        ClientResponse,
        CategoryPayload,
        CategoryResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "clients", description = "Client records"),
        (name = "categories", description = "Client categories"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
