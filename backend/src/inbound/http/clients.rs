//! Client HTTP handlers.
//!
//! ```text
//! GET    /api/clients
//! GET    /api/clients/{id}
//! POST   /api/clients
//! PUT    /api/clients/{id}
//! DELETE /api/clients/{id}
//! ```
//!
//! Identities are checked before any data access: a non-positive `{id}` is a
//! bad request. Writes report unexpected failures as 400 rather than 500.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{ClientFields, ClientId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{ClientPayload, ClientResponse};
use crate::inbound::http::error::as_client_write_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

fn read_id(raw: i32) -> Result<ClientId, Error> {
    if raw <= 0 {
        return Err(Error::invalid_request(format!("Invalid ID: {raw}")));
    }
    Ok(ClientId::new(raw))
}

fn write_id(raw: i32) -> Result<ClientId, Error> {
    if raw <= 0 {
        return Err(Error::invalid_request("Invalid ID."));
    }
    Ok(ClientId::new(raw))
}

/// List every client with its category.
#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "All clients", body = [ClientResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "listClients"
)]
#[get("/clients")]
pub async fn list_clients(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ClientResponse>>> {
    let clients = state.clients.list().await?;
    Ok(web::Json(
        clients.into_iter().map(ClientResponse::from).collect(),
    ))
}

/// Fetch one client.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id" = i32, Path, description = "Client identity")),
    responses(
        (status = 200, description = "Client", body = ClientResponse),
        (status = 400, description = "Invalid identity", body = ErrorSchema),
        (status = 404, description = "Unknown client", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "getClient"
)]
#[get("/clients/{id}")]
pub async fn get_client(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ClientResponse>> {
    let id = read_id(path.into_inner())?;
    let client = state.clients.get_by_id(id).await?;
    Ok(web::Json(ClientResponse::from(client)))
}

/// Create a client. Identity and creation time are assigned by the server.
#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = ClientPayload,
    responses(
        (
            status = 201,
            description = "Created client",
            headers(("Location" = String, description = "URL of the new client")),
            body = ClientResponse
        ),
        (status = 400, description = "Invalid model or failed write", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "createClient"
)]
#[post("/clients")]
pub async fn create_client(
    state: web::Data<HttpState>,
    payload: web::Json<ClientPayload>,
) -> ApiResult<HttpResponse> {
    let draft = ClientFields::from(payload.into_inner()).validate()?;
    let client = state
        .clients
        .add(draft)
        .await
        .map_err(as_client_write_error)?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/clients/{}", client.id)))
        .json(ClientResponse::from(client)))
}

/// Overwrite a client's mutable fields.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(("id" = i32, Path, description = "Client identity")),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Updated client", body = ClientResponse),
        (status = 400, description = "Invalid identity, invalid model or failed write", body = ErrorSchema),
        (status = 404, description = "Unknown client", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "updateClient"
)]
#[put("/clients/{id}")]
pub async fn update_client(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ClientPayload>,
) -> ApiResult<web::Json<ClientResponse>> {
    let id = write_id(path.into_inner())?;
    let draft = ClientFields::from(payload.into_inner()).validate()?;
    let client = state
        .clients
        .update(id, draft)
        .await
        .map_err(as_client_write_error)?;
    Ok(web::Json(ClientResponse::from(client)))
}

/// Remove a client.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(("id" = i32, Path, description = "Client identity")),
    responses(
        (status = 204, description = "Client removed"),
        (status = 400, description = "Invalid identity or failed write", body = ErrorSchema),
        (status = 404, description = "Unknown client", body = ErrorSchema)
    ),
    tags = ["clients"],
    operation_id = "deleteClient"
)]
#[delete("/clients/{id}")]
pub async fn delete_client(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = write_id(path.into_inner())?;
    state
        .clients
        .delete(id)
        .await
        .map_err(as_client_write_error)?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "clients_tests.rs"]
mod tests;
