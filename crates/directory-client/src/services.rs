//! Per-entity service wrappers over the [`TransportGateway`].
//!
//! The editor and the directory depend on the capability traits; the
//! `Gateway*` types are the production implementations.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::gateway::{TransportError, TransportGateway};
use crate::records::{CategoryRecord, ClientRecord, ClientSubmission};

const CLIENTS_PATH: &str = "api/clients";
const CATEGORIES_PATH: &str = "api/categories";

/// Client record operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRecords: Send + Sync {
    /// Every client with its category.
    async fn list(&self) -> Result<Vec<ClientRecord>, TransportError>;

    /// One client by identity.
    async fn get(&self, client_id: i32) -> Result<ClientRecord, TransportError>;

    /// Create a client; the server assigns identity and creation time.
    async fn create(&self, client: &ClientSubmission) -> Result<ClientRecord, TransportError>;

    /// Overwrite the mutable fields of an existing client.
    async fn update(
        &self,
        client_id: i32,
        client: &ClientSubmission,
    ) -> Result<ClientRecord, TransportError>;

    /// Remove a client.
    async fn delete(&self, client_id: i32) -> Result<(), TransportError>;
}

/// Category listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryListing: Send + Sync {
    /// Every category.
    async fn list(&self) -> Result<Vec<CategoryRecord>, TransportError>;
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value)
        .map_err(|err| TransportError::transport(format!("unexpected response: {err}")))
}

fn encode(client: &ClientSubmission) -> Result<Value, TransportError> {
    serde_json::to_value(client)
        .map_err(|err| TransportError::transport(format!("unencodable client: {err}")))
}

fn logged<T>(operation: &str, result: Result<T, TransportError>) -> Result<T, TransportError> {
    if let Err(err) = &result {
        error!(operation, status = ?err.status, "{}", err.response_text);
    }
    result
}

/// [`ClientRecords`] over the `/api/clients` endpoints.
#[derive(Clone)]
pub struct GatewayClientRecords {
    gateway: Arc<dyn TransportGateway>,
}

impl GatewayClientRecords {
    /// Wrap a gateway.
    pub fn new(gateway: Arc<dyn TransportGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ClientRecords for GatewayClientRecords {
    async fn list(&self) -> Result<Vec<ClientRecord>, TransportError> {
        let result = self.gateway.get(CLIENTS_PATH).await.and_then(decode);
        logged("list clients", result)
    }

    async fn get(&self, client_id: i32) -> Result<ClientRecord, TransportError> {
        let result = self
            .gateway
            .get(&format!("{CLIENTS_PATH}/{client_id}"))
            .await
            .and_then(decode);
        logged("get client", result)
    }

    async fn create(&self, client: &ClientSubmission) -> Result<ClientRecord, TransportError> {
        let body = encode(client)?;
        let result = self.gateway.post(CLIENTS_PATH, &body).await.and_then(decode);
        logged("create client", result)
    }

    async fn update(
        &self,
        client_id: i32,
        client: &ClientSubmission,
    ) -> Result<ClientRecord, TransportError> {
        let body = encode(client)?;
        let result = self
            .gateway
            .put(&format!("{CLIENTS_PATH}/{client_id}"), &body)
            .await
            .and_then(decode);
        logged("update client", result)
    }

    async fn delete(&self, client_id: i32) -> Result<(), TransportError> {
        let result = self
            .gateway
            .delete(&format!("{CLIENTS_PATH}/{client_id}"))
            .await
            .map(|_| ());
        logged("delete client", result)
    }
}

/// [`CategoryListing`] over `GET /api/categories`.
#[derive(Clone)]
pub struct GatewayCategoryListing {
    gateway: Arc<dyn TransportGateway>,
}

impl GatewayCategoryListing {
    /// Wrap a gateway.
    pub fn new(gateway: Arc<dyn TransportGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CategoryListing for GatewayCategoryListing {
    async fn list(&self) -> Result<Vec<CategoryRecord>, TransportError> {
        let result = self.gateway.get(CATEGORIES_PATH).await.and_then(decode);
        logged("list categories", result)
    }
}
