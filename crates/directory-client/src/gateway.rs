//! Transport gateway: JSON over HTTP for the service wrappers.
//!
//! Every request carries `Accept` and `Content-Type` JSON headers. A 2xx
//! response resolves to its parsed body (`null` when empty); anything else,
//! including connection failures, becomes a [`TransportError`] holding the
//! raw response text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const JSON_ACCEPT: &str = "application/json";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(*status, response_text))]
pub struct TransportError {
    /// HTTP status, absent when no response arrived.
    pub status: Option<u16>,
    /// Raw response body, or the transport failure description.
    pub response_text: String,
}

fn describe(status: Option<u16>, response_text: &str) -> String {
    match status {
        Some(status) => format!("request failed with status {status}: {response_text}"),
        None => format!("request failed: {response_text}"),
    }
}

impl TransportError {
    /// Failure reported by the server.
    pub fn status(status: u16, response_text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            response_text: response_text.into(),
        }
    }

    /// Failure before a response was received, or while reading it.
    pub fn transport(response_text: impl Into<String>) -> Self {
        Self {
            status: None,
            response_text: response_text.into(),
        }
    }
}

/// Capability to perform JSON requests against the directory API.
///
/// Paths are relative to the gateway's base URL, e.g. `api/clients/4`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportGateway: Send + Sync {
    /// `GET` the resource at `path`.
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// `POST` `data` to `path`.
    async fn post(&self, path: &str, data: &Value) -> Result<Value, TransportError>;

    /// `PUT` `data` to `path`.
    async fn put(&self, path: &str, data: &Value) -> Result<Value, TransportError>;

    /// `DELETE` the resource at `path`.
    async fn delete(&self, path: &str) -> Result<Value, TransportError>;
}

/// Reqwest-backed gateway rooted at one base URL.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    /// Build a gateway with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = self
            .base
            .join(path)
            .map_err(|err| TransportError::transport(format!("invalid URL '{path}': {err}")))?;
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, JSON_ACCEPT)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(data) = data {
            let body = serde_json::to_vec(data)
                .map_err(|err| TransportError::transport(format!("unencodable body: {err}")))?;
            request = request.body(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "request rejected");
            return Err(TransportError::status(status.as_u16(), text));
        }
        parse_body(&text).map_err(|err| TransportError::status(status.as_u16(), err))
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    warn!(error = %error, "request failed");
    TransportError::transport(error.to_string())
}

fn parse_body(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|err| format!("invalid JSON response: {err}"))
}

#[async_trait]
impl TransportGateway for HttpGateway {
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, data: &Value) -> Result<Value, TransportError> {
        self.send(Method::POST, path, Some(data)).await
    }

    async fn put(&self, path: &str, data: &Value) -> Result<Value, TransportError> {
        self.send(Method::PUT, path, Some(data)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.send(Method::DELETE, path, None).await
    }
}
