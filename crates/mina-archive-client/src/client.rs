//! GraphQL client for the Mina archive node API.
//!
//! [`ArchiveNodeClient`] is the seam consumed by the MCP tool layer;
//! [`MinaGraphQlClient`] implements it over HTTP with `reqwest`. Each call is
//! a single POST with no retries and no caching.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ArchiveClientError, ClientResult};
use crate::filter::{ActionFilterOptions, EventFilterOptions};
use crate::query::{actions_query, events_query, NETWORK_STATE_QUERY};
use crate::types::{
    ActionOutput, ActionsResponse, EventOutput, EventsResponse, NetworkStateOutput,
    NetworkStateResponse,
};

/// Longest slice of a non-success response body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Read-only queries against an archive node.
#[async_trait]
pub trait ArchiveNodeClient: Send + Sync + std::fmt::Debug {
    /// Current canonical and pending max block heights.
    async fn query_network_state(&self) -> ClientResult<NetworkStateOutput>;

    /// Events matching `filter`, in the order the server returned them.
    async fn query_events(&self, filter: &EventFilterOptions) -> ClientResult<Vec<EventOutput>>;

    /// Actions matching `filter`, in the order the server returned them.
    async fn query_actions(&self, filter: &ActionFilterOptions)
        -> ClientResult<Vec<ActionOutput>>;
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

impl GraphQlResponse {
    fn error_messages(&self) -> Option<Vec<String>> {
        self.errors
            .as_ref()
            .filter(|errors| !errors.is_empty())
            .map(|errors| errors.iter().map(|e| e.message.clone()).collect())
    }
}

/// HTTP client for a Mina archive node GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct MinaGraphQlClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl MinaGraphQlClient {
    /// Create a client using a default `reqwest` connection pool.
    pub fn new(endpoint: Url) -> Self {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(endpoint: Url, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }

    /// Parse `endpoint` and create a client for it.
    pub fn from_endpoint_str(endpoint: &str) -> ClientResult<Self> {
        let url = Url::parse(endpoint).map_err(|e| {
            ArchiveClientError::config_error(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        Ok(Self::new(url))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `query` and decode the `data` member of the response as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
    ) -> ClientResult<T> {
        debug!(operation, endpoint = %self.endpoint, "Sending GraphQL query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(operation, status = %status, bytes = body.len(), "Received GraphQL response");

        decode_response(status, &body)
    }
}

/// Classify and decode a raw GraphQL HTTP response.
///
/// GraphQL `errors` are protocol errors whatever the HTTP status. A non-2xx
/// status without them is a transport error.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    let envelope = serde_json::from_slice::<GraphQlResponse>(body);

    if !status.is_success() {
        if let Some(messages) = envelope.as_ref().ok().and_then(|e| e.error_messages()) {
            return Err(ArchiveClientError::GraphQlError { messages });
        }
        let text: String = String::from_utf8_lossy(body)
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        return Err(ArchiveClientError::api_error(status.as_u16(), text));
    }

    let envelope = envelope?;
    if let Some(messages) = envelope.error_messages() {
        return Err(ArchiveClientError::GraphQlError { messages });
    }

    match envelope.data {
        Some(serde_json::Value::Null) | None => Err(ArchiveClientError::invalid_response(
            "data",
            "missing from GraphQL response",
        )),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}

#[async_trait]
impl ArchiveNodeClient for MinaGraphQlClient {
    async fn query_network_state(&self) -> ClientResult<NetworkStateOutput> {
        let response: NetworkStateResponse =
            self.execute("networkState", NETWORK_STATE_QUERY).await?;
        Ok(response.network_state)
    }

    async fn query_events(&self, filter: &EventFilterOptions) -> ClientResult<Vec<EventOutput>> {
        let response: EventsResponse = self.execute("events", &events_query(filter)).await?;
        Ok(response.events)
    }

    async fn query_actions(
        &self,
        filter: &ActionFilterOptions,
    ) -> ClientResult<Vec<ActionOutput>> {
        let response: ActionsResponse = self.execute("actions", &actions_query(filter)).await?;
        Ok(response.actions)
    }
}
