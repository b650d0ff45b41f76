//! MCP ServerHandler implementation for the Mina archive node.
//!
//! Exposes three read-only tools backed by an [`ArchiveNodeClient`]:
//!
//! - `query-actions`: Actions dispatched by an account, with optional filters
//! - `query-events`: Events emitted by an account, with optional filters
//! - `get-network-state`: Canonical and pending max block heights
//!
//! Each call validates its input, performs one archive node query, and returns
//! the full result as pretty-printed JSON. Client failures become MCP errors
//! naming the operation.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler};
use tracing::debug;
use validator::Validate;

use mina_archive_client::{
    ActionFilterOptions, ActionsResponse, ArchiveNodeClient, EventFilterOptions, EventsResponse,
    MinaGraphQlClient, NetworkStateResponse,
};

use crate::config::ServerConfig;
use crate::tools::helpers::{invalid_params, json_content, tool_failure};
use crate::tools::*;

/// Mina archive node MCP server handler.
#[derive(Debug, Clone)]
pub struct MinaArchiveMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<dyn ArchiveNodeClient>,
    name: String,
}

impl MinaArchiveMcpServer {
    /// Create a server around any archive node client.
    pub fn new(client: Arc<dyn ArchiveNodeClient>, name: impl Into<String>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
            name: name.into(),
        }
    }

    /// Create a server that queries the endpoint in `config` over HTTP.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let client = MinaGraphQlClient::new(config.endpoint_url()?);
        Ok(Self::new(Arc::new(client), config.name.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MinaArchiveMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "Mina archive node tools for zkApp history. \
             Use get-network-state to find the current canonical and pending max block heights, \
             then query-events or query-actions for a zkApp account. \
             address must be a base58 Mina public key (B62q...). \
             Optional filters: tokenId, status (ALL, PENDING or CANONICAL), from/to block heights; \
             query-actions also accepts fromActionState/endActionState. \
             Results are returned unfiltered as JSON."
            .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                title: Some("Mina Archive Node MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some("MCP Server for Mina Archive Node API".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[tool_router(router = tool_router)]
impl MinaArchiveMcpServer {
    /// Query actions dispatched by a zkApp account.
    #[tool(
        name = "query-actions",
        description = "Query actions from the Mina blockchain with optional filters. Returns block info, transaction info, action data and the last five action states for each match."
    )]
    pub async fn query_actions(
        &self,
        Parameters(params): Parameters<QueryActionsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Err(errors) = params.validate() {
            return Err(invalid_params("query actions", &errors));
        }

        let filter = ActionFilterOptions::from(params);
        debug!(address = %filter.address, "query-actions");

        match self.client.query_actions(&filter).await {
            Ok(actions) => json_content(&ActionsResponse { actions }),
            Err(e) => Err(tool_failure("query actions", &e)),
        }
    }

    /// Query events emitted by a zkApp account.
    #[tool(
        name = "query-events",
        description = "Query events from the Mina blockchain with optional filters. Returns block info and event data (with transaction info) for each match."
    )]
    pub async fn query_events(
        &self,
        Parameters(params): Parameters<QueryEventsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Err(errors) = params.validate() {
            return Err(invalid_params("query events", &errors));
        }

        let filter = EventFilterOptions::from(params);
        debug!(address = %filter.address, "query-events");

        match self.client.query_events(&filter).await {
            Ok(events) => json_content(&EventsResponse { events }),
            Err(e) => Err(tool_failure("query events", &e)),
        }
    }

    /// Current canonical and pending max block heights.
    #[tool(
        name = "get-network-state",
        description = "Get the current state of the Mina network: canonical and pending max block heights."
    )]
    pub async fn get_network_state(&self) -> Result<CallToolResult, ErrorData> {
        debug!("get-network-state");

        match self.client.query_network_state().await {
            Ok(network_state) => json_content(&NetworkStateResponse { network_state }),
            Err(e) => Err(tool_failure("get network state", &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mina_archive_client::{
        ActionOutput, ActionStates, ArchiveClientError, BlockInfo, BlockStatusFilter,
        ClientResult, EventData, EventOutput, MaxBlockHeightInfo, NetworkStateOutput,
        TransactionInfo,
    };
    use rmcp::model::ErrorCode;

    const VALID_ADDRESS: &str = "B62qkYa1o6Mj6uTTjDQXGesgV6McZpWaC5vvF1Rf8U5kQ9gv9gK9fVe";

    /// In-memory client that records calls and returns canned data.
    #[derive(Debug, Default)]
    struct StubClient {
        calls: AtomicUsize,
        fail: bool,
        last_event_filter: Mutex<Option<EventFilterOptions>>,
        last_action_filter: Mutex<Option<ActionFilterOptions>>,
    }

    impl StubClient {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn check(&self) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ArchiveClientError::GraphQlError {
                    messages: vec!["Cannot query field \"bogus\"".to_string()],
                })
            } else {
                Ok(())
            }
        }
    }

    fn block_info() -> BlockInfo {
        BlockInfo {
            height: 349521,
            state_hash: "3NKoS7Cv3pQzH9jFLCxJM3tBpt4hFmcpKqKcDo6ZtXcKWNTKnNDo".to_string(),
            parent_hash: "3NKRVMvfNcVfq9JMNbJVXwmmwAz8nTgXPG3TodrpKudwRpGGHyBq".to_string(),
            ledger_hash: "jxVLvFcBbRCDSM8MHLam6UPVPo2KDegbzJN6MTZWyhTvDrPcjYk".to_string(),
            chain_status: "canonical".to_string(),
            timestamp: "1715197080000".to_string(),
            global_slot_since_hardfork: 153211,
            global_slot_since_genesis: 153211,
            distance_from_max_block_height: 15,
        }
    }

    fn transaction_info() -> TransactionInfo {
        TransactionInfo {
            status: "applied".to_string(),
            hash: "5JuBTnPRWxAaZnNR4hTSfGKx5ZbUbvDxf3bdMi8P8rSJdUGHHaS".to_string(),
            memo: "E4YM2vTHhWEg66xpj52JErHUBU4pZ1yageL4TVDDpTTSsv8mK6YaH".to_string(),
            authorization_kind: "Proof".to_string(),
            sequence_number: 1,
            zkapp_account_update_ids: vec![5, 2],
        }
    }

    #[async_trait]
    impl ArchiveNodeClient for StubClient {
        async fn query_network_state(&self) -> ClientResult<NetworkStateOutput> {
            self.check()?;
            Ok(NetworkStateOutput {
                max_block_height: MaxBlockHeightInfo {
                    canonical_max_block_height: 349506,
                    pending_max_block_height: 349521,
                },
            })
        }

        async fn query_events(
            &self,
            filter: &EventFilterOptions,
        ) -> ClientResult<Vec<EventOutput>> {
            *self.last_event_filter.lock().unwrap() = Some(filter.clone());
            self.check()?;
            Ok(vec![EventOutput {
                block_info: block_info(),
                event_data: vec![EventData {
                    account_update_id: "5".to_string(),
                    transaction_info: Some(transaction_info()),
                    data: vec!["2".to_string(), "1".to_string()],
                }],
            }])
        }

        async fn query_actions(
            &self,
            filter: &ActionFilterOptions,
        ) -> ClientResult<Vec<ActionOutput>> {
            *self.last_action_filter.lock().unwrap() = Some(filter.clone());
            self.check()?;
            Ok(vec![ActionOutput {
                block_info: block_info(),
                transaction_info: transaction_info(),
                action_data: Vec::new(),
                action_state: ActionStates {
                    action_state_one: Some("1".to_string()),
                    ..ActionStates::default()
                },
            }])
        }
    }

    fn server_with(client: Arc<StubClient>) -> MinaArchiveMcpServer {
        MinaArchiveMcpServer::new(client, "test-archive")
    }

    fn result_json(result: &CallToolResult) -> serde_json::Value {
        let text = result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.as_str())
            .expect("Expected text content");
        serde_json::from_str(text).unwrap()
    }

    fn event_params(address: &str) -> QueryEventsParams {
        QueryEventsParams {
            address: address.to_string(),
            token_id: None,
            status: Some(BlockStatusFilter::Pending),
            to: None,
            from: Some(10),
        }
    }

    #[test]
    fn test_server_info() {
        let server = server_with(Arc::new(StubClient::default()));
        let info = server.get_info();

        assert_eq!(info.server_info.name, "test-archive");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains("query-events"));
        assert!(instructions.contains("query-actions"));
        assert!(instructions.contains("get-network-state"));
    }

    #[test]
    fn test_from_config_uses_configured_name() {
        let config = ServerConfig {
            name: "devnet".to_string(),
            endpoint: "http://localhost:8282/".to_string(),
        };
        let server = MinaArchiveMcpServer::from_config(&config).unwrap();
        assert_eq!(server.name(), "devnet");
    }

    #[tokio::test]
    async fn test_query_events_forwards_filter_and_wraps_result() {
        let client = Arc::new(StubClient::default());
        let server = server_with(client.clone());

        let result = server
            .query_events(Parameters(event_params(VALID_ADDRESS)))
            .await
            .unwrap();

        let forwarded = client.last_event_filter.lock().unwrap().clone().unwrap();
        assert_eq!(forwarded.status, Some(BlockStatusFilter::Pending));
        assert_eq!(forwarded.from, Some(10));
        assert!(forwarded.to.is_none());

        let parsed = result_json(&result);
        let event = &parsed["events"][0];
        assert_eq!(event["blockInfo"]["height"], 349521);
        assert_eq!(event["eventData"][0]["data"], serde_json::json!(["2", "1"]));
        assert_eq!(
            event["eventData"][0]["transactionInfo"]["zkappAccountUpdateIds"],
            serde_json::json!([5, 2])
        );
    }

    #[tokio::test]
    async fn test_invalid_address_rejected_before_client_call() {
        let client = Arc::new(StubClient::default());
        let server = server_with(client.clone());

        let err = server
            .query_events(Parameters(event_params("not-an-address")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("address"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_query_events_failure_names_operation() {
        let client = Arc::new(StubClient::failing());
        let server = server_with(client.clone());

        let err = server
            .query_events(Parameters(event_params(VALID_ADDRESS)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.starts_with("Failed to query events:"));
        assert!(err.message.contains("bogus"));
        assert_eq!(err.data, Some(serde_json::json!({ "kind": "protocol" })));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_query_actions_forwards_action_state_window() {
        let client = Arc::new(StubClient::default());
        let server = server_with(client.clone());

        let result = server
            .query_actions(Parameters(QueryActionsParams {
                address: VALID_ADDRESS.to_string(),
                token_id: None,
                status: None,
                to: None,
                from: None,
                from_action_state: Some("11".to_string()),
                end_action_state: Some("22".to_string()),
            }))
            .await
            .unwrap();

        let forwarded = client.last_action_filter.lock().unwrap().clone().unwrap();
        assert_eq!(forwarded.from_action_state.as_deref(), Some("11"));
        assert_eq!(forwarded.end_action_state.as_deref(), Some("22"));

        let parsed = result_json(&result);
        let action = &parsed["actions"][0];
        assert_eq!(action["actionState"]["actionStateOne"], "1");
        assert!(action["actionState"].get("actionStateTwo").is_none());
        assert_eq!(action["transactionInfo"]["authorizationKind"], "Proof");
    }

    #[tokio::test]
    async fn test_query_actions_failure_names_operation() {
        let server = server_with(Arc::new(StubClient::failing()));
        let err = server
            .query_actions(Parameters(QueryActionsParams {
                address: VALID_ADDRESS.to_string(),
                token_id: None,
                status: None,
                to: None,
                from: None,
                from_action_state: None,
                end_action_state: None,
            }))
            .await
            .unwrap_err();
        assert!(err.message.starts_with("Failed to query actions:"));
    }

    #[tokio::test]
    async fn test_get_network_state() {
        let server = server_with(Arc::new(StubClient::default()));
        let result = server.get_network_state().await.unwrap();

        assert_eq!(
            result_json(&result),
            serde_json::json!({
                "networkState": {
                    "maxBlockHeight": {
                        "canonicalMaxBlockHeight": 349506,
                        "pendingMaxBlockHeight": 349521
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_get_network_state_failure_names_operation() {
        let server = server_with(Arc::new(StubClient::failing()));
        let err = server.get_network_state().await.unwrap_err();
        assert!(err.message.starts_with("Failed to get network state:"));
    }
}
