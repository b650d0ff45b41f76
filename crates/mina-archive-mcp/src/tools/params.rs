//! Parameter structs for all MCP tools.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;
use validator::Validate;

use mina_archive_client::{ActionFilterOptions, BlockStatusFilter, EventFilterOptions};

/// Mina public key: base58 alphabet (no `0`, `O`, `I`, `l`), 55 to 60 characters.
pub const MINA_ADDRESS_PATTERN: &str = r"^[1-9A-HJ-NP-Za-km-z]{55,60}$";

pub static MINA_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MINA_ADDRESS_PATTERN).expect("address pattern is a valid regex"));

fn mina_address_schema(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "pattern": MINA_ADDRESS_PATTERN,
        "description": "Mina account address (base58 public key, e.g. B62q...)"
    })
}

// ── query-events ──

/// Parameters for the `query-events` tool.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryEventsParams {
    /// Account that emitted the events.
    #[schemars(schema_with = "mina_address_schema")]
    #[validate(regex(path = *MINA_ADDRESS_RE, message = "Invalid Mina address format"))]
    pub address: String,
    /// Token ID of the account.
    #[schemars(description = "Token ID to filter events")]
    pub token_id: Option<String>,
    /// Block status filter.
    #[schemars(description = "Block status to filter: ALL, PENDING or CANONICAL")]
    pub status: Option<BlockStatusFilter>,
    /// Upper block height bound.
    #[schemars(description = "Highest block height to include")]
    pub to: Option<u32>,
    /// Lower block height bound.
    #[schemars(description = "Lowest block height to include")]
    pub from: Option<u32>,
}

impl From<QueryEventsParams> for EventFilterOptions {
    fn from(params: QueryEventsParams) -> Self {
        EventFilterOptions {
            address: params.address,
            token_id: params.token_id,
            status: params.status,
            to: params.to,
            from: params.from,
        }
    }
}

// ── query-actions ──

/// Parameters for the `query-actions` tool.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryActionsParams {
    /// Account that dispatched the actions.
    #[schemars(schema_with = "mina_address_schema")]
    #[validate(regex(path = *MINA_ADDRESS_RE, message = "Invalid Mina address format"))]
    pub address: String,
    #[schemars(description = "Token ID to filter actions")]
    pub token_id: Option<String>,
    #[schemars(description = "Block status to filter: ALL, PENDING or CANONICAL")]
    pub status: Option<BlockStatusFilter>,
    #[schemars(description = "Highest block height to include")]
    pub to: Option<u32>,
    #[schemars(description = "Lowest block height to include")]
    pub from: Option<u32>,
    /// Start of the action-state window.
    #[schemars(description = "Action state hash to start from")]
    pub from_action_state: Option<String>,
    /// End of the action-state window.
    #[schemars(description = "Action state hash to end at")]
    pub end_action_state: Option<String>,
}

impl From<QueryActionsParams> for ActionFilterOptions {
    fn from(params: QueryActionsParams) -> Self {
        ActionFilterOptions {
            address: params.address,
            token_id: params.token_id,
            status: params.status,
            to: params.to,
            from: params.from,
            from_action_state: params.from_action_state,
            end_action_state: params.end_action_state,
        }
    }
}
