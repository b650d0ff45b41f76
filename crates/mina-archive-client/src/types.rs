//! Typed records returned by the archive node.
//!
//! Field names follow the GraphQL schema (camelCase on the wire). Sequences
//! keep the order the server returned them in; nothing here re-sorts.

use serde::{Deserialize, Serialize};

/// Identity and position of a single block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub height: u32,
    pub state_hash: String,
    pub parent_hash: String,
    pub ledger_hash: String,
    pub chain_status: String,
    /// Kept exactly as the server formats it.
    pub timestamp: String,
    pub global_slot_since_hardfork: u32,
    pub global_slot_since_genesis: u32,
    pub distance_from_max_block_height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub status: String,
    pub hash: String,
    pub memo: String,
    pub authorization_kind: String,
    pub sequence_number: u32,
    /// Call order of account updates within the transaction.
    pub zkapp_account_update_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub account_update_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_info: Option<TransactionInfo>,
    /// Field elements, string encoded, in emitted order.
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    pub account_update_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_info: Option<TransactionInfo>,
    /// Field elements, string encoded, in emitted order.
    pub data: Vec<String>,
}

/// The last five action-state hashes of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_state_one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_state_two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_state_three: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_state_four: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_state_five: Option<String>,
}

/// Events emitted in one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOutput {
    pub block_info: BlockInfo,
    pub event_data: Vec<EventData>,
}

/// Actions dispatched in one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutput {
    pub block_info: BlockInfo,
    pub transaction_info: TransactionInfo,
    pub action_data: Vec<ActionData>,
    pub action_state: ActionStates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxBlockHeightInfo {
    pub canonical_max_block_height: u32,
    pub pending_max_block_height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStateOutput {
    pub max_block_height: MaxBlockHeightInfo,
}

impl NetworkStateOutput {
    pub fn canonical_max_block_height(&self) -> u32 {
        self.max_block_height.canonical_max_block_height
    }

    pub fn pending_max_block_height(&self) -> u32 {
        self.max_block_height.pending_max_block_height
    }
}

/// `data` payload of the `events` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventOutput>,
}

/// `data` payload of the `actions` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub actions: Vec<ActionOutput>,
}

/// `data` payload of the `networkState` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStateResponse {
    pub network_state: NetworkStateOutput,
}
