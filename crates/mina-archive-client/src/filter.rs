//! Filter options for the `events` and `actions` root queries.
//!
//! Only `address` is required. Every other field is optional and, when unset,
//! is left out of the generated query entirely rather than sent as `null`.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::query::{InputObject, ToInputObject};

/// Block consensus status used to filter query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockStatusFilter {
    /// Both pending and canonical blocks
    All,
    /// Blocks not yet finalized
    Pending,
    /// Blocks on the canonical chain
    Canonical,
}

impl BlockStatusFilter {
    /// The GraphQL enum identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Pending => "PENDING",
            Self::Canonical => "CANONICAL",
        }
    }
}

impl std::fmt::Display for BlockStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "PENDING" => Ok(Self::Pending),
            "CANONICAL" => Ok(Self::Canonical),
            _ => Err(format!(
                "Unknown block status '{}'. Valid values: ALL, PENDING, CANONICAL",
                s
            )),
        }
    }
}

/// Options for filtering events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilterOptions {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BlockStatusFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

impl EventFilterOptions {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub fn with_status(mut self, status: BlockStatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict results to blocks in `from..=to`.
    pub fn with_height_range(mut self, from: Option<u32>, to: Option<u32>) -> Self {
        self.from = from;
        self.to = to;
        self
    }
}

impl ToInputObject for EventFilterOptions {
    fn to_input_object(&self) -> InputObject {
        InputObject::new()
            .field("address", self.address.as_str())
            .optional_field("tokenId", self.token_id.as_deref())
            .optional_field("status", self.status)
            .optional_field("to", self.to)
            .optional_field("from", self.from)
    }
}

/// Options for filtering actions.
///
/// Extends the event filter with an action-state window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionFilterOptions {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BlockStatusFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_action_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_action_state: Option<String>,
}

impl ActionFilterOptions {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub fn with_status(mut self, status: BlockStatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict results to blocks in `from..=to`.
    pub fn with_height_range(mut self, from: Option<u32>, to: Option<u32>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_action_state_range(
        mut self,
        from_action_state: Option<String>,
        end_action_state: Option<String>,
    ) -> Self {
        self.from_action_state = from_action_state;
        self.end_action_state = end_action_state;
        self
    }
}

impl ToInputObject for ActionFilterOptions {
    fn to_input_object(&self) -> InputObject {
        InputObject::new()
            .field("address", self.address.as_str())
            .optional_field("tokenId", self.token_id.as_deref())
            .optional_field("status", self.status)
            .optional_field("to", self.to)
            .optional_field("from", self.from)
            .optional_field("fromActionState", self.from_action_state.as_deref())
            .optional_field("endActionState", self.end_action_state.as_deref())
    }
}
