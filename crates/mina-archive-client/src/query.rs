//! GraphQL query construction.
//!
//! Filters are rendered as GraphQL input-object literals through an explicit
//! [`InputObject`] builder. Each value carries a type tag that decides how it
//! is written:
//!
//! - strings become quoted, escaped string literals (`"B62q..."`)
//! - integers are written bare (`42`)
//! - enum values are written as bare identifiers (`PENDING`, never `"PENDING"`)
//!
//! Absent optional fields are never added, so they do not appear in the
//! document at all. String escaping uses JSON string syntax, which is a
//! subset of GraphQL string syntax; values without quotes, backslashes or
//! control characters render exactly as `"value"`.

use std::fmt;

use crate::filter::{ActionFilterOptions, BlockStatusFilter, EventFilterOptions};

/// A typed literal inside a GraphQL input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    String(String),
    Int(i64),
    Enum(&'static str),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // serde_json's string encoder escapes `"`, `\` and control characters
            Self::String(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
            Self::Int(n) => write!(f, "{}", n),
            Self::Enum(ident) => f.write_str(ident),
        }
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<u32> for InputValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<BlockStatusFilter> for InputValue {
    fn from(value: BlockStatusFilter) -> Self {
        Self::Enum(value.as_str())
    }
}

/// An ordered set of present `name: value` pairs.
///
/// Renders as `{name: value, name: value}`; pairs keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputObject {
    fields: Vec<(&'static str, InputValue)>,
}

impl InputObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field that is always present.
    pub fn field(mut self, name: &'static str, value: impl Into<InputValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Append a field only when `value` is `Some`.
    pub fn optional_field<V: Into<InputValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    pub fn fields(&self) -> &[(&'static str, InputValue)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for InputObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Conversion of a filter into its GraphQL input object.
pub trait ToInputObject {
    fn to_input_object(&self) -> InputObject;
}

const BLOCK_INFO_SELECTION: &str = "blockInfo {
      height
      stateHash
      parentHash
      ledgerHash
      chainStatus
      timestamp
      globalSlotSinceHardfork
      globalSlotSinceGenesis
      distanceFromMaxBlockHeight
    }";

const TRANSACTION_INFO_SELECTION: &str = "transactionInfo {
      status
      hash
      memo
      authorizationKind
      sequenceNumber
      zkappAccountUpdateIds
    }";

/// Fixed query for the network's max block heights.
pub const NETWORK_STATE_QUERY: &str = "query {
  networkState {
    maxBlockHeight {
      canonicalMaxBlockHeight
      pendingMaxBlockHeight
    }
  }
}";

/// Build the `events` query document for `filter`.
pub fn events_query(filter: &EventFilterOptions) -> String {
    format!(
        "query {{
  events(input: {input}) {{
    {block_info}
    eventData {{
      accountUpdateId
      data
      {transaction_info}
    }}
  }}
}}",
        input = filter.to_input_object(),
        block_info = BLOCK_INFO_SELECTION,
        transaction_info = TRANSACTION_INFO_SELECTION,
    )
}

/// Build the `actions` query document for `filter`.
pub fn actions_query(filter: &ActionFilterOptions) -> String {
    format!(
        "query {{
  actions(input: {input}) {{
    {block_info}
    {transaction_info}
    actionData {{
      accountUpdateId
      data
    }}
    actionState {{
      actionStateOne
      actionStateTwo
      actionStateThree
      actionStateFour
      actionStateFive
    }}
  }}
}}",
        input = filter.to_input_object(),
        block_info = BLOCK_INFO_SELECTION,
        transaction_info = TRANSACTION_INFO_SELECTION,
    )
}
