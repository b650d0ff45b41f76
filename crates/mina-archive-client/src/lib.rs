//! GraphQL query builder and client for the Mina archive node API.
//!
//! # Modules
//!
//! - [`filter`]: Event and action filter options plus the block status enum
//! - [`query`]: Typed input-object serializer and query documents
//! - [`types`]: Records decoded from archive node responses
//! - [`client`]: [`ArchiveNodeClient`] trait and its HTTP implementation
//! - [`error`]: Error taxonomy shared with the MCP tool layer

pub mod client;
pub mod error;
pub mod filter;
pub mod query;
pub mod types;

pub use client::{ArchiveNodeClient, MinaGraphQlClient};
pub use error::{ArchiveClientError, ClientResult, ErrorKind};
pub use filter::{ActionFilterOptions, BlockStatusFilter, EventFilterOptions};
pub use query::{InputObject, InputValue, ToInputObject};
pub use types::{
    ActionData, ActionOutput, ActionStates, ActionsResponse, BlockInfo, EventData, EventOutput,
    EventsResponse, MaxBlockHeightInfo, NetworkStateOutput, NetworkStateResponse, TransactionInfo,
};
