//! MCP tool parameter types and helpers.
//!
//! All parameter structs derive `Deserialize + JsonSchema + Validate`: serde and
//! the declared schema reject unknown enum values, and `validate()` re-checks
//! string patterns before any request is sent.

pub mod helpers;
pub mod params;

pub use params::*;
