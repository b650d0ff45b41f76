//! Mina archive node MCP server library.
//!
//! Provides the [`server::MinaArchiveMcpServer`] handler, its configuration and
//! tool parameter types. Used by the `mina-archive-mcp` binary and available for
//! integration testing.

pub mod config;
pub mod server;
pub mod tools;
