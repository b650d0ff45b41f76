//! Mina Archive Node MCP Server
//!
//! Model Context Protocol server exposing the Mina archive node GraphQL API
//! (events, actions, network state) to LLM agents over stdio.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use mina_archive_mcp::config::{describe_validation_errors, ServerConfig};
use mina_archive_mcp::server::MinaArchiveMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; flags and the process environment still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("mina_archive_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::parse().validated() {
        Ok(config) => config,
        Err(errors) => {
            eprintln!("Invalid config:");
            for line in describe_validation_errors(&errors) {
                eprintln!("  {}", line);
            }
            std::process::exit(1);
        }
    };

    let server = MinaArchiveMcpServer::from_config(&config)?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    tracing::info!(
        name = %config.name,
        "Started Mina MCP server for archive node API for endpoint: {}",
        config.endpoint
    );
    service.waiting().await?;

    Ok(())
}
