//! Server configuration from command-line flags and environment variables.
//!
//! Values are read by `clap` (flags override env vars, which override the
//! defaults) and then checked with `validator` before the server is built.

use clap::Parser;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

use mina_archive_client::ArchiveClientError;

/// Default MCP server name.
pub const DEFAULT_SERVER_NAME: &str = "mcp-mina-archive-node";

/// Default archive node GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://archive-node-api.gcp.o1test.net/";

/// Runtime configuration for the MCP server.
#[derive(Debug, Clone, Parser, Validate)]
#[command(
    name = "mina-archive-mcp",
    version,
    about = "MCP server for the Mina archive node API"
)]
pub struct ServerConfig {
    /// Name of the MCP server
    #[arg(long, env = "MINA_MCP_SERVER_NAME", default_value = DEFAULT_SERVER_NAME)]
    #[validate(length(min = 1, message = "server name must not be empty"))]
    pub name: String,

    /// Archive Node API endpoint
    #[arg(long, env = "MINA_ARCHIVE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    #[validate(
        url(message = "endpoint must be a valid URL"),
        custom(function = "validate_http_scheme")
    )]
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate and return the config, or the field-level errors.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        self.validate()?;
        Ok(self)
    }

    /// The endpoint parsed as a URL.
    pub fn endpoint_url(&self) -> Result<Url, ArchiveClientError> {
        Url::parse(&self.endpoint).map_err(|e| {
            ArchiveClientError::config_error(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })
    }
}

fn validate_http_scheme(endpoint: &str) -> Result<(), ValidationError> {
    match Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(_) => Err(ValidationError::new("scheme")
            .with_message("endpoint must use http or https".into())),
        // Malformed URLs are reported by the `url` rule.
        Err(_) => Ok(()),
    }
}

/// Flatten validation errors into sorted `field: message` lines.
pub fn describe_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    lines.sort();
    lines
}
