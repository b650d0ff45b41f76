//! Shared helper functions for MCP tool implementations.

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData;
use serde::Serialize;
use tracing::warn;
use validator::ValidationErrors;

use mina_archive_client::ArchiveClientError;

use crate::config::describe_validation_errors;

/// Wrap a result as a single pretty-printed JSON text block.
pub fn json_content<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        ErrorData::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Reject tool input that failed validation. No request has been sent.
pub fn invalid_params(operation: &str, errors: &ValidationErrors) -> ErrorData {
    let details = describe_validation_errors(errors).join("; ");
    warn!(operation, %details, "Rejected tool input");
    ErrorData::invalid_params(
        format!("Invalid parameters for {}: {}", operation, details),
        None,
    )
}

/// Annotate a client failure with the operation that hit it.
pub fn tool_failure(operation: &str, error: &ArchiveClientError) -> ErrorData {
    warn!(operation, kind = %error.kind(), error = %error, "Archive node query failed");
    ErrorData::internal_error(
        format!("Failed to {}: {}", operation, error),
        Some(serde_json::json!({ "kind": error.kind().to_string() })),
    )
}
