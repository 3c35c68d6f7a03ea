//! MCP handler context.
//!
//! This module provides the shared context for MCP tool handlers and the
//! conversion of command results into tool output.
//! The actual tool implementations use the `#[tool]` macro from rmcp
//! and are defined in the `server` module.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::editor::CommandHandler;
use crate::error::Result;

/// Shared context for all tool handlers.
pub struct HandlerContext {
    /// Command handler owning the editor session.
    pub commands: Arc<Mutex<CommandHandler>>,
}

impl HandlerContext {
    /// Create a new handler context.
    #[must_use]
    pub const fn new(commands: Arc<Mutex<CommandHandler>>) -> Self {
        Self { commands }
    }
}

/// Serialize a command result as tool output.
///
/// Errors caused by the request are reported as invalid parameters,
/// everything else as internal errors.
pub fn into_tool_output<T: Serialize>(result: Result<T>) -> std::result::Result<String, McpError> {
    match result.and_then(|value| Ok(serde_json::to_string(&value)?)) {
        Ok(json) => Ok(json),
        Err(e) if e.is_request_error() => {
            tracing::debug!(error = %e, "request rejected");
            Err(McpError::invalid_params(e.to_string(), None))
        }
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            Err(McpError::internal_error(e.to_string(), None))
        }
    }
}
