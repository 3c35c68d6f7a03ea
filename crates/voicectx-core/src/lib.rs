//! # voicectx-core
//!
//! Core library for exposing editor context to voice-control agents over MCP
//! (Model Context Protocol).
//!
//! A voice command such as "select previous word" or "dictate here" needs
//! to know where the cursor is, what the current line says and how the text
//! around the selection reads. This crate tracks the documents an editor has
//! open and answers those questions through MCP tools.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`text`] - Offset and position translation over an immutable text snapshot
//! - [`editor`] - Open documents, selection state and the command handlers
//! - [`mcp`] - MCP tool definitions and the rmcp server
//! - [`config`] - Configuration types and loading
//! - [`error`] - Error types for the library
//!
//! ## Example
//!
//! ```rust,ignore
//! use voicectx_core::{serve, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voicectx_core::Error> {
//!     let config = ServerConfig::load()?;
//!     serve(config).await
//! }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod mcp;
pub mod text;

use std::sync::Arc;

pub use config::ServerConfig;
use editor::CommandHandler;
pub use error::Error;
use rmcp::ServiceExt;
use tokio::sync::Mutex;

/// Start the voicectx server with the given configuration.
///
/// This is the primary entry point. The server speaks MCP over stdio and
/// returns when the client disconnects.
///
/// # Errors
///
/// Returns an error if:
/// - MCP server setup fails
/// - The MCP session ends with a transport error
pub async fn serve(config: ServerConfig) -> Result<(), Error> {
    tracing::info!("Starting voicectx server...");
    tracing::info!(
        encoding = %config.editor.position_encoding,
        tab_size = config.editor.tab_size,
        dictation_radius = config.editor.dictation_radius,
        roots = config.workspace.roots.len(),
        "editor configuration"
    );

    let commands = Arc::new(Mutex::new(CommandHandler::from_config(&config)));
    let mcp_server = mcp::VoiceContextServer::new(Arc::clone(&commands));

    tracing::info!("voicectx server initialized successfully");
    tracing::info!("Listening for MCP requests on stdio...");

    let service = mcp_server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::McpServer(format!("Failed to start MCP server: {e}")))?;

    service
        .waiting()
        .await
        .map_err(|e| Error::McpServer(format!("MCP server error: {e}")))?;

    let closed = commands.lock().await.shutdown();
    tracing::info!(documents = closed, "voicectx server shutting down");
    Ok(())
}
