//! MCP server implementation using rmcp.
//!
//! This module provides the MCP server that exposes the editor session
//! as MCP tools using the rmcp SDK.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use tokio::sync::Mutex;

use super::handlers::{HandlerContext, into_tool_output};
use super::tools::{
    DictationContextParams, DocumentPathParams, LineIndentationParams, OffsetAtParams,
    OpenDocumentParams, PositionAtParams, SetSelectionParams, SetSymbolsParams,
    TextBetweenOffsetsParams, TextOnLineParams, UpdateDocumentParams,
};
use crate::editor::CommandHandler;

/// MCP server that exposes editor context queries as tools.
#[derive(Clone)]
pub struct VoiceContextServer {
    context: Arc<HandlerContext>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl VoiceContextServer {
    /// Create a new MCP server with the given command handler.
    #[must_use]
    pub fn new(commands: Arc<Mutex<CommandHandler>>) -> Self {
        let context = Arc::new(HandlerContext::new(commands));
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    /// Open a document and make it active.
    #[tool(
        description = "Open a document and make it the active one. Content is read from disk when not supplied."
    )]
    async fn open_document(
        &self,
        params: Parameters<OpenDocumentParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands
                .handle_open_document(params.0.file_path, params.0.content)
                .await
        };
        into_tool_output(result)
    }

    /// Replace the content of an open document.
    #[tool(description = "Replace the content of an open document")]
    async fn update_document(
        &self,
        params: Parameters<UpdateDocumentParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands.handle_update_document(&params.0.file_path, params.0.content)
        };
        into_tool_output(result)
    }

    /// Close an open document.
    #[tool(description = "Close an open document")]
    async fn close_document(
        &self,
        params: Parameters<DocumentPathParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands.handle_close_document(&params.0.file_path)
        };
        into_tool_output(Ok(result))
    }

    /// Make an open document the active one.
    #[tool(description = "Make an open document the active one")]
    async fn focus_document(
        &self,
        params: Parameters<DocumentPathParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands.handle_focus_document(&params.0.file_path)
        };
        into_tool_output(result)
    }

    /// Set the selection of the active document.
    #[tool(
        description = "Set the selection of the active document from an anchor and an optional cursor offset"
    )]
    async fn set_selection(
        &self,
        params: Parameters<SetSelectionParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands.handle_set_selection(params.0.anchor, params.0.active)
        };
        into_tool_output(result)
    }

    /// Replace the symbol tree of the active document.
    #[tool(description = "Replace the symbol tree of the active document")]
    async fn set_document_symbols(
        &self,
        params: Parameters<SetSymbolsParams>,
    ) -> Result<String, McpError> {
        let result = {
            let mut commands = self.context.commands.lock().await;
            commands.handle_set_symbols(&params.0.symbols)
        };
        into_tool_output(result)
    }

    /// Path and language of the active document.
    #[tool(description = "Get the file path and language of the active document")]
    async fn get_file_path(&self) -> Result<String, McpError> {
        let result = self.context.commands.lock().await.handle_file_path();
        into_tool_output(result)
    }

    /// Cursor position in the active document.
    #[tool(description = "Get the cursor line, column and offset in the active document")]
    async fn get_cursor_position(&self) -> Result<String, McpError> {
        let result = self.context.commands.lock().await.handle_cursor_position();
        into_tool_output(result)
    }

    /// Text of a line.
    #[tool(description = "Get the text of a line, excluding the line break. Defaults to the cursor line.")]
    async fn get_text_on_line(
        &self,
        params: Parameters<TextOnLineParams>,
    ) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_text_on_line(params.0.line);
        into_tool_output(result)
    }

    /// Selected text with its offsets.
    #[tool(description = "Get the selected text and selection offsets of the active document")]
    async fn get_selected_text(&self) -> Result<String, McpError> {
        let result = self.context.commands.lock().await.handle_selected_text();
        into_tool_output(result)
    }

    /// Text between two offsets.
    #[tool(description = "Get the text between two offsets of the active document")]
    async fn get_text_between_offsets(
        &self,
        params: Parameters<TextBetweenOffsetsParams>,
    ) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_text_between_offsets(params.0.start_offset, params.0.end_offset);
        into_tool_output(result)
    }

    /// Start and end offsets of the active document.
    #[tool(description = "Get the start and end offsets of the active document")]
    async fn get_document_bounds(&self) -> Result<String, McpError> {
        let result = self.context.commands.lock().await.handle_document_bounds();
        into_tool_output(result)
    }

    /// Text before, inside and after the selection.
    #[tool(
        description = "Get the text around the selection for dictation: before, selected and after, clamped to the document"
    )]
    async fn get_dictation_context(
        &self,
        params: Parameters<DictationContextParams>,
    ) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_dictation_context(params.0.radius);
        into_tool_output(result)
    }

    /// Indentation level of a line.
    #[tool(description = "Get the indentation level of a line. Defaults to the cursor line.")]
    async fn get_line_indentation(
        &self,
        params: Parameters<LineIndentationParams>,
    ) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_line_indentation(params.0.line, params.0.tab_size);
        into_tool_output(result)
    }

    /// Innermost symbol containing the cursor.
    #[tool(description = "Get the innermost symbol containing the cursor, or null when there is none")]
    async fn get_symbol_at_cursor(&self) -> Result<String, McpError> {
        let result = self.context.commands.lock().await.handle_symbol_at_cursor();
        into_tool_output(result)
    }

    /// Convert an offset to a line and column.
    #[tool(description = "Convert an offset of the active document to a line and column")]
    async fn position_at(&self, params: Parameters<PositionAtParams>) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_position_at(params.0.offset);
        into_tool_output(result)
    }

    /// Convert a line and column to an offset.
    #[tool(description = "Convert a line and column of the active document to an offset")]
    async fn offset_at(&self, params: Parameters<OffsetAtParams>) -> Result<String, McpError> {
        let result = self
            .context
            .commands
            .lock()
            .await
            .handle_offset_at(params.0.line, params.0.column);
        into_tool_output(result)
    }
}

#[tool_handler]
impl ServerHandler for VoiceContextServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "voicectx".to_string(),
                title: Some("voicectx - Editor Context for Voice Control".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                concat!(
                    "Editor context for voice control. Open a document and set its ",
                    "selection, then query the cursor position, line text, selected ",
                    "text, dictation context, indentation and enclosing symbol."
                )
                .to_string(),
            ),
        }
    }
}
