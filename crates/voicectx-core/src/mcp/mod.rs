//! MCP tool definitions and handlers.
//!
//! This module exposes the editor session to voice-control agents
//! as MCP tools.

mod handlers;
mod server;
mod tools;

pub use handlers::{HandlerContext, into_tool_output};
pub use server::VoiceContextServer;
pub use tools::{
    DictationContextParams, DocumentPathParams, LineIndentationParams, OffsetAtParams,
    OpenDocumentParams, PositionAtParams, SetSelectionParams, SetSymbolsParams,
    TextBetweenOffsetsParams, TextOnLineParams, UpdateDocumentParams,
};
