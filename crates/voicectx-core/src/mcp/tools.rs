//! MCP tool parameter definitions.
//!
//! Offsets and line numbers are signed so that negative values reach the
//! handlers and are rejected as out of bounds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::SymbolSpec;

/// Parameters for the `open_document` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for opening a document and making it active.")]
pub struct OpenDocumentParams {
    /// Path identifying the document.
    #[schemars(description = "Path identifying the document.")]
    pub file_path: String,
    /// Current editor content; read from disk when omitted.
    #[schemars(description = "Current editor content; read from disk when omitted.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Parameters for the `update_document` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for replacing the content of an open document.")]
pub struct UpdateDocumentParams {
    /// Path of an open document.
    #[schemars(description = "Path of an open document.")]
    pub file_path: String,
    /// New content.
    #[schemars(description = "New content.")]
    pub content: String,
}

/// Parameters for tools addressing one open document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters naming an open document.")]
pub struct DocumentPathParams {
    /// Path of an open document.
    #[schemars(description = "Path of an open document.")]
    pub file_path: String,
}

/// Parameters for the `set_selection` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for setting the selection of the active document.")]
pub struct SetSelectionParams {
    /// Offset where the selection starts (0-based).
    #[schemars(description = "Offset where the selection starts (0-based).")]
    pub anchor: i64,
    /// Offset of the cursor (0-based); defaults to the anchor.
    #[schemars(description = "Offset of the cursor (0-based); defaults to the anchor.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
}

/// Parameters for the `set_document_symbols` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for replacing the symbol tree of the active document.")]
pub struct SetSymbolsParams {
    /// Top-level symbols with offset ranges and nested children.
    #[schemars(description = "Top-level symbols with offset ranges and nested children.")]
    pub symbols: Vec<SymbolSpec>,
}

/// Parameters for the `get_text_on_line` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for getting the text of a line.")]
pub struct TextOnLineParams {
    /// Line number (0-based); defaults to the cursor line.
    #[schemars(description = "Line number (0-based); defaults to the cursor line.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
}

/// Parameters for the `get_text_between_offsets` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for getting the text between two offsets.")]
pub struct TextBetweenOffsetsParams {
    /// Start offset (0-based).
    #[schemars(description = "Start offset (0-based).")]
    pub start_offset: i64,
    /// End offset (0-based).
    #[schemars(description = "End offset (0-based).")]
    pub end_offset: i64,
}

/// Parameters for the `get_dictation_context` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for getting text around the selection.")]
pub struct DictationContextParams {
    /// Characters of context on each side; defaults to the configured radius.
    #[schemars(
        description = "Characters of context on each side; defaults to the configured radius."
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<i64>,
}

/// Parameters for the `get_line_indentation` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for measuring the indentation of a line.")]
pub struct LineIndentationParams {
    /// Line number (0-based); defaults to the cursor line.
    #[schemars(description = "Line number (0-based); defaults to the cursor line.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    /// Tab width; defaults to the configured tab size.
    #[schemars(description = "Tab width; defaults to the configured tab size.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<usize>,
}

/// Parameters for the `position_at` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for converting an offset to a line and column.")]
pub struct PositionAtParams {
    /// Absolute offset (0-based).
    #[schemars(description = "Absolute offset (0-based).")]
    pub offset: i64,
}

/// Parameters for the `offset_at` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Parameters for converting a line and column to an offset.")]
pub struct OffsetAtParams {
    /// Line number (0-based).
    #[schemars(description = "Line number (0-based).")]
    pub line: i64,
    /// Column (0-based); clamped to the line length.
    #[schemars(description = "Column (0-based); clamped to the line length.")]
    pub column: i64,
}
