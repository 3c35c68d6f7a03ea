//! Voice-command handlers over the editor session.
//!
//! Each `handle_*` method answers one command against the active document
//! and returns a serializable result.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::state::{DocumentTracker, OpenDocument};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::text::{
    Document, Indentation, Position, PositionEncoding, Range, SymbolSpec, checked_index,
    deepest_symbol_at, indentation_level,
};

/// Summary of an open document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Path the document is tracked under.
    pub file_path: String,
    /// Language identifier.
    pub language_id: String,
    /// Document version.
    pub version: i32,
    /// Number of lines.
    pub line_count: usize,
    /// Length in position units.
    pub length: usize,
    /// Unit of columns and offsets.
    pub encoding: PositionEncoding,
}

/// A piece of text with its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text.
    pub text: String,
    /// Start of the text.
    pub start: Position,
    /// End of the text.
    pub end: Position,
}

/// The active selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInfo {
    /// Selected text.
    pub text: String,
    /// Lower end of the selection.
    pub start: Position,
    /// Upper end of the selection.
    pub end: Position,
    /// Where the selection was started.
    pub anchor: Position,
    /// Cursor position.
    pub active: Position,
    /// Whether nothing is selected.
    pub is_empty: bool,
    /// Whether the cursor sits before the anchor.
    pub is_reversed: bool,
}

/// Text around the selection for dictation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictationContext {
    /// Text before the selection.
    pub before: TextSpan,
    /// The selection itself.
    pub selected: TextSpan,
    /// Text after the selection.
    pub after: TextSpan,
}

/// Indentation of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIndentation {
    /// Line number (0-based).
    pub line: usize,
    /// Tab width used for the measurement.
    pub tab_size: usize,
    /// The measurement.
    #[serde(flatten)]
    pub indentation: Indentation,
}

/// The innermost symbol around the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolAtCursor {
    /// Symbol name.
    pub name: String,
    /// Symbol kind.
    pub kind: String,
    /// Start of the symbol.
    pub start: Position,
    /// End of the symbol.
    pub end: Position,
}

/// Result of closing a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseResult {
    /// Path that was requested.
    pub file_path: String,
    /// Whether a document was actually closed.
    pub closed: bool,
}

/// Result of replacing the symbol tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolsUpdated {
    /// Total number of symbols, nested ones included.
    pub count: usize,
}

/// Answers voice commands against the tracked documents.
#[derive(Debug)]
pub struct CommandHandler {
    tracker: DocumentTracker,
    workspace_roots: Vec<PathBuf>,
    tab_size: usize,
    dictation_radius: usize,
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler {
    /// Create a handler with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    /// Create a handler from configuration.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let tracker = DocumentTracker::with_limits(config.limits)
            .with_encoding(config.editor.position_encoding)
            .with_language_extensions(config.workspace.language_extensions.clone());
        Self {
            tracker,
            workspace_roots: config.workspace.roots.clone(),
            tab_size: config.editor.tab_size,
            dictation_radius: config.editor.dictation_radius,
        }
    }

    /// Set the workspace roots for path validation.
    pub fn set_workspace_roots(&mut self, roots: Vec<PathBuf>) {
        self.workspace_roots = roots;
    }

    /// Get the document tracker.
    #[must_use]
    pub const fn document_tracker(&self) -> &DocumentTracker {
        &self.tracker
    }

    /// Close every document at the end of a session.
    ///
    /// Returns the number of documents that were still open.
    pub fn shutdown(&mut self) -> usize {
        let closed = self.tracker.close_all();
        for state in &closed {
            tracing::debug!(
                path = %state.path.display(),
                version = state.version,
                "document closed on shutdown"
            );
        }
        closed.len()
    }

    /// Validate that a path is within allowed workspace boundaries.
    fn validate_path(&self, path: &Path) -> Result<PathBuf> {
        let canonical = path.canonicalize().map_err(|e| Error::FileIo {
            path: path.to_path_buf(),
            source: e,
        })?;

        if self.workspace_roots.is_empty() {
            return Ok(canonical);
        }

        let inside = self.workspace_roots.iter().any(|root| {
            root.canonicalize()
                .is_ok_and(|canonical_root| canonical.starts_with(canonical_root))
        });
        if inside {
            Ok(canonical)
        } else {
            Err(Error::PathOutsideWorkspace(path.to_path_buf()))
        }
    }

    /// Key under which `file_path` is tracked, preferring the literal path.
    fn tracked_path(&self, file_path: &str) -> PathBuf {
        let path = PathBuf::from(file_path);
        if self.tracker.is_open(&path) {
            return path;
        }
        match path.canonicalize() {
            Ok(canonical) if self.tracker.is_open(&canonical) => canonical,
            _ => path,
        }
    }

    /// Open a document, reading it from disk when no content is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, the file cannot be read, lies
    /// outside the workspace, or a resource limit is exceeded.
    pub async fn handle_open_document(
        &mut self,
        file_path: String,
        content: Option<String>,
    ) -> Result<DocumentInfo> {
        if file_path.trim().is_empty() {
            return Err(Error::InvalidToolParams(
                "file_path cannot be empty".to_string(),
            ));
        }

        let (path, content) = match content {
            Some(content) => (PathBuf::from(&file_path), content),
            None => {
                let path = self.validate_path(Path::new(&file_path))?;
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| Error::FileIo {
                        path: path.clone(),
                        source: e,
                    })?;
                (path, content)
            }
        };

        let state = self.tracker.open(path, content)?;
        Ok(document_info(state))
    }

    /// Replace the content of an open document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the document is not open.
    pub fn handle_update_document(
        &mut self,
        file_path: &str,
        content: String,
    ) -> Result<DocumentInfo> {
        let path = self.tracked_path(file_path);
        self.tracker.update(&path, content)?;
        self.tracker
            .get(&path)
            .map(document_info)
            .ok_or(Error::DocumentNotFound(path))
    }

    /// Close a document.
    pub fn handle_close_document(&mut self, file_path: &str) -> CloseResult {
        let path = self.tracked_path(file_path);
        let closed = self.tracker.close(&path).is_some();
        tracing::debug!(path = %path.display(), closed, "close requested");
        CloseResult {
            file_path: file_path.to_string(),
            closed,
        }
    }

    /// Make an open document active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the document is not open.
    pub fn handle_focus_document(&mut self, file_path: &str) -> Result<DocumentInfo> {
        let path = self.tracked_path(file_path);
        self.tracker.focus(&path).map(document_info)
    }

    /// Set the selection of the active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] or [`Error::OutOfBounds`].
    pub fn handle_set_selection(
        &mut self,
        anchor: i64,
        active: Option<i64>,
    ) -> Result<SelectionInfo> {
        self.tracker.set_selection(anchor, active)?;
        self.handle_selected_text()
    }

    /// Replace the symbol tree of the active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`], [`Error::OutOfBounds`] or
    /// [`Error::InvalidRange`].
    pub fn handle_set_symbols(&mut self, symbols: &[SymbolSpec]) -> Result<SymbolsUpdated> {
        let count = self.tracker.set_symbols(symbols)?;
        Ok(SymbolsUpdated { count })
    }

    /// Path and language of the active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_file_path(&self) -> Result<DocumentInfo> {
        self.tracker.active().map(document_info)
    }

    /// Position of the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_cursor_position(&self) -> Result<Position> {
        let state = self.tracker.active()?;
        state.document.position_at(state.selection.active)
    }

    /// Text and bounds of a line, the cursor line by default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] or [`Error::OutOfBounds`].
    pub fn handle_text_on_line(&self, line: Option<i64>) -> Result<TextSpan> {
        let state = self.tracker.active()?;
        let line = resolve_line(state, line)?;
        let bounds = state.document.line_bounds(line)?;
        Ok(TextSpan {
            text: state.document.line_text(line)?.to_string(),
            start: bounds.start,
            end: bounds.end,
        })
    }

    /// The selected text with both orientations of its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_selected_text(&self) -> Result<SelectionInfo> {
        let state = self.tracker.active()?;
        let document = &state.document;
        let selection = state.selection;
        let range = document.range(selection.start(), selection.end())?;
        Ok(SelectionInfo {
            text: document.text_in_range(&range)?.to_string(),
            start: range.start,
            end: range.end,
            anchor: document.position_at(selection.anchor)?,
            active: document.position_at(selection.active)?,
            is_empty: selection.is_empty(),
            is_reversed: selection.is_reversed(),
        })
    }

    /// Text between two absolute offsets.
    ///
    /// The returned `start` and `end` are resolved positions: an offset
    /// between `\r` and `\n` is reported at the end of its line, so it can
    /// differ from the requested offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`], then [`Error::OutOfBounds`] if either
    /// offset is outside the document, then [`Error::InvalidRange`].
    pub fn handle_text_between_offsets(&self, start: i64, end: i64) -> Result<TextSpan> {
        let state = self.tracker.active()?;
        let len = state.document.len();
        let start = checked_index("offset", start, len)?;
        let end = checked_index("offset", end, len)?;
        text_span(&state.document, start, end)
    }

    /// Start and end of the active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_document_bounds(&self) -> Result<Range> {
        Ok(self.tracker.active()?.document.bounds())
    }

    /// Text around the selection, `radius` units on each side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_dictation_context(&self, radius: Option<i64>) -> Result<DictationContext> {
        let state = self.tracker.active()?;
        let document = &state.document;
        let radius = radius.unwrap_or_else(|| to_signed(self.dictation_radius));
        let (raw_start, raw_end) = (state.selection.start(), state.selection.end());
        let selected = document.range(raw_start, raw_end)?;
        let (start, end) = (selected.start.offset, selected.end.offset);
        tracing::debug!(start, end, radius, "dictation context requested");

        // Window ends snap like the selection does, so clamp them to the
        // snapped selection before slicing.
        let before_window = document.clamped_window(to_signed(raw_start), radius);
        let after_window = document.clamped_window(to_signed(raw_end), radius);

        Ok(DictationContext {
            before: text_span(document, before_window.start.offset.min(start), start)?,
            selected: text_span(document, start, end)?,
            after: text_span(document, end, after_window.end.offset.max(end))?,
        })
    }

    /// Indentation of a line, the cursor line by default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] or [`Error::OutOfBounds`].
    pub fn handle_line_indentation(
        &self,
        line: Option<i64>,
        tab_size: Option<usize>,
    ) -> Result<LineIndentation> {
        let state = self.tracker.active()?;
        let line = resolve_line(state, line)?;
        let tab_size = tab_size.unwrap_or(self.tab_size);
        Ok(LineIndentation {
            line,
            tab_size,
            indentation: indentation_level(state.document.line_text(line)?, tab_size),
        })
    }

    /// Innermost host-supplied symbol containing the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document.
    pub fn handle_symbol_at_cursor(&self) -> Result<Option<SymbolAtCursor>> {
        let state = self.tracker.active()?;
        let cursor = state.document.position_at(state.selection.active)?;
        Ok(
            deepest_symbol_at(&state.symbols, cursor.offset).map(|symbol| SymbolAtCursor {
                name: symbol.name.clone(),
                kind: symbol.kind.clone(),
                start: symbol.range.start,
                end: symbol.range.end,
            }),
        )
    }

    /// Position of an absolute offset in the active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] or [`Error::OutOfBounds`].
    pub fn handle_position_at(&self, offset: i64) -> Result<Position> {
        let document = &self.tracker.active()?.document;
        let offset = checked_index("offset", offset, document.len())?;
        document.position_at(offset)
    }

    /// Position of `(line, column)` in the active document.
    ///
    /// The column is clamped into the line; negative columns clamp to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] or [`Error::OutOfBounds`] for the line.
    pub fn handle_offset_at(&self, line: i64, column: i64) -> Result<Position> {
        let document = &self.tracker.active()?.document;
        let line = checked_index("line", line, document.line_count() - 1)?;
        let column = usize::try_from(column).unwrap_or(0);
        document.position_of(line, column)
    }
}

fn document_info(state: &OpenDocument) -> DocumentInfo {
    DocumentInfo {
        file_path: state.path.display().to_string(),
        language_id: state.language_id.clone(),
        version: state.version,
        line_count: state.document.line_count(),
        length: state.document.len(),
        encoding: state.document.encoding(),
    }
}

fn resolve_line(state: &OpenDocument, line: Option<i64>) -> Result<usize> {
    let max = state.document.line_count() - 1;
    match line {
        Some(line) => checked_index("line", line, max),
        None => Ok(state.document.position_at(state.selection.active)?.line),
    }
}

fn text_span(document: &Document, start: usize, end: usize) -> Result<TextSpan> {
    let range = document.range(start, end)?;
    Ok(TextSpan {
        text: document.text_in_range(&range)?.to_string(),
        start: range.start,
        end: range.end,
    })
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
