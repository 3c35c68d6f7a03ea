//! Editor session state.
//!
//! Tracks the documents the host has pushed, which one is active, and the
//! selection and symbol tree of each.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{LanguageExtensionMapping, LimitsConfig, detect_language};
use crate::error::{Error, Result};
use crate::text::{Document, PositionEncoding, SymbolNode, SymbolSpec, checked_index};

/// A selection expressed as two offsets; `active` is the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection was started.
    pub anchor: usize,
    /// Where the cursor currently is.
    pub active: usize,
}

impl Selection {
    /// An empty selection at `offset`.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// Lower of the two offsets.
    #[must_use]
    pub const fn start(&self) -> usize {
        if self.anchor <= self.active {
            self.anchor
        } else {
            self.active
        }
    }

    /// Higher of the two offsets.
    #[must_use]
    pub const fn end(&self) -> usize {
        if self.anchor <= self.active {
            self.active
        } else {
            self.anchor
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Whether the cursor sits before the anchor.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    const fn clamped(self, len: usize) -> Self {
        Self {
            anchor: if self.anchor < len { self.anchor } else { len },
            active: if self.active < len { self.active } else { len },
        }
    }
}

/// State of a single open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    /// Path the host identified the document by.
    pub path: PathBuf,
    /// Language identifier.
    pub language_id: String,
    /// Document version (monotonically increasing).
    pub version: i32,
    /// Current snapshot.
    pub document: Document,
    /// Current selection.
    pub selection: Selection,
    /// Host-supplied symbols for the current snapshot.
    pub symbols: Vec<SymbolNode>,
}

/// Tracks open documents and the active one.
#[derive(Debug)]
pub struct DocumentTracker {
    documents: HashMap<PathBuf, OpenDocument>,
    active: Option<PathBuf>,
    limits: LimitsConfig,
    encoding: PositionEncoding,
    language_extensions: Vec<LanguageExtensionMapping>,
}

impl Default for DocumentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTracker {
    /// Create a tracker with default limits and encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(LimitsConfig::default())
    }

    /// Create a tracker with custom limits.
    #[must_use]
    pub fn with_limits(limits: LimitsConfig) -> Self {
        Self {
            documents: HashMap::new(),
            active: None,
            limits,
            encoding: PositionEncoding::default(),
            language_extensions: crate::config::default_language_extensions(),
        }
    }

    /// Set the encoding used for documents opened from now on.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: PositionEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the extension mappings used for language detection.
    #[must_use]
    pub fn with_language_extensions(mut self, mappings: Vec<LanguageExtensionMapping>) -> Self {
        self.language_extensions = mappings;
        self
    }

    /// Encoding used for new snapshots.
    #[must_use]
    pub const fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// Check if a document is currently open.
    #[must_use]
    pub fn is_open(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    /// Get the state of an open document.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&OpenDocument> {
        self.documents.get(path)
    }

    /// Get the number of open documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if there are no open documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Path of the active document, if any.
    #[must_use]
    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// The active document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] when no document is active.
    pub fn active(&self) -> Result<&OpenDocument> {
        self.active
            .as_ref()
            .and_then(|path| self.documents.get(path))
            .ok_or_else(no_active_document)
    }

    fn active_mut(&mut self) -> Result<&mut OpenDocument> {
        self.active
            .as_ref()
            .and_then(|path| self.documents.get_mut(path))
            .ok_or_else(no_active_document)
    }

    /// Open a document and make it active.
    ///
    /// Opening a path that is already open replaces its content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Document limit is exceeded
    /// - File size limit is exceeded
    pub fn open(&mut self, path: PathBuf, content: String) -> Result<&OpenDocument> {
        if self.documents.contains_key(&path) {
            self.update(&path, content)?;
        } else {
            if self.limits.max_documents > 0 && self.documents.len() >= self.limits.max_documents {
                return Err(Error::DocumentLimitExceeded {
                    current: self.documents.len(),
                    max: self.limits.max_documents,
                });
            }
            self.check_size(&content)?;

            let state = OpenDocument {
                path: path.clone(),
                language_id: detect_language(&path, &self.language_extensions),
                version: 1,
                document: Document::with_encoding(content, self.encoding),
                selection: Selection::default(),
                symbols: Vec::new(),
            };
            tracing::debug!(
                path = %path.display(),
                language_id = %state.language_id,
                "document opened"
            );
            self.documents.insert(path.clone(), state);
        }

        self.active = Some(path.clone());
        self.documents
            .get(&path)
            .ok_or(Error::DocumentNotFound(path))
    }

    /// Replace a document's content and increment its version.
    ///
    /// The selection is clamped into the new text and symbols are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the document is not open, or
    /// [`Error::FileSizeLimitExceeded`] if the new content is too large.
    pub fn update(&mut self, path: &Path, content: String) -> Result<i32> {
        self.check_size(&content)?;
        let encoding = self.encoding;
        let state = self
            .documents
            .get_mut(path)
            .ok_or_else(|| Error::DocumentNotFound(path.to_path_buf()))?;

        state.document = Document::with_encoding(content, encoding);
        state.version += 1;
        state.selection = state.selection.clamped(state.document.len());
        state.symbols.clear();
        tracing::debug!(path = %path.display(), version = state.version, "document updated");
        Ok(state.version)
    }

    /// Close a document and remove it from tracking.
    ///
    /// Returns the document state if it was open.
    pub fn close(&mut self, path: &Path) -> Option<OpenDocument> {
        if self.active.as_deref() == Some(path) {
            self.active = None;
        }
        self.documents.remove(path)
    }

    /// Close all documents.
    pub fn close_all(&mut self) -> Vec<OpenDocument> {
        self.active = None;
        self.documents.drain().map(|(_, state)| state).collect()
    }

    /// Make an open document active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the document is not open.
    pub fn focus(&mut self, path: &Path) -> Result<&OpenDocument> {
        let state = self
            .documents
            .get(path)
            .ok_or_else(|| Error::DocumentNotFound(path.to_path_buf()))?;
        self.active = Some(path.to_path_buf());
        Ok(state)
    }

    /// Set the selection of the active document.
    ///
    /// `active` defaults to `anchor`, giving an empty selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document, or
    /// [`Error::OutOfBounds`] if an offset lies outside it.
    pub fn set_selection(&mut self, anchor: i64, active: Option<i64>) -> Result<Selection> {
        let state = self.active_mut()?;
        let len = state.document.len();
        let anchor = checked_index("offset", anchor, len)?;
        let active = active.map_or(Ok(anchor), |active| checked_index("offset", active, len))?;
        state.selection = Selection { anchor, active };
        Ok(state.selection)
    }

    /// Replace the symbol tree of the active document.
    ///
    /// Returns the total number of symbols stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoContext`] without an active document, or the first
    /// range error found in `symbols`; the previous tree is kept on error.
    pub fn set_symbols(&mut self, symbols: &[SymbolSpec]) -> Result<usize> {
        let state = self.active_mut()?;
        let resolved = symbols
            .iter()
            .map(|spec| spec.resolve(&state.document))
            .collect::<Result<Vec<_>>>()?;
        let count = count_symbols(&resolved);
        state.symbols = resolved;
        Ok(count)
    }

    fn check_size(&self, content: &str) -> Result<()> {
        let size = content.len() as u64;
        if self.limits.max_file_size > 0 && size > self.limits.max_file_size {
            return Err(Error::FileSizeLimitExceeded {
                size,
                max: self.limits.max_file_size,
            });
        }
        Ok(())
    }
}

fn no_active_document() -> Error {
    Error::NoContext("no active document".to_string())
}

fn count_symbols(symbols: &[SymbolNode]) -> usize {
    symbols
        .iter()
        .map(|symbol| 1 + count_symbols(&symbol.children))
        .sum()
}
