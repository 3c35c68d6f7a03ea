//! Symbol trees supplied by the host and containment lookup over them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::document::Document;
use super::position::Range;
use crate::error::Result;

/// A symbol with its full range and nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolNode {
    /// Symbol name.
    pub name: String,
    /// Symbol kind as reported by the host (`function`, `class`, ...).
    pub kind: String,
    /// Span covered by the symbol.
    pub range: Range,
    /// Nested symbols.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

/// Host-side description of a symbol, using absolute offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolSpec {
    /// Symbol name.
    pub name: String,
    /// Symbol kind.
    #[serde(default)]
    pub kind: String,
    /// Start offset of the symbol.
    pub start_offset: usize,
    /// End offset of the symbol.
    pub end_offset: usize,
    /// Nested symbols.
    #[serde(default)]
    pub children: Vec<Self>,
}

impl SymbolSpec {
    /// Resolve offsets against `document`, validating every range.
    ///
    /// # Errors
    ///
    /// Returns the first `OutOfBounds` or `InvalidRange` error found in the tree.
    pub fn resolve(&self, document: &Document) -> Result<SymbolNode> {
        Ok(SymbolNode {
            name: self.name.clone(),
            kind: self.kind.clone(),
            range: document.range(self.start_offset, self.end_offset)?,
            children: self
                .children
                .iter()
                .map(|child| child.resolve(document))
                .collect::<Result<_>>()?,
        })
    }
}

/// Deepest symbol whose range contains `offset`.
///
/// Nodes are visited depth-first in order; the last containing node visited
/// wins, so a containing child always beats its parent.
#[must_use]
pub fn deepest_symbol_at(symbols: &[SymbolNode], offset: usize) -> Option<&SymbolNode> {
    let mut found = None;
    for symbol in symbols {
        if symbol.range.contains(offset) {
            found = Some(deepest_symbol_at(&symbol.children, offset).unwrap_or(symbol));
        }
    }
    found
}
