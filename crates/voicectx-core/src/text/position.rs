//! Position and range value types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A zero-based location in a document.
///
/// `offset` counts position units from the start of the document and is
/// always consistent with `line` and `column` for the snapshot that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    /// Line number (0-based).
    pub line: usize,
    /// Column within the line (0-based).
    pub column: usize,
    /// Absolute offset from the start of the document.
    pub offset: usize,
}

impl Position {
    /// Start of every document.
    pub const ZERO: Self = Self {
        line: 0,
        column: 0,
        offset: 0,
    };
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} (@{})", self.line, self.column, self.offset)
    }
}

/// An ordered span between two positions, `start.offset <= end.offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Length of the range in position units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Whether the range is zero-width.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Whether `offset` lies within the range, both ends included.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset <= self.end.offset
    }
}
