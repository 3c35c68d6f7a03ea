//! Position/offset translation over immutable document snapshots.
//!
//! Everything in this module is synchronous and side-effect free: callers
//! hand in a [`Document`] snapshot and get back positions, ranges, text
//! slices or indentation descriptors.

mod document;
mod encoding;
mod indent;
mod position;
mod symbols;

pub use document::{Document, checked_index};
pub use encoding::PositionEncoding;
pub use indent::{Indentation, indentation_level};
pub use position::{Position, Range};
pub use symbols::{SymbolNode, SymbolSpec, deepest_symbol_at};
