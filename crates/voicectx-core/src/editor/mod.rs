//! Editor session and voice-command handlers.
//!
//! The host editor pushes document content, selections and symbols into a
//! [`DocumentTracker`]; [`CommandHandler`] answers voice commands against
//! whichever document is active.

mod commands;
mod state;

pub use commands::{
    CloseResult, CommandHandler, DictationContext, DocumentInfo, LineIndentation, SelectionInfo,
    SymbolAtCursor, SymbolsUpdated, TextSpan,
};
pub use state::{DocumentTracker, OpenDocument, Selection};
