//! Error types for voicectx-core.
//!
//! A single error enum covers translator failures, editor session failures,
//! configuration loading and server startup.

use std::path::PathBuf;

/// The main error type for voicectx-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line, offset or index lies outside the document.
    #[error("{what} out of bounds: {value} (valid range: 0..={max})")]
    OutOfBounds {
        /// What was being indexed (`line`, `offset`, ...).
        what: &'static str,
        /// The rejected value as requested by the caller.
        value: i64,
        /// Largest accepted value.
        max: usize,
    },

    /// Range start lies after range end.
    #[error("start offset ({start}) cannot be greater than end offset ({end})")]
    InvalidRange {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },

    /// A command needs context (an active document) that is not available.
    #[error("no context: {0}")]
    NoContext(String),

    /// Document is not open in the editor session.
    #[error("document not open: {0}")]
    DocumentNotFound(PathBuf),

    /// MCP server error.
    #[error("MCP server error: {0}")]
    McpServer(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration format.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Invalid tool parameters provided.
    #[error("invalid tool parameters: {0}")]
    InvalidToolParams(String),

    /// File I/O error occurred.
    #[error("file I/O error for {path:?}: {source}")]
    FileIo {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Path is outside allowed workspace boundaries.
    #[error("path outside workspace: {0}")]
    PathOutsideWorkspace(PathBuf),

    /// Document limit exceeded.
    #[error("document limit exceeded: {current}/{max}")]
    DocumentLimitExceeded {
        /// Current number of documents.
        current: usize,
        /// Maximum allowed documents.
        max: usize,
    },

    /// File size limit exceeded.
    #[error("file size limit exceeded: {size} bytes (max: {max} bytes)")]
    FileSizeLimitExceeded {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },
}

impl Error {
    /// Whether the error was caused by the request itself rather than the server.
    ///
    /// Request errors are reported to MCP clients as invalid parameters.
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::InvalidRange { .. }
                | Self::NoContext(_)
                | Self::DocumentNotFound(_)
                | Self::InvalidToolParams(_)
                | Self::PathOutsideWorkspace(_)
        )
    }
}

/// A specialized Result type for voicectx-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_out_of_bounds() {
        let err = Error::OutOfBounds {
            what: "offset",
            value: 42,
            max: 11,
        };
        assert_eq!(
            err.to_string(),
            "offset out of bounds: 42 (valid range: 0..=11)"
        );
    }

    #[test]
    fn test_error_display_negative_line() {
        let err = Error::OutOfBounds {
            what: "line",
            value: -1,
            max: 2,
        };
        assert!(err.to_string().starts_with("line out of bounds: -1"));
    }

    #[test]
    fn test_error_display_invalid_range() {
        let err = Error::InvalidRange { start: 7, end: 3 };
        assert_eq!(
            err.to_string(),
            "start offset (7) cannot be greater than end offset (3)"
        );
    }

    #[test]
    fn test_error_display_no_context() {
        let err = Error::NoContext("no active document".to_string());
        assert_eq!(err.to_string(), "no context: no active document");
    }

    #[test]
    fn test_error_display_document_limit() {
        let err = Error::DocumentLimitExceeded {
            current: 150,
            max: 100,
        };
        assert_eq!(err.to_string(), "document limit exceeded: 150/100");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("[invalid toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_request_error());
    }

    #[test]
    fn test_request_errors_are_classified() {
        assert!(Error::InvalidRange { start: 1, end: 0 }.is_request_error());
        assert!(Error::NoContext("none".to_string()).is_request_error());
        assert!(!Error::McpServer("boom".to_string()).is_request_error());
        assert!(!Error::InvalidConfig("bad".to_string()).is_request_error());
        assert!(Error::InvalidToolParams("empty".to_string()).is_request_error());
    }

    #[test]
    fn test_error_source_chain() {
        let err = Error::FileIo {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
