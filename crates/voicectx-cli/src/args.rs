//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Editor context server for voice control
///
/// Exposes cursor position, selection, line text and dictation context
/// of the documents an editor has open as MCP tools.
#[derive(Debug, Parser)]
#[command(name = "voicectx")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches for voicectx.toml in:
    /// 1. $VOICECTX_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/voicectx/voicectx.toml
    #[arg(short, long, value_name = "FILE", env = "VOICECTX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info", env = "VOICECTX_LOG")]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "VOICECTX_LOG_JSON")]
    pub log_json: bool,
}
