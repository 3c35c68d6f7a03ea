//! voicectx - editor context for voice control
//!
//! This binary provides an MCP server that answers cursor, selection and
//! dictation queries about the documents an editor has open.

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod logging;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting voicectx");

    let config = if let Some(config_path) = &args.config {
        voicectx_core::ServerConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        voicectx_core::ServerConfig::load().context("failed to load configuration")?
    };

    tracing::debug!(
        encoding = %config.editor.position_encoding,
        languages = config.workspace.language_extensions.len(),
        "configuration loaded"
    );

    voicectx_core::serve(config).await.context("server error")?;

    tracing::info!("voicectx shutdown complete");
    Ok(())
}
