use std::path::Path;

use voicectx_core::config::{ServerConfig, detect_language};
use voicectx_core::editor::CommandHandler;
use voicectx_core::error::Error;
use voicectx_core::text::PositionEncoding;

use crate::common::test_utils::config_fixture_path;

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_minimal() {
    let config_path = config_fixture_path("minimal.toml");
    assert!(config_path.exists(), "Config fixture should exist");

    let config = ServerConfig::load_from(&config_path).expect("Failed to load config");

    assert_eq!(config.editor.position_encoding, PositionEncoding::Utf16);
    assert_eq!(config.editor.tab_size, 4);
    assert_eq!(config.editor.dictation_radius, 200);
    assert!(config.workspace.roots.is_empty());
}

#[test]
#[allow(clippy::expect_used)]
fn test_config_loading_full() {
    let config_path = config_fixture_path("full.toml");
    let config = ServerConfig::load_from(&config_path).expect("Failed to load config");

    assert_eq!(config.editor.position_encoding, PositionEncoding::Utf8);
    assert_eq!(config.editor.tab_size, 2);
    assert_eq!(config.editor.dictation_radius, 40);
    assert_eq!(config.workspace.roots.len(), 1);
    assert_eq!(config.workspace.language_extensions.len(), 2);
    assert_eq!(config.limits.max_documents, 8);
    assert_eq!(config.limits.max_file_size, 65536);

    assert_eq!(
        detect_language(
            Path::new("stubs/api.pyi"),
            &config.workspace.language_extensions
        ),
        "python"
    );
    assert_eq!(
        detect_language(Path::new("main.rs"), &config.workspace.language_extensions),
        "plaintext"
    );
}

#[test]
fn test_config_invalid_tab_size() {
    let config_path = config_fixture_path("invalid_tab_size.toml");
    let result = ServerConfig::load_from(&config_path);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_handler_uses_configured_encoding() -> anyhow::Result<()> {
    let config = ServerConfig::load_from(&config_fixture_path("full.toml"))?;
    let handler = CommandHandler::from_config(&config);
    assert_eq!(
        handler.document_tracker().encoding(),
        PositionEncoding::Utf8
    );
    Ok(())
}
