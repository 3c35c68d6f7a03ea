//! Configuration types and loading.
//!
//! This module provides configuration structures for voicectx,
//! including position encoding, dictation window size, workspace roots
//! and resource limits.

mod languages;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use languages::{
    FALLBACK_LANGUAGE, LanguageExtensionMapping, default_language_extensions, detect_language,
};

use crate::error::{Error, Result};
use crate::text::PositionEncoding;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "VOICECTX_CONFIG";

const CONFIG_FILE_NAME: &str = "voicectx.toml";

/// Main configuration for the voicectx server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Editor behavior.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Workspace configuration.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Resource limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Editor-level settings applied to every document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Unit for columns and offsets: "utf-8", "utf-16" or "utf-32".
    #[serde(default)]
    pub position_encoding: PositionEncoding,

    /// Width of a tab when measuring indentation.
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Characters of context on each side of the selection for dictation.
    #[serde(default = "default_dictation_radius")]
    pub dictation_radius: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            position_encoding: PositionEncoding::default(),
            tab_size: default_tab_size(),
            dictation_radius: default_dictation_radius(),
        }
    }
}

const fn default_tab_size() -> usize {
    4
}

const fn default_dictation_radius() -> usize {
    200
}

/// Workspace-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Root directories files may be read from. Empty allows any path.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// File extension to language ID mappings.
    #[serde(default = "default_language_extensions")]
    pub language_extensions: Vec<LanguageExtensionMapping>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            language_extensions: default_language_extensions(),
        }
    }
}

/// Resource limits for tracked documents. Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of open documents.
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,

    /// Maximum document size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_documents: default_max_documents(),
            max_file_size: default_max_file_size(),
        }
    }
}

const fn default_max_documents() -> usize {
    100
}

const fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

impl ServerConfig {
    /// Load configuration from the default path.
    ///
    /// Default paths checked in order:
    /// 1. `$VOICECTX_CONFIG` environment variable
    /// 2. `./voicectx.toml` (current directory)
    /// 3. `voicectx/voicectx.toml` in the user configuration directory
    ///
    /// If no configuration file exists, a default one is written to the user
    /// configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing an existing config fails.
    /// If config creation fails, returns default config with graceful degradation.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("voicectx").join(CONFIG_FILE_NAME);
            if user_config.exists() {
                return Self::load_from(&user_config);
            }

            if let Err(e) = Self::create_default_config_file(&user_config) {
                tracing::warn!(
                    path = %user_config.display(),
                    error = %e,
                    "failed to create default config, using in-memory defaults"
                );
            } else {
                tracing::info!(path = %user_config.display(), "created default config");
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, parsing fails or
    /// validation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default configuration to `path`, creating parent directories.
    fn create_default_config_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.editor.tab_size == 0 {
            return Err(Error::InvalidConfig(
                "editor.tab_size must be greater than zero".to_string(),
            ));
        }
        for mapping in &self.workspace.language_extensions {
            if mapping.language_id.is_empty() {
                return Err(Error::InvalidConfig(
                    "language_id cannot be empty".to_string(),
                ));
            }
            if mapping.extensions.iter().any(String::is_empty) {
                return Err(Error::InvalidConfig(format!(
                    "empty extension for language '{}'",
                    mapping.language_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.editor.position_encoding, PositionEncoding::Utf32);
        assert_eq!(config.editor.tab_size, 4);
        assert_eq!(config.editor.dictation_radius, 200);
        assert!(config.workspace.roots.is_empty());
        assert_eq!(config.limits.max_documents, 100);
        assert_eq!(config.limits.max_file_size, 10 * 1024 * 1024);
        assert!(!config.workspace.language_extensions.is_empty());
    }

    #[test]
    fn test_load_from_valid_toml() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(
            &tmp_dir,
            r#"
            [editor]
            position_encoding = "utf-16"
            tab_size = 2
            dictation_radius = 50

            [workspace]
            roots = ["/tmp/workspace"]

            [limits]
            max_documents = 5
        "#,
        );

        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.editor.position_encoding, PositionEncoding::Utf16);
        assert_eq!(config.editor.tab_size, 2);
        assert_eq!(config.editor.dictation_radius, 50);
        assert_eq!(config.workspace.roots, vec![PathBuf::from("/tmp/workspace")]);
        assert_eq!(config.limits.max_documents, 5);
        assert_eq!(config.limits.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let result = ServerConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(&tmp_dir, "invalid toml content {{}");
        assert!(matches!(
            ServerConfig::load_from(&path),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(&tmp_dir, "[editor]\nposition_encoding = \"utf-7\"\n");
        assert!(ServerConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_zero_tab_size_rejected() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(&tmp_dir, "[editor]\ntab_size = 0\n");
        let result = ServerConfig::load_from(&path);
        if let Err(Error::InvalidConfig(msg)) = result {
            assert!(msg.contains("tab_size"));
        } else {
            panic!("Expected InvalidConfig error");
        }
    }

    #[test]
    fn test_empty_language_id_rejected() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(
            &tmp_dir,
            r#"
            [[workspace.language_extensions]]
            extensions = ["nu"]
            language_id = ""
        "#,
        );
        assert!(matches!(
            ServerConfig::load_from(&path),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(&tmp_dir, "unknown_field = \"value\"\n");
        assert!(ServerConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(&tmp_dir, "");
        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.editor.tab_size, 4);
        assert_eq!(
            config.workspace.language_extensions,
            default_language_extensions()
        );
    }

    #[test]
    fn test_custom_language_extensions_replace_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let path = write_config(
            &tmp_dir,
            r#"
            [[workspace.language_extensions]]
            extensions = ["nu"]
            language_id = "nushell"
        "#,
        );
        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.workspace.language_extensions.len(), 1);
        assert_eq!(
            detect_language(Path::new("x.nu"), &config.workspace.language_extensions),
            "nushell"
        );
    }

    #[test]
    fn test_create_default_config_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("voicectx").join(CONFIG_FILE_NAME);

        ServerConfig::create_default_config_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[editor]"));
        assert!(content.contains("position_encoding = \"utf-32\""));
        assert!(content.contains("[[workspace.language_extensions]]"));

        let loaded = ServerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.limits, LimitsConfig::default());
    }
}
