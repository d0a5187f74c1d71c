use std::path::{Path, PathBuf};

use hbnb_store::DEFAULT_STORAGE_FILE;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which object store backs the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON file at [`ConsoleConfig::storage_path`].
    #[default]
    File,
    /// Volatile store; nothing survives the process.
    Memory,
}

/// Console settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// JSON storage file used by the file backend.
    pub storage_path: PathBuf,
    pub backend: Backend,
    /// Prompt printed before each command.
    pub prompt: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            backend: Backend::File,
            prompt: "(hbnb) ".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ConsoleConfig::default();
        assert_eq!(c.storage_path, PathBuf::from("file.json"));
        assert_eq!(c.backend, Backend::File);
        assert_eq!(c.prompt, "(hbnb) ");
        assert_eq!(c.log_level, "warn");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ConsoleConfig::from_toml_str("backend = \"memory\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(c.backend, Backend::Memory);
        assert_eq!(c.log_level, "debug");
        assert_eq!(c.storage_path, PathBuf::from("file.json"));
        assert_eq!(c.prompt, "(hbnb) ");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ConsoleConfig::from_toml_str("").unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn invalid_backend_is_rejected() {
        let err = ConsoleConfig::from_toml_str("backend = \"sql\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hbnb.toml");
        std::fs::write(&path, "storage_path = \"data/objects.json\"\nprompt = \"> \"\n").unwrap();
        let c = ConsoleConfig::load(&path).unwrap();
        assert_eq!(c.storage_path, PathBuf::from("data/objects.json"));
        assert_eq!(c.prompt, "> ");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = ConsoleConfig::load(Path::new("/nonexistent/hbnb.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hbnb.toml"));
    }

    #[test]
    fn toml_roundtrip() {
        let c = ConsoleConfig {
            backend: Backend::Memory,
            ..Default::default()
        };
        let text = toml::to_string(&c).unwrap();
        assert_eq!(ConsoleConfig::from_toml_str(&text).unwrap(), c);
    }
}
