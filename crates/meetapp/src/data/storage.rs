//! Data directory access: configuration and keybindings files.

use std::fs;
use std::path::{Path, PathBuf};

use super::config_data::AppConfig;
use super::keybindings_data::KeybindingsConfig;

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Manages the data directory holding the client's files
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.meetapp/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".meetapp")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load config.yaml, writing a default one on first run so there is a
    /// file for the user to edit.
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            let config = AppConfig::default();
            self.save_config(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<(), StorageError> {
        self.init()?;

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Load keybindings from keybindings.yaml
    pub fn load_keybindings(&self) -> KeybindingsConfig {
        KeybindingsConfig::load_or_default(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config_data::DEFAULT_BASE_URL;

    #[test]
    fn test_init_creates_nested_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("home/.meetapp"));

        storage.init().unwrap();

        assert!(storage.root().is_dir());
    }

    #[test]
    fn test_first_load_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("meetapp"));

        let config = storage.load_config().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(dir.path().join("meetapp/config.yaml").exists());
    }

    #[test]
    fn test_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        let mut config = AppConfig::default();
        config.api.token = Some("abc".to_string());
        config.time_zone = Some("America/Sao_Paulo".to_string());
        storage.save_config(&config).unwrap();

        assert_eq!(storage.load_config().unwrap(), config);
    }

    #[test]
    fn test_hand_written_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "api:\n  base_url: https://meetapp.example\n  timeout_secs: 3\n",
        )
        .unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        let config = storage.load_config().unwrap();

        assert_eq!(config.api.base_url, "https://meetapp.example");
        assert_eq!(config.api.timeout_secs, 3);
        assert_ne!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_custom_keybindings_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(dir.path().join("keybindings.yaml"), "dashboard:\n  refresh: [\"f5\"]\n").unwrap();

        assert_eq!(storage.load_keybindings().dashboard.refresh, vec!["f5"]);
    }

    #[test]
    fn test_broken_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), "api: [unclosed\n").unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        assert!(matches!(
            storage.load_config(),
            Err(StorageError::Parse(_))
        ));
    }
}
