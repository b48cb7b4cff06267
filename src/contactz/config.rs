use crate::error::{ContactzError, Result};
use crate::model::IdStyle;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "contactz-config.json";

/// Configuration for contactz, stored next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactzConfig {
    /// Name of the JSON file holding the contacts
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How ids are generated for new contacts
    #[serde(default)]
    pub id_style: IdStyle,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for ContactzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            id_style: IdStyle::default(),
        }
    }
}

impl ContactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactzError::Io)?;
        let config: ContactzConfig =
            serde_json::from_str(&content).map_err(ContactzError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactzError::Serialization)?;
        fs::write(config_path, content).map_err(ContactzError::Io)?;
        Ok(())
    }

    /// Set the data file name. Only a bare file name is accepted.
    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let is_bare = Path::new(name)
            .file_name()
            .map(|f| f == name)
            .unwrap_or(false);
        if !is_bare {
            return Err(ContactzError::Config(format!(
                "data-file must be a file name, got '{}'",
                name
            )));
        }
        self.data_file = name.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ContactzConfig::default();
        assert_eq!(config.data_file, "contacts.json");
        assert_eq!(config.id_style, IdStyle::Uuid);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(config, ContactzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ContactzConfig::default();
        config.id_style = IdStyle::Legacy;
        config.set_data_file("people.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"id_style":"legacy"}"#).unwrap();
        let loaded = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.id_style, IdStyle::Legacy);
        assert_eq!(loaded.data_file, "contacts.json");
    }

    #[test]
    fn test_data_file_rejects_paths() {
        let mut config = ContactzConfig::default();
        assert!(config.set_data_file("../elsewhere.json").is_err());
        assert!(config.set_data_file("").is_err());
        assert_eq!(config.data_file, "contacts.json");
    }
}
