use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted slots, relative to the config directory
    pub dir: String,
    /// Name of the identity slot
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.key.is_empty() {
            return Err(ConfigError::storage("storage.key cannot be empty"));
        }

        if !self
            .key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::storage(format!(
                "storage.key may only contain [A-Za-z0-9_-], got '{}'",
                self.key
            )));
        }

        Ok(())
    }
}
