//! Translation config document repository.

use dioxus_logger::tracing;
use std::path::Path;

use crate::{
    data::write_atomic, error::settings::SettingsError, model::settings::TranslationConfig,
};

/// Repository for the translation config JSON document.
pub struct TranslationConfigRepository<'a> {
    path: &'a Path,
}

impl<'a> TranslationConfigRepository<'a> {
    /// Creates a new TranslationConfigRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the config document
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Loads the translation config.
    ///
    /// Returns `TranslationConfig::default()` when the file does not exist. A file
    /// that exists but cannot be read or parsed is logged and also replaced by the
    /// default, so a damaged document never keeps the bot from starting.
    ///
    /// # Returns
    /// - `TranslationConfig` - Stored config, or the default
    pub async fn load(&self) -> TranslationConfig {
        let contents = match tokio::fs::read_to_string(self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", self.path.display());
                return TranslationConfig::default();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read config {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                return TranslationConfig::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to parse config {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                TranslationConfig::default()
            }
        }
    }

    /// Overwrites the config document with `config`.
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(SettingsError)` - Serialization or file system failure
    pub async fn save(&self, config: &TranslationConfig) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(config).map_err(|source| SettingsError::Json {
            path: self.path.to_path_buf(),
            source,
        })?;

        write_atomic(self.path, &json).await
    }
}
