//! Channel registry document repository.

use dioxus_logger::tracing;
use std::path::Path;

use crate::{
    data::write_atomic, error::settings::SettingsError, model::channel_registry::ChannelRegistry,
};

/// Repository for the monitored channel registry JSON document.
pub struct ChannelRegistryRepository<'a> {
    path: &'a Path,
}

impl<'a> ChannelRegistryRepository<'a> {
    /// Creates a new ChannelRegistryRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the registry document
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Loads the channel registry.
    ///
    /// An absent, unreadable or malformed document yields an empty registry.
    /// Guilds stored with an empty channel list are dropped.
    pub async fn load(&self) -> ChannelRegistry {
        let contents = match tokio::fs::read_to_string(self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ChannelRegistry::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read channel registry {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                return ChannelRegistry::new();
            }
        };

        match serde_json::from_str::<ChannelRegistry>(&contents) {
            Ok(mut registry) => {
                registry.prune_empty();
                registry
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse channel registry {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                ChannelRegistry::new()
            }
        }
    }

    /// Overwrites the registry document with `registry`.
    pub async fn save(&self, registry: &ChannelRegistry) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(registry).map_err(|source| SettingsError::Json {
            path: self.path.to_path_buf(),
            source,
        })?;

        write_atomic(self.path, &json).await
    }
}
