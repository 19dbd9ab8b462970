//! File-backed settings repositories.
//!
//! This module contains repository structs that load and save the bot's persisted
//! documents: the translation config, the channel registry, and the `.env` file the
//! API key can be mirrored into. Loads never fail (absent or unreadable files fall
//! back to defaults); saves replace the file through a temporary sibling.

pub mod channel_registry;
pub mod env_file;
pub mod translation_config;

#[cfg(test)]
mod test;

use std::path::{Path, PathBuf};

use crate::error::settings::SettingsError;

/// Writes `contents` to `path` by writing a sibling temporary file and renaming it
/// over the target.
pub(crate) async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SettingsError> {
    let tmp_path = temporary_path(path);

    tokio::fs::write(&tmp_path, contents)
        .await
        .map_err(|source| SettingsError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
