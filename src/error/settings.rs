use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the persisted settings documents.
///
/// Loads never surface these (they fall back to defaults); saves return them to
/// the admin command that triggered the write so the response can name the
/// failed target.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
