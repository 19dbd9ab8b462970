use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::TestError;

/// Test environment owning a temporary settings directory.
///
/// The directory and everything in it is removed when the context is dropped, so
/// keep the context alive for as long as the paths are used.
pub struct TestContext {
    /// Temporary directory holding the settings files.
    pub dir: TempDir,
    /// Path of the translation config document (`config.json`).
    pub config_path: PathBuf,
    /// Path of the channel registry document (`channels.json`).
    pub channels_path: PathBuf,
    /// Path of the dotenv file (`.env`).
    pub env_path: PathBuf,
}

impl TestContext {
    /// Creates a context with a fresh, empty temporary directory.
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;

        Ok(Self {
            config_path: dir.path().join("config.json"),
            channels_path: dir.path().join("channels.json"),
            env_path: dir.path().join(".env"),
            dir,
        })
    }

    /// Reads and parses the config document as written by the code under test.
    pub fn read_config(&self) -> Result<Value, TestError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(&self.config_path)?)?)
    }

    /// Reads and parses the channel registry document.
    pub fn read_channels(&self) -> Result<Value, TestError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(
            &self.channels_path,
        )?)?)
    }

    /// Reads the dotenv file verbatim.
    pub fn read_env_file(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.env_path)?)
    }

    /// Path inside the directory that cannot be written to: its parent is a file.
    ///
    /// Used to exercise save failures.
    pub fn unwritable_path(&self) -> Result<PathBuf, TestError> {
        let blocker = self.dir.path().join("blocker");
        std::fs::write(&blocker, "")?;
        Ok(blocker.join("settings.json"))
    }
}
