//! `.env` file repository used to mirror the API key.

use std::path::Path;

use crate::{data::write_atomic, error::settings::SettingsError};

/// Repository that rewrites single assignments in a dotenv file.
pub struct EnvFileRepository<'a> {
    path: &'a Path,
}

impl<'a> EnvFileRepository<'a> {
    /// Creates a new EnvFileRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the dotenv file
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Sets `key` to `value` in the dotenv file.
    ///
    /// Replaces every existing `KEY=` or `export KEY=` assignment in place, or appends
    /// one when the key is absent. All other lines are kept verbatim. A missing file is
    /// created.
    ///
    /// # Arguments
    /// - `key` - Variable name
    /// - `value` - New value, written unquoted
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(SettingsError::Io)` - File could not be read or replaced
    pub async fn upsert(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let existing = match tokio::fs::read_to_string(self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.to_path_buf(),
                    source,
                })
            }
        };

        let updated = upsert_assignment(&existing, key, value);

        write_atomic(self.path, updated.as_bytes()).await
    }
}

fn upsert_assignment(contents: &str, key: &str, value: &str) -> String {
    let assignment = format!("{key}={value}");
    let mut replaced = false;

    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| {
            if assigns(line, key) {
                replaced = true;
                assignment.clone()
            } else {
                line.to_string()
            }
        })
        .collect();

    if !replaced {
        lines.push(assignment);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn assigns(line: &str, key: &str) -> bool {
    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line).trim_start();

    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}
