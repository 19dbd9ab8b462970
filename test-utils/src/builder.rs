use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with seeded settings files.
///
/// Each file is only written when its `with_*` method was called, so tests can
/// exercise the "file absent" paths by leaving it out.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_config(serde_json::json!({ "source_lang": "EN", "target_lang": "DE" }))
///     .with_env_file("BOT_TOKEN=abc\n")
///     .build()?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    config: Option<String>,
    channels: Option<String>,
    env_file: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the translation config document with `value`.
    pub fn with_config(mut self, value: Value) -> Self {
        self.config = Some(value.to_string());
        self
    }

    /// Seeds the translation config document with raw text, valid JSON or not.
    pub fn with_raw_config(mut self, contents: &str) -> Self {
        self.config = Some(contents.to_string());
        self
    }

    /// Seeds the channel registry document with `value`.
    pub fn with_channels(mut self, value: Value) -> Self {
        self.channels = Some(value.to_string());
        self
    }

    /// Seeds the channel registry document with raw text, valid JSON or not.
    pub fn with_raw_channels(mut self, contents: &str) -> Self {
        self.channels = Some(contents.to_string());
        self
    }

    /// Seeds the dotenv file.
    pub fn with_env_file(mut self, contents: &str) -> Self {
        self.env_file = Some(contents.to_string());
        self
    }

    /// Creates the temporary directory and writes every seeded file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the directory
    /// - `Err(TestError::Io)` - Directory or file creation failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(config) = self.config {
            std::fs::write(&context.config_path, config)?;
        }
        if let Some(channels) = self.channels {
            std::fs::write(&context.channels_path, channels)?;
        }
        if let Some(env_file) = self.env_file {
            std::fs::write(&context.env_path, env_file)?;
        }

        Ok(context)
    }
}
