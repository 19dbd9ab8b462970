use thiserror::Error;

/// Errors that can occur while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or seed file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seed value could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
