use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Registry documents store Discord IDs as strings; a value that does not
    /// parse means the file was edited by hand or is corrupt.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The shared HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
