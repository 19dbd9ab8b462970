use std::time::Duration;
use thiserror::Error;

/// Reasons a translation request produced no result.
///
/// The relay path logs every variant and stays silent in the channel; admin
/// commands show the message to the owner.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// No API key has been configured, so no provider client exists.
    #[error("No translation API key is configured")]
    NotConfigured,

    /// The provider refused the API key (HTTP 401/403).
    #[error("The translation provider rejected the API key: {0}")]
    Unauthorized(String),

    /// Character quota or request rate exhausted (DeepL 456, HTTP 429).
    #[error("Translation quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success response from the provider.
    #[error("The translation provider returned {status}: {message}")]
    ProviderRejected {
        /// HTTP status code returned by the provider
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// The request never produced a response.
    #[error("Failed to reach the translation provider: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    /// The provider did not answer within the configured bound.
    #[error("Translation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The provider answered successfully but without any translated text.
    #[error("The translation provider returned no translation")]
    EmptyResponse,
}
