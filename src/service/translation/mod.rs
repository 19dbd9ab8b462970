//! Translation provider clients and the adapter the relay calls.
//!
//! Each provider implements [`Translator`]. [`TranslationService`] wraps the current
//! provider (if an API key is configured) and applies the configured languages,
//! formality and a bounded timeout to every call. Providers are rebuilt through a
//! [`TranslatorFactory`] whenever the API key changes.

pub mod deepl;
pub mod google;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use crate::{
    error::translation::TranslationError,
    model::{
        settings::TranslationConfig,
        translation::{TagHandling, Translation, TranslationRequest},
    },
};

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;

/// Translation backend selected by `TRANSLATION_PROVIDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    DeepL,
    Google,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeepL => "deepl",
            Self::Google => "google",
        }
    }

    /// Environment variable the provider's API key is read from and mirrored to.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::DeepL => "DEEPL_API_KEY",
            Self::Google => "GOOGLE_API_KEY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DeepL => "DeepL",
            Self::Google => "Google Translate",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deepl" => Ok(Self::DeepL),
            "google" => Ok(Self::Google),
            other => Err(other.to_string()),
        }
    }
}

/// A translation provider client.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Performs a single translation call.
    async fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> Result<Translation, TranslationError>;
}

/// Builds provider clients from an API key.
pub trait TranslatorFactory: Send + Sync {
    fn provider(&self) -> ProviderKind;

    /// Returns `None` for a blank key.
    fn build(&self, api_key: &str) -> Option<Arc<dyn Translator>>;
}

/// Factory producing HTTP clients for one provider, sharing a single
/// `reqwest::Client` connection pool.
pub struct HttpTranslatorFactory {
    kind: ProviderKind,
    http: reqwest::Client,
}

impl HttpTranslatorFactory {
    pub fn new(kind: ProviderKind, http: reqwest::Client) -> Self {
        Self { kind, http }
    }
}

impl TranslatorFactory for HttpTranslatorFactory {
    fn provider(&self) -> ProviderKind {
        self.kind
    }

    fn build(&self, api_key: &str) -> Option<Arc<dyn Translator>> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return None;
        }

        let translator: Arc<dyn Translator> = match self.kind {
            ProviderKind::DeepL => Arc::new(DeepLTranslator::new(self.http.clone(), api_key)),
            ProviderKind::Google => Arc::new(GoogleTranslator::new(self.http.clone(), api_key)),
        };

        Some(translator)
    }
}

/// Adapter between callers and the configured provider.
///
/// Cloning is cheap; the relay clones the service out of the shared lock so a slow
/// provider call never holds the lock.
#[derive(Clone)]
pub struct TranslationService {
    translator: Option<Arc<dyn Translator>>,
    timeout: Duration,
}

impl TranslationService {
    /// Creates a new TranslationService instance.
    ///
    /// # Arguments
    /// - `translator` - Provider client, `None` when no API key is configured
    /// - `timeout` - Upper bound for a single provider call
    pub fn new(translator: Option<Arc<dyn Translator>>, timeout: Duration) -> Self {
        Self {
            translator,
            timeout,
        }
    }

    /// Whether a provider client is available.
    pub fn is_ready(&self) -> bool {
        self.translator.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Translates `text` using the languages and formality from `config`.
    ///
    /// Makes exactly one provider call, bounded by the configured timeout.
    ///
    /// # Arguments
    /// - `text` - Text to translate, already sanitized
    /// - `config` - Current translation settings
    /// - `tag_handling` - Markup handling hint forwarded to the provider
    ///
    /// # Returns
    /// - `Ok(Translation)` - Translated text
    /// - `Err(TranslationError::NotConfigured)` - No API key configured
    /// - `Err(TranslationError::Timeout)` - Provider did not answer in time
    /// - `Err(TranslationError)` - Provider or network failure
    pub async fn translate(
        &self,
        text: &str,
        config: &TranslationConfig,
        tag_handling: Option<TagHandling>,
    ) -> Result<Translation, TranslationError> {
        let Some(translator) = &self.translator else {
            return Err(TranslationError::NotConfigured);
        };

        let request = TranslationRequest::new(text, config, tag_handling);

        match tokio::time::timeout(self.timeout, translator.translate(&request)).await {
            Ok(result) => result,
            Err(_) => Err(TranslationError::Timeout(self.timeout)),
        }
    }
}
