//! Scripted translator and factory for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{ProviderKind, Translator, TranslatorFactory};
use crate::{
    error::translation::TranslationError,
    model::{
        settings::Formality,
        translation::{TagHandling, Translation, TranslationRequest},
    },
};

/// How the mock answers.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Returns `"[<target>] <text>"`.
    Echo,
    /// Returns the given text.
    Fixed(String),
    /// Fails with `TranslationError::Unauthorized`.
    Unauthorized,
    /// Fails with `TranslationError::QuotaExceeded`.
    QuotaExceeded,
    /// Never answers within any reasonable timeout.
    Hang,
}

/// Owned copy of a request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub formality: Formality,
    pub tag_handling: Option<TagHandling>,
}

pub struct MockTranslator {
    mode: MockMode,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> Result<Translation, TranslationError> {
        self.calls.lock().unwrap().push(RecordedCall {
            text: request.text.to_string(),
            source_lang: request.source_lang.to_string(),
            target_lang: request.target_lang.to_string(),
            formality: request.formality,
            tag_handling: request.tag_handling,
        });

        match &self.mode {
            MockMode::Echo => Ok(Translation {
                text: format!("[{}] {}", request.target_lang, request.text),
                detected_source_lang: Some(request.source_lang.to_string()),
            }),
            MockMode::Fixed(text) => Ok(Translation {
                text: text.clone(),
                detected_source_lang: None,
            }),
            MockMode::Unauthorized => Err(TranslationError::Unauthorized(
                "Authorization failure, check auth_key".to_string(),
            )),
            MockMode::QuotaExceeded => Err(TranslationError::QuotaExceeded(
                "Quota exceeded".to_string(),
            )),
            MockMode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(TranslationError::EmptyResponse)
            }
        }
    }
}

/// Factory handing out one shared mock and recording the keys it was given.
pub struct MockTranslatorFactory {
    pub translator: Arc<MockTranslator>,
    keys: Mutex<Vec<String>>,
}

impl MockTranslatorFactory {
    pub fn new(mode: MockMode) -> Self {
        Self {
            translator: Arc::new(MockTranslator::new(mode)),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl TranslatorFactory for MockTranslatorFactory {
    fn provider(&self) -> ProviderKind {
        ProviderKind::DeepL
    }

    fn build(&self, api_key: &str) -> Option<Arc<dyn Translator>> {
        self.keys.lock().unwrap().push(api_key.to_string());

        if api_key.trim().is_empty() {
            return None;
        }

        let translator: Arc<dyn Translator> = self.translator.clone();
        Some(translator)
    }
}
