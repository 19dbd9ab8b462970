//! Request and result types exchanged with translation providers.

use crate::model::settings::{Formality, TranslationConfig};

/// How the provider should treat markup in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagHandling {
    Xml,
}

impl TagHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
        }
    }
}

/// A single translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub formality: Formality,
    pub tag_handling: Option<TagHandling>,
}

impl<'a> TranslationRequest<'a> {
    /// Builds a request using the languages and formality from `config`.
    pub fn new(
        text: &'a str,
        config: &'a TranslationConfig,
        tag_handling: Option<TagHandling>,
    ) -> Self {
        Self {
            text,
            source_lang: &config.source_lang,
            target_lang: &config.target_lang,
            formality: config.formality,
            tag_handling,
        }
    }
}

/// Successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Source language reported by the provider, upper-cased.
    pub detected_source_lang: Option<String>,
}
