//! Translation settings persisted in the config document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SOURCE_LANG: &str = "EN";
pub const DEFAULT_TARGET_LANG: &str = "JA";

/// Register of the translated text, passed straight through to DeepL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Default,
    More,
    Less,
    PreferMore,
    PreferLess,
}

impl Formality {
    pub const ALL: [Formality; 5] = [
        Formality::Default,
        Formality::More,
        Formality::Less,
        Formality::PreferMore,
        Formality::PreferLess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::More => "more",
            Self::Less => "less",
            Self::PreferMore => "prefer_more",
            Self::PreferLess => "prefer_less",
        }
    }

    /// Comma separated list of accepted values, for rejection messages.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(Formality::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Formality {
    fn default() -> Self {
        Self::More
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = String;

    /// Parses the exact lowercase names; anything else is rejected with the
    /// offending input.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formality| formality.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

/// Translation configuration document.
///
/// Fields missing from the stored JSON take their defaults. Files written by
/// older versions of the bot name the key `deepl_api_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub source_lang: String,
    pub target_lang: String,
    pub formality: Formality,
    #[serde(alias = "deepl_api_key")]
    pub api_key: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            formality: Formality::default(),
            api_key: None,
        }
    }
}

impl TranslationConfig {
    /// Whether a non-blank API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_formality() {
        for formality in Formality::ALL {
            assert_eq!(formality.as_str().parse::<Formality>(), Ok(formality));
        }
    }

    #[test]
    fn rejects_unknown_formality() {
        assert_eq!("polite".parse::<Formality>(), Err("polite".to_string()));
        assert!("MORE".parse::<Formality>().is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: TranslationConfig =
            serde_json::from_str(r#"{ "target_lang": "DE" }"#).unwrap();

        assert_eq!(config.source_lang, "EN");
        assert_eq!(config.target_lang, "DE");
        assert_eq!(config.formality, Formality::More);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn reads_legacy_key_name() {
        let config: TranslationConfig = serde_json::from_str(
            r#"{ "deepl_api_key": "abc:fx", "source_lang": "EN", "target_lang": "JA", "formality": "prefer_less" }"#,
        )
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("abc:fx"));
        assert_eq!(config.formality, Formality::PreferLess);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = TranslationConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }
}
