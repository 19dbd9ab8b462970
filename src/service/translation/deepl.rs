//! DeepL API v2 client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::Translator;
use crate::{
    error::translation::TranslationError,
    model::{
        settings::Formality,
        translation::{Translation, TranslationRequest},
    },
};

const DEEPL_FREE_URL: &str = "https://api-free.deepl.com";
const DEEPL_PRO_URL: &str = "https://api.deepl.com";

/// DeepL quota exhausted.
const STATUS_QUOTA_EXCEEDED: u16 = 456;

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formality: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_handling: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    detected_source_language: Option<String>,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// DeepL client for one API key.
///
/// Keys ending in `:fx` belong to the free plan and are sent to the free endpoint.
pub struct DeepLTranslator {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DeepLTranslator {
    pub fn new(http: reqwest::Client, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url_for_key(api_key).to_string(),
        }
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> Result<Translation, TranslationError> {
        let response = self
            .http
            .post(format!("{}/v2/translate", self.base_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .json(&build_body(request))
            .send()
            .await
            .map_err(TranslationError::NetworkFailure)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error(status, &body));
        }

        let body = response
            .json::<TranslateResponse>()
            .await
            .map_err(TranslationError::NetworkFailure)?;

        into_translation(body)
    }
}

fn base_url_for_key(api_key: &str) -> &'static str {
    if api_key.trim_end().ends_with(":fx") {
        DEEPL_FREE_URL
    } else {
        DEEPL_PRO_URL
    }
}

fn build_body<'a>(request: &TranslationRequest<'a>) -> TranslateBody<'a> {
    let source_lang = Some(request.source_lang).filter(|lang| !lang.is_empty());
    let formality = match request.formality {
        Formality::Default => None,
        other => Some(other.as_str()),
    };

    TranslateBody {
        text: [request.text],
        target_lang: request.target_lang,
        source_lang,
        formality,
        tag_handling: request.tag_handling.map(|handling| handling.as_str()),
    }
}

fn into_translation(body: TranslateResponse) -> Result<Translation, TranslationError> {
    let first = body
        .translations
        .into_iter()
        .next()
        .ok_or(TranslationError::EmptyResponse)?;

    Ok(Translation {
        text: first.text,
        detected_source_lang: first.detected_source_language,
    })
}

fn map_error(status: StatusCode, body: &str) -> TranslationError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    match status.as_u16() {
        401 | 403 => TranslationError::Unauthorized(message),
        429 | STATUS_QUOTA_EXCEEDED => TranslationError::QuotaExceeded(message),
        code => TranslationError::ProviderRejected {
            status: code,
            message,
        },
    }
}
