//! Google Cloud Translation API v2 client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::Translator;
use crate::{
    error::translation::TranslationError,
    model::translation::{Translation, TranslationRequest},
};

const GOOGLE_TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Serialize)]
struct TranslateBody {
    q: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<GoogleTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Google Translate client for one API key.
///
/// Formality and tag handling have no Google equivalent and are ignored; text is
/// always sent as plain text.
pub struct GoogleTranslator {
    http: reqwest::Client,
    api_key: String,
}

impl GoogleTranslator {
    pub fn new(http: reqwest::Client, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> Result<Translation, TranslationError> {
        let response = self
            .http
            .post(GOOGLE_TRANSLATE_URL)
            .query(&[("key", self.api_key.as_str())])
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

/// Google expects lowercase BCP-47 codes (`ja`, `en`, `zh-tw`).
fn build_body(request: &TranslationRequest<'_>) -> TranslateBody {
    TranslateBody {
        q: request.text.to_string(),
        target: request.target_lang.to_ascii_lowercase(),
        source: Some(request.source_lang.to_ascii_lowercase()).filter(|lang| !lang.is_empty()),
        format: "text",
    }
}

fn into_translation(body: TranslateResponse) -> Result<Translation, TranslationError> {
    let first = body
        .data
        .translations
        .into_iter()
        .next()
        .ok_or(TranslationError::EmptyResponse)?;

    Ok(Translation {
        text: first.translated_text,
        detected_source_lang: first
            .detected_source_language
            .map(|lang| lang.to_ascii_uppercase()),
    })
}

fn map_error(status: StatusCode, body: &str) -> TranslationError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|response| response.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    match status.as_u16() {
        401 | 403 => TranslationError::Unauthorized(message),
        429 => TranslationError::QuotaExceeded(message),
        code => TranslationError::ProviderRejected {
            status: code,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::settings::Formality;

    #[test]
    fn body_lowercases_languages() {
        let request = TranslationRequest {
            text: "Hello",
            source_lang: "EN",
            target_lang: "JA",
            formality: Formality::More,
            tag_handling: None,
        };

        let json = serde_json::to_value(build_body(&request)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "q": "Hello", "source": "en", "target": "ja", "format": "text" })
        );
    }

    #[test]
    fn parses_translation() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"data":{"translations":[{"translatedText":"こんにちは","detectedSourceLanguage":"en"}]}}"#,
        )
        .unwrap();

        let translation = into_translation(body).unwrap();
        assert_eq!(translation.text, "こんにちは");
        assert_eq!(translation.detected_source_lang.as_deref(), Some("EN"));
    }

    #[test]
    fn maps_invalid_key() {
        let err = map_error(
            StatusCode::FORBIDDEN,
            r#"{"error":{"code":403,"message":"API key not valid.","errors":[]}}"#,
        );
        assert!(matches!(err, TranslationError::Unauthorized(msg) if msg == "API key not valid."));
    }

    #[test]
    fn maps_other_failures() {
        let err = map_error(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert!(matches!(
            err,
            TranslationError::ProviderRejected { status: 500, ref message } if message == "Internal Server Error"
        ));
    }
}
