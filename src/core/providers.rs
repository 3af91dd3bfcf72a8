//! Provider invokers for the fallback chain
//!
//! Each invoker wraps one external translation service behind the uniform
//! [`TranslationProvider`] contract: a single outbound call per invocation,
//! no retries, no local state. Failures are signalled to the orchestrator
//! rather than swallowed here.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::core::errors::{Result, TranslationError};

/// A single external translation provider
#[async_trait]
pub trait TranslationProvider: Send + Sync + std::fmt::Debug {
    /// Short provider name used in logs and error values
    fn name(&self) -> &'static str;

    /// Translate `text` into `target_lang`, issuing exactly one outbound call
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Reject empty payloads so the orchestrator can advance the chain
fn non_empty(provider: &'static str, translation: String) -> Result<String> {
    if translation.trim().is_empty() {
        Err(TranslationError::EmptyTranslation { provider })
    } else {
        Ok(translation)
    }
}

/// Read the response body, mapping non-2xx statuses to `ApiError`
async fn check_status(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(TranslationError::ApiError {
            provider,
            status: status.as_u16(),
            message,
        })
    }
}

/// Google web translation endpoint (`translate_a/single`, `client=gtx`)
///
/// The response is a JSON array-of-arrays; the translation is the
/// concatenation of the first element of each segment in `json[0]`.
#[derive(Debug, Clone)]
pub struct GoogleWebProvider {
    client: reqwest::Client,
    endpoint: String,
    source_lang: String,
}

impl GoogleWebProvider {
    /// Create an invoker against the given endpoint
    pub fn new(client: reqwest::Client, endpoint: String, source_lang: String) -> Self {
        Self {
            client,
            endpoint,
            source_lang,
        }
    }
}

/// Concatenate the translated segments of a Google web response
fn extract_google_segments(json: &serde_json::Value) -> Option<String> {
    let segments = json.get(0)?.as_array()?;
    let mut translation = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translation.push_str(part);
        }
    }
    Some(translation)
}

#[async_trait]
impl TranslationProvider for GoogleWebProvider {
    fn name(&self) -> &'static str {
        "google-web"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                provider: self.name(),
                message: e.to_string(),
            })?;

        let response = check_status(self.name(), response).await?;

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    provider: self.name(),
                    message: e.to_string(),
                })?;

        let translation = extract_google_segments(&json).ok_or_else(|| {
            TranslationError::InvalidResponseError {
                provider: self.name(),
                message: "no translated segments in response".to_string(),
            }
        })?;

        non_empty(self.name(), translation)
    }
}

/// Lingva instance (`/api/v1/{source}/{target}/{text}`)
#[derive(Debug, Clone)]
pub struct LingvaProvider {
    client: reqwest::Client,
    endpoint: String,
    source_lang: String,
}

/// Lingva response body
#[derive(Debug, Deserialize)]
struct LingvaResponse {
    translation: String,
}

impl LingvaProvider {
    /// Create an invoker against the given instance base URL
    pub fn new(client: reqwest::Client, endpoint: String, source_lang: String) -> Self {
        Self {
            client,
            endpoint,
            source_lang,
        }
    }
}

#[async_trait]
impl TranslationProvider for LingvaProvider {
    fn name(&self) -> &'static str {
        "lingva"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        // The query text travels in the URL path, so it must be path-encoded
        let encoded = utf8_percent_encode(text, NON_ALPHANUMERIC);
        let url = format!(
            "{}/api/v1/{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.source_lang,
            target_lang,
            encoded
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                provider: self.name(),
                message: e.to_string(),
            })?;

        let response = check_status(self.name(), response).await?;

        let body: LingvaResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    provider: self.name(),
                    message: e.to_string(),
                })?;

        non_empty(self.name(), body.translation)
    }
}

/// MyMemory query endpoint (`/get?q=..&langpair=source|target`)
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    endpoint: String,
    source_lang: String,
}

/// MyMemory response envelope
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryData,
}

/// Payload of a MyMemory response
#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryProvider {
    /// Create an invoker against the given endpoint
    pub fn new(client: reqwest::Client, endpoint: String, source_lang: String) -> Self {
        Self {
            client,
            endpoint,
            source_lang,
        }
    }

    /// MyMemory rejects `auto` in langpair, so it gets English instead
    fn effective_source(&self) -> &str {
        if self.source_lang == "auto" {
            "en"
        } else {
            &self.source_lang
        }
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let langpair = format!("{}|{}", self.effective_source(), target_lang);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                provider: self.name(),
                message: e.to_string(),
            })?;

        let response = check_status(self.name(), response).await?;

        let body: MyMemoryResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    provider: self.name(),
                    message: e.to_string(),
                })?;

        let translation = body.response_data.translated_text.ok_or_else(|| {
            TranslationError::InvalidResponseError {
                provider: self.name(),
                message: "responseData.translatedText missing".to_string(),
            }
        })?;

        non_empty(self.name(), translation)
    }
}

/// LibreTranslate instance (`POST /translate`)
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    endpoint: String,
    source_lang: String,
}

/// LibreTranslate response body
#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslateProvider {
    /// Create an invoker against the given instance base URL
    pub fn new(client: reqwest::Client, endpoint: String, source_lang: String) -> Self {
        Self {
            client,
            endpoint,
            source_lang,
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));
        let body = serde_json::json!({
            "q": text,
            "source": self.source_lang,
            "target": target_lang,
            "format": "text",
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                provider: self.name(),
                message: e.to_string(),
            })?;

        let response = check_status(self.name(), response).await?;

        let body: LibreTranslateResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    provider: self.name(),
                    message: e.to_string(),
                })?;

        non_empty(self.name(), body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_google_segments_concatenates_parts() {
        let body = json!([
            [
                ["আমার ", "My ", null],
                ["ফসল", "crops", null]
            ],
            null,
            "en"
        ]);

        assert_eq!(
            extract_google_segments(&body),
            Some("আমার ফসল".to_string())
        );
    }

    #[test]
    fn test_extract_google_segments_rejects_non_array() {
        let body = json!({"error": "unexpected"});
        assert_eq!(extract_google_segments(&body), None);
    }

    #[test]
    fn test_mymemory_response_shape() {
        let body = json!({
            "responseData": {"translatedText": "ধান", "match": 0.98},
            "responseStatus": 200
        });

        let parsed: MyMemoryResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.response_data.translated_text.as_deref(), Some("ধান"));
    }

    #[test]
    fn test_libretranslate_response_shape() {
        let body = json!({"translatedText": "গম"});
        let parsed: LibreTranslateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.translated_text, "গম");
    }

    #[test]
    fn test_non_empty_rejects_whitespace() {
        assert!(non_empty("google-web", "   ".to_string()).is_err());
        assert!(non_empty("google-web", "ok".to_string()).is_ok());
    }

    #[test]
    fn test_mymemory_auto_source_becomes_english() {
        let provider = MyMemoryProvider::new(
            reqwest::Client::new(),
            "https://api.mymemory.translated.net/get".to_string(),
            "auto".to_string(),
        );
        assert_eq!(provider.effective_source(), "en");

        let provider = MyMemoryProvider::new(
            reqwest::Client::new(),
            "https://api.mymemory.translated.net/get".to_string(),
            "en".to_string(),
        );
        assert_eq!(provider.effective_source(), "en");
    }
}
