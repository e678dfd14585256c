use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::application::ports::{
    LanguageDetectionError, LanguageDetector, TranslationEngine, TranslationError,
};
use crate::domain::{LanguageCode, SourceLanguage};

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Client for the public Google Translate `gtx` endpoint.
///
/// The same response carries the language Google detected for the input,
/// so this client also serves as the standalone language detector.
pub struct GoogleTranslateEngine {
    client: reqwest::Client,
    base_url: String,
}

/// Parsed `translate_a/single` payload.
#[derive(Debug)]
struct GtxResponse {
    translated: String,
    detected_source: Option<String>,
}

impl GoogleTranslateEngine {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Misconfigured(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    async fn request(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<GtxResponse, TranslationError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("parse response: {}", e)))?;

        parse_gtx_payload(&payload)
    }
}

/// Google expects regional codes for a few languages.
fn google_code(code: &str) -> &str {
    match code {
        "zh" => "zh-CN",
        other => other,
    }
}

fn parse_gtx_payload(payload: &Value) -> Result<GtxResponse, TranslationError> {
    let sentences = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("missing sentence list".to_string()))?;

    let translated: String = sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect();

    let detected_source = payload
        .get(2)
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(GtxResponse {
        translated,
        detected_source,
    })
}

#[async_trait]
impl TranslationEngine for GoogleTranslateEngine {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let result = self
            .request(text, google_code(source.as_str()), google_code(target.as_str()))
            .await?;

        tracing::debug!(
            chars = result.translated.len(),
            detected = ?result.detected_source,
            "Google translation completed"
        );

        Ok(result.translated)
    }
}

#[async_trait]
impl LanguageDetector for GoogleTranslateEngine {
    async fn detect(&self, text: &str) -> Result<String, LanguageDetectionError> {
        let result = self
            .request(text, "auto", "en")
            .await
            .map_err(|e| LanguageDetectionError::ApiRequestFailed(e.to_string()))?;

        result
            .detected_source
            .filter(|code| !code.trim().is_empty())
            .ok_or(LanguageDetectionError::Undetermined)
    }
}
