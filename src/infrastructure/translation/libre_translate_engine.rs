use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    LanguageDetectionError, LanguageDetector, TranslationEngine, TranslationError,
};
use crate::domain::{LanguageCode, SourceLanguage};

/// Client for a LibreTranslate server (`/translate` and `/detect`).
pub struct LibreTranslateEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateEngine {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Misconfigured(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, TranslationError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
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

        Ok(response)
    }
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateReply {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Serialize)]
struct DetectBody<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
    #[serde(default)]
    confidence: f32,
}

#[async_trait]
impl TranslationEngine for LibreTranslateEngine {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let body = TranslateBody {
            q: text,
            source: source.as_str(),
            target: target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let reply: TranslateReply = self
            .post("/translate", &body)
            .await?
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::debug!(
            chars = reply.translated_text.len(),
            "LibreTranslate translation completed"
        );

        Ok(reply.translated_text)
    }
}

#[async_trait]
impl LanguageDetector for LibreTranslateEngine {
    async fn detect(&self, text: &str) -> Result<String, LanguageDetectionError> {
        let body = DetectBody {
            q: text,
            api_key: self.api_key.as_deref(),
        };

        let detections: Vec<Detection> = self
            .post("/detect", &body)
            .await
            .map_err(|e| LanguageDetectionError::ApiRequestFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| LanguageDetectionError::InvalidResponse(e.to_string()))?;

        detections
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
            .map(|d| d.language)
            .ok_or(LanguageDetectionError::Undetermined)
    }
}
