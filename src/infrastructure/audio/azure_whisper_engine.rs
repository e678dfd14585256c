use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcription;

use super::openai_whisper_engine::audio_part;
use super::whisper_language::whisper_language_code;

pub struct AzureWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AzureWhisperEngine {
    pub fn new(
        base_url: &str,
        deployment: &str,
        api_key: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let endpoint = format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            base_url.trim_end_matches('/'),
            deployment,
            api_version,
        );
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Misconfigured(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct AzureTranscriptionResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription, TranscriptionError> {
        let file_part = audio_part(audio_path).await?;

        let form = multipart::Form::new()
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to Azure OpenAI Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: AzureTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            language = ?result.language,
            "Azure OpenAI Whisper transcription completed"
        );

        Ok(Transcription::new(
            result.text.trim(),
            result
                .language
                .as_deref()
                .filter(|l| !l.trim().is_empty())
                .and_then(whisper_language_code),
        ))
    }
}
