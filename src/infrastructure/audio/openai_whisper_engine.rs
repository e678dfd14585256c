use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcription;

use super::whisper_language::whisper_language_code;

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Misconfigured(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        })
    }
}

#[derive(Deserialize)]
struct VerboseTranscriptionResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);
        let file_part = audio_part(audio_path).await?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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

        let result: VerboseTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        tracing::info!(
            chars = result.text.len(),
            language = ?result.language,
            "OpenAI Whisper transcription completed"
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

/// Reads a staged audio file into a multipart part named after the file.
pub(super) async fn audio_part(audio_path: &Path) -> Result<multipart::Part, TranscriptionError> {
    let audio_data = tokio::fs::read(audio_path)
        .await
        .map_err(|e| TranscriptionError::AudioUnreadable(format!("{}: {}", audio_path.display(), e)))?;

    let file_name = audio_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio.wav")
        .to_string();

    multipart::Part::bytes(audio_data)
        .file_name(file_name)
        .mime_str("application/octet-stream")
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
}
