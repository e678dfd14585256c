use std::path::Path;

use async_trait::async_trait;

use crate::domain::Transcription;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcription, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read audio: {0}")]
    AudioUnreadable(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("engine configuration invalid: {0}")]
    Misconfigured(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
