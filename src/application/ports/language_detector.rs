use async_trait::async_trait;

/// Best-guess language identification for a piece of text.
///
/// Returns the detector's raw identifier; callers normalize it.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<String, LanguageDetectionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageDetectionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("no language detected")]
    Undetermined,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("detector configuration invalid: {0}")]
    Misconfigured(String),
}
