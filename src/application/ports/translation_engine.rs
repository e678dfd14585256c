use async_trait::async_trait;

use crate::domain::{LanguageCode, SourceLanguage};

#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &LanguageCode,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine configuration invalid: {0}")]
    Misconfigured(String),
}
