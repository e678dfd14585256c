use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TranscriptionError::Misconfigured(format!(
                    "api_key required for {} transcription",
                    settings.provider
                ))
            })?;

        match settings.provider {
            TranscriptionProviderSetting::OpenAi => {
                let engine = OpenAiWhisperEngine::new(
                    api_key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::Misconfigured("base_url required for azure".into())
                })?;
                let deployment = settings.deployment.as_deref().unwrap_or(&settings.model);
                let engine = AzureWhisperEngine::new(
                    base_url,
                    deployment,
                    &api_key,
                    &settings.api_version,
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
        }
    }
}
