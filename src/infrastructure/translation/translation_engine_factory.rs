use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    LanguageDetectionError, LanguageDetector, TranslationEngine, TranslationError,
};
use crate::presentation::config::{
    DetectionSettings, TranslationProviderSetting, TranslationSettings,
};

use super::google_translate_engine::GoogleTranslateEngine;
use super::libre_translate_engine::LibreTranslateEngine;

pub struct TranslationEngineFactory;

impl TranslationEngineFactory {
    pub fn create(
        settings: &TranslationSettings,
    ) -> Result<Arc<dyn TranslationEngine>, TranslationError> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);

        match settings.provider {
            TranslationProviderSetting::Google => {
                let engine = GoogleTranslateEngine::new(settings.base_url.clone(), timeout)?;
                Ok(Arc::new(engine))
            }
            TranslationProviderSetting::Libre => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranslationError::Misconfigured("base_url required for libre".into())
                })?;
                let engine = LibreTranslateEngine::new(base_url, settings.api_key.clone(), timeout)?;
                Ok(Arc::new(engine))
            }
        }
    }

    pub fn create_detector(
        settings: &DetectionSettings,
    ) -> Result<Arc<dyn LanguageDetector>, LanguageDetectionError> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);
        let misconfigured = |e: TranslationError| LanguageDetectionError::Misconfigured(e.to_string());

        match settings.provider {
            TranslationProviderSetting::Google => {
                let detector = GoogleTranslateEngine::new(settings.base_url.clone(), timeout)
                    .map_err(misconfigured)?;
                Ok(Arc::new(detector))
            }
            TranslationProviderSetting::Libre => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    LanguageDetectionError::Misconfigured("base_url required for libre".into())
                })?;
                let detector = LibreTranslateEngine::new(base_url, settings.api_key.clone(), timeout)
                    .map_err(misconfigured)?;
                Ok(Arc::new(detector))
            }
        }
    }
}
