use std::sync::Arc;

use crate::application::ports::LanguageDetector;
use crate::domain::{LanguageCode, Transcription};

/// Outcome of resolving the source language of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResolution {
    /// The transcript is blank; there is nothing to translate.
    NoSpeech { detected: Option<LanguageCode> },
    /// Authoritative source language, or `None` to let the engine decide.
    Resolved(Option<LanguageCode>),
}

/// Picks the source language from an explicit hint or from detection.
/// A hint always takes precedence over the engine-reported language.
pub struct SourceLanguageResolver {
    detector: Arc<dyn LanguageDetector>,
}

impl SourceLanguageResolver {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }

    #[tracing::instrument(skip(self, transcription), fields(engine_language = ?transcription.language))]
    pub async fn resolve_transcript(
        &self,
        transcription: &Transcription,
        hint: Option<&LanguageCode>,
    ) -> SourceResolution {
        let reported = LanguageCode::normalize(transcription.language.as_deref());

        if transcription.is_blank() {
            let detected = hint.cloned().or(reported);
            return SourceResolution::NoSpeech { detected };
        }

        if let Some(hint) = hint {
            tracing::debug!(hint = %hint, "Using caller supplied source language");
            return SourceResolution::Resolved(Some(hint.clone()));
        }

        if reported.is_some() {
            return SourceResolution::Resolved(reported);
        }

        SourceResolution::Resolved(self.detect(&transcription.text).await)
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn resolve_text(
        &self,
        text: &str,
        hint: Option<&LanguageCode>,
    ) -> Option<LanguageCode> {
        match hint {
            Some(hint) => Some(hint.clone()),
            None => self.detect(text).await,
        }
    }

    async fn detect(&self, text: &str) -> Option<LanguageCode> {
        match self.detector.detect(text).await {
            Ok(raw) => {
                let detected = LanguageCode::normalize(Some(&raw));
                tracing::debug!(raw = %raw, detected = ?detected, "Detected source language");
                detected
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    chars = text.chars().count(),
                    "Language detection failed, falling back to automatic source"
                );
                None
            }
        }
    }
}
