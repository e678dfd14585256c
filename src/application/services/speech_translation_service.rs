use std::sync::Arc;

use crate::application::ports::{
    AudioStaging, LanguageDetector, StagingError, TranscriptionEngine, TranscriptionError,
    TranslationEngine,
};
use crate::domain::{LanguageCode, TranscriptionRequest, TranslationRequest};

use super::source_language_resolver::{SourceLanguageResolver, SourceResolution};
use super::translation_orchestrator::TranslationOrchestrator;

/// Drives transcription, source resolution and translation for one request.
pub struct SpeechTranslationService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    audio_staging: Arc<dyn AudioStaging>,
    resolver: SourceLanguageResolver,
    orchestrator: TranslationOrchestrator,
}

impl SpeechTranslationService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        translation_engine: Arc<dyn TranslationEngine>,
        language_detector: Arc<dyn LanguageDetector>,
        audio_staging: Arc<dyn AudioStaging>,
    ) -> Self {
        Self {
            transcription_engine,
            audio_staging,
            resolver: SourceLanguageResolver::new(language_detector),
            orchestrator: TranslationOrchestrator::new(translation_engine),
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            bytes = request.upload.size_bytes(),
            target = %request.target,
            hint = ?request.source_hint,
        )
    )]
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionReport, SpeechServiceError> {
        if request.upload.is_empty() {
            return Err(SpeechServiceError::EmptyUpload);
        }

        let staged = self.audio_staging.stage(&request.upload).await?;
        let transcription = self.transcription_engine.transcribe(&staged).await?;
        drop(staged);

        tracing::info!(
            chars = transcription.text.len(),
            engine_language = ?transcription.language,
            "Audio transcribed"
        );

        let resolution = self
            .resolver
            .resolve_transcript(&transcription, request.source_hint.as_ref())
            .await;

        let detected = match resolution {
            SourceResolution::NoSpeech { detected } => {
                tracing::info!("No speech recognized in upload");
                return Ok(TranscriptionReport::NoSpeech {
                    detected_source: detected,
                    original_transcript: transcription.text,
                });
            }
            SourceResolution::Resolved(detected) => detected,
        };

        let outcome = self
            .orchestrator
            .translate(&transcription.text, &request.target, detected.as_ref())
            .await;

        let same_language = detected.as_ref() == Some(&request.target);
        let transcript = match outcome.into_text() {
            Some(text) => text,
            None if same_language => transcription.text.clone(),
            None => String::new(),
        };

        Ok(TranscriptionReport::Translated {
            transcript,
            detected_source: detected,
            original_transcript: transcription.text,
        })
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            chars = request.text.len(),
            target = %request.target,
            hint = ?request.source_hint,
        )
    )]
    pub async fn translate(&self, request: TranslationRequest) -> TextTranslationReport {
        if !request.has_text() {
            return TextTranslationReport::MissingText;
        }

        let detected = self
            .resolver
            .resolve_text(&request.text, request.source_hint.as_ref())
            .await;

        let outcome = self
            .orchestrator
            .translate(&request.text, &request.target, detected.as_ref())
            .await;

        match outcome.into_text() {
            Some(translated) => TextTranslationReport::Translated {
                translated,
                detected_source: detected,
            },
            None if detected.as_ref() == Some(&request.target) => {
                TextTranslationReport::Translated {
                    translated: request.text,
                    detected_source: detected,
                }
            }
            None => TextTranslationReport::Failed {
                detected_source: detected,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionReport {
    NoSpeech {
        detected_source: Option<LanguageCode>,
        original_transcript: String,
    },
    Translated {
        transcript: String,
        detected_source: Option<LanguageCode>,
        original_transcript: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextTranslationReport {
    MissingText,
    Translated {
        translated: String,
        detected_source: Option<LanguageCode>,
    },
    Failed {
        detected_source: Option<LanguageCode>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("Uploaded file is empty")]
    EmptyUpload,
    #[error("staging upload: {0}")]
    Staging(#[from] StagingError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}
