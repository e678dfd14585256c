mod source_language_resolver;
mod speech_translation_service;
mod translation_orchestrator;
mod translation_quality;

pub use source_language_resolver::{SourceLanguageResolver, SourceResolution};
pub use speech_translation_service::{
    SpeechServiceError, SpeechTranslationService, TextTranslationReport, TranscriptionReport,
};
pub use translation_orchestrator::TranslationOrchestrator;
pub use translation_quality::looks_suspect;
