mod audio_staging;
mod language_detector;
mod transcription_engine;
mod translation_engine;

pub use audio_staging::{AudioStaging, StagingError};
pub use language_detector::{LanguageDetectionError, LanguageDetector};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_engine::{TranslationEngine, TranslationError};
