mod language_code;
mod transcription;
mod translation;

pub use language_code::{DEFAULT_TARGET_LANGUAGE, LanguageCode, SUPPORTED_LANGUAGES};
pub use transcription::{AudioUpload, Transcription, TranscriptionRequest};
pub use translation::{SourceLanguage, TranslationOutcome, TranslationRequest};
