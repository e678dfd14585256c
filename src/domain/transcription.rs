use std::path::Path;

use bytes::Bytes;

use super::language_code::LanguageCode;

const DEFAULT_AUDIO_SUFFIX: &str = ".wav";

/// Text produced by a transcription engine, with the language it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
}

impl Transcription {
    pub fn new(text: impl Into<String>, language: Option<String>) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Audio received from a client, held in memory until staged for the engine.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: Option<String>,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(file_name: Option<String>, data: Bytes) -> Self {
        Self { file_name, data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// File suffix used when staging the upload, e.g. `.mp3`.
    pub fn suffix(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_else(|| DEFAULT_AUDIO_SUFFIX.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub upload: AudioUpload,
    pub target: LanguageCode,
    pub source_hint: Option<LanguageCode>,
}

impl TranscriptionRequest {
    pub fn new(upload: AudioUpload, target: Option<&str>, source_hint: Option<&str>) -> Self {
        Self {
            upload,
            target: LanguageCode::target_or_default(target),
            source_hint: LanguageCode::normalize(source_hint),
        }
    }
}
