use std::sync::Arc;

use crate::application::services::SpeechTranslationService;

/// Process-wide handles shared by every request. Built once at startup and
/// never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub speech_service: Arc<SpeechTranslationService>,
    pub max_upload_bytes: usize,
}
