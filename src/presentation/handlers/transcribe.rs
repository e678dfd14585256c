use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{SpeechServiceError, TranscriptionReport};
use crate::domain::{AudioUpload, LanguageCode, TranscriptionRequest};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::error::{bad_request, error_response};
use super::form::FormFields;

pub const NO_FILE_MESSAGE: &str = "No file uploaded";
pub const NO_SPEECH_MESSAGE: &str =
    "No speech recognized. Ensure the audio contains speech and is in a supported format.";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub detected_source: Option<LanguageCode>,
    pub original_transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[tracing::instrument(skip(state, form))]
pub async fn transcribe_handler(State(state): State<AppState>, mut form: FormFields) -> Response {
    let Some(file) = form.take_file("file") else {
        tracing::warn!("Transcribe request with no file");
        return bad_request(NO_FILE_MESSAGE);
    };

    tracing::debug!(
        file_name = ?file.file_name,
        bytes = file.data.len(),
        "Audio upload received"
    );

    let request = TranscriptionRequest::new(
        AudioUpload::new(file.file_name, file.data),
        form.text("target_lang"),
        form.text("source_lang"),
    );

    match state.speech_service.transcribe(request).await {
        Ok(TranscriptionReport::NoSpeech {
            detected_source,
            original_transcript,
        }) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcript: String::new(),
                detected_source,
                original_transcript,
                error: Some(NO_SPEECH_MESSAGE.to_string()),
            }),
        )
            .into_response(),
        Ok(TranscriptionReport::Translated {
            transcript,
            detected_source,
            original_transcript,
        }) => {
            tracing::info!(
                detected_source = ?detected_source,
                transcript = %preview_text(&transcript),
                "Transcription request completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcript,
                    detected_source,
                    original_transcript,
                    error: None,
                }),
            )
                .into_response()
        }
        Err(SpeechServiceError::EmptyUpload) => {
            tracing::warn!("Transcribe request with empty file");
            bad_request(SpeechServiceError::EmptyUpload.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, details = ?e, "Transcription request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
