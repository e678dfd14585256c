use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::TextTranslationReport;
use crate::domain::{LanguageCode, TranslationRequest};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::form::FormFields;

pub const NO_TEXT_MESSAGE: &str = "No text provided.";
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed.";

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub detected_source: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct MissingTextResponse {
    pub translated: String,
    pub error: String,
}

#[tracing::instrument(skip(state, form))]
pub async fn translate_handler(State(state): State<AppState>, form: FormFields) -> Response {
    let request = TranslationRequest::new(
        form.text("text").unwrap_or_default(),
        form.text("target_lang"),
        form.text("source_lang"),
    );

    tracing::debug!(text = %preview_text(&request.text), "Processing translation request");

    match state.speech_service.translate(request).await {
        TextTranslationReport::MissingText => (
            StatusCode::OK,
            Json(MissingTextResponse {
                translated: String::new(),
                error: NO_TEXT_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        TextTranslationReport::Translated {
            translated,
            detected_source,
        } => (
            StatusCode::OK,
            Json(TranslateResponse {
                translated,
                detected_source,
                error: None,
            }),
        )
            .into_response(),
        TextTranslationReport::Failed { detected_source } => (
            StatusCode::OK,
            Json(TranslateResponse {
                translated: String::new(),
                detected_source,
                error: Some(TRANSLATION_FAILED_MESSAGE.to_string()),
            }),
        )
            .into_response(),
    }
}
