use std::sync::Arc;

use speechbridge::application::services::{SourceLanguageResolver, SourceResolution};
use speechbridge::domain::{LanguageCode, Transcription};

use crate::helpers::MockLanguageDetector;

fn code(raw: &str) -> LanguageCode {
    LanguageCode::normalize(Some(raw)).unwrap()
}

fn resolver(detector: &Arc<MockLanguageDetector>) -> SourceLanguageResolver {
    SourceLanguageResolver::new(detector.clone())
}

#[tokio::test]
async fn given_hint_and_engine_language_when_resolving_transcript_then_hint_wins() {
    let detector = Arc::new(MockLanguageDetector::detecting("de"));
    let transcription = Transcription::new("bonjour", Some("fr".to_string()));

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, Some(&code("ta")))
        .await;

    assert_eq!(resolution, SourceResolution::Resolved(Some(code("ta"))));
    assert_eq!(detector.call_count(), 0);
}

#[tokio::test]
async fn given_engine_language_without_hint_when_resolving_transcript_then_uses_engine() {
    let detector = Arc::new(MockLanguageDetector::detecting("de"));
    let transcription = Transcription::new("bonjour", Some("fr".to_string()));

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, None)
        .await;

    assert_eq!(resolution, SourceResolution::Resolved(Some(code("fr"))));
    assert_eq!(detector.call_count(), 0);
}

#[tokio::test]
async fn given_engine_language_name_when_resolving_transcript_then_normalizes_it() {
    let detector = Arc::new(MockLanguageDetector::failing());
    let transcription = Transcription::new("namaste", Some("Hindi".to_string()));

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, None)
        .await;

    assert_eq!(resolution, SourceResolution::Resolved(Some(code("hi"))));
}

#[tokio::test]
async fn given_no_engine_language_when_resolving_transcript_then_detects_from_text() {
    let detector = Arc::new(MockLanguageDetector::detecting("fr"));
    let transcription = Transcription::new("bonjour", None);

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, None)
        .await;

    assert_eq!(resolution, SourceResolution::Resolved(Some(code("fr"))));
    assert_eq!(detector.calls.lock().unwrap().as_slice(), ["bonjour"]);
}

#[tokio::test]
async fn given_detection_failure_when_resolving_transcript_then_source_is_unknown() {
    let detector = Arc::new(MockLanguageDetector::failing());
    let transcription = Transcription::new("bonjour", None);

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, None)
        .await;

    assert_eq!(resolution, SourceResolution::Resolved(None));
}

#[tokio::test]
async fn given_blank_transcript_when_resolving_then_reports_no_speech() {
    let detector = Arc::new(MockLanguageDetector::detecting("fr"));
    let transcription = Transcription::new("   ", Some("en".to_string()));

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, None)
        .await;

    assert_eq!(
        resolution,
        SourceResolution::NoSpeech {
            detected: Some(code("en"))
        }
    );
    assert_eq!(detector.call_count(), 0);
}

#[tokio::test]
async fn given_blank_transcript_and_hint_when_resolving_then_no_speech_carries_hint() {
    let detector = Arc::new(MockLanguageDetector::detecting("fr"));
    let transcription = Transcription::new("", Some("en".to_string()));

    let resolution = resolver(&detector)
        .resolve_transcript(&transcription, Some(&code("ta")))
        .await;

    assert_eq!(
        resolution,
        SourceResolution::NoSpeech {
            detected: Some(code("ta"))
        }
    );
}

#[tokio::test]
async fn given_text_without_hint_when_resolving_then_uses_detector() {
    let detector = Arc::new(MockLanguageDetector::detecting("FR"));

    let resolved = resolver(&detector).resolve_text("bonjour", None).await;

    assert_eq!(resolved, Some(code("fr")));
}

#[tokio::test]
async fn given_text_with_hint_when_resolving_then_skips_detection() {
    let detector = Arc::new(MockLanguageDetector::detecting("fr"));

    let resolved = resolver(&detector)
        .resolve_text("bonjour", Some(&code("es")))
        .await;

    assert_eq!(resolved, Some(code("es")));
    assert_eq!(detector.call_count(), 0);
}

#[tokio::test]
async fn given_text_and_failing_detector_when_resolving_then_returns_none() {
    let detector = Arc::new(MockLanguageDetector::failing());

    let resolved = resolver(&detector).resolve_text("bonjour", None).await;

    assert_eq!(resolved, None);
}
