use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use speechbridge::application::ports::{
    LanguageDetectionError, LanguageDetector, TranslationEngine, TranslationError,
};
use speechbridge::domain::{LanguageCode, SourceLanguage};
use speechbridge::infrastructure::translation::LibreTranslateEngine;

type SeenBodies = Arc<Mutex<Vec<Value>>>;

async fn start_mock_libre_server(
    response_status: u16,
    translate_reply: Value,
    detect_reply: Value,
) -> (String, SeenBodies, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let seen: SeenBodies = Arc::new(Mutex::new(Vec::new()));
    let status = StatusCode::from_u16(response_status).unwrap();

    let app = Router::new()
        .route(
            "/translate",
            post(
                move |State(seen): State<SeenBodies>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    (status, Json(translate_reply)).into_response()
                },
            ),
        )
        .route(
            "/detect",
            post(
                move |State(seen): State<SeenBodies>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    (status, Json(detect_reply)).into_response()
                },
            ),
        )
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, seen, shutdown_tx)
}

fn code(value: &str) -> LanguageCode {
    LanguageCode::normalize(Some(value)).unwrap()
}

#[tokio::test]
async fn given_translation_reply_when_translating_then_returns_translated_text() {
    let (base_url, seen, shutdown_tx) = start_mock_libre_server(
        200,
        json!({"translatedText": "Good morning"}),
        json!([]),
    )
    .await;
    let engine =
        LibreTranslateEngine::new(&base_url, Some("secret".to_string()), Duration::from_secs(5))
            .unwrap();

    let translated = engine
        .translate("Buenos días", &SourceLanguage::Explicit(code("es")), &code("en"))
        .await
        .unwrap();

    assert_eq!(translated, "Good morning");
    let bodies = seen.lock().unwrap().clone();
    assert_eq!(
        bodies[0],
        json!({
            "q": "Buenos días",
            "source": "es",
            "target": "en",
            "format": "text",
            "api_key": "secret"
        })
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_automatic_source_without_key_when_translating_then_sends_auto_and_no_key() {
    let (base_url, seen, shutdown_tx) =
        start_mock_libre_server(200, json!({"translatedText": "Hello"}), json!([])).await;
    let engine = LibreTranslateEngine::new(&base_url, None, Duration::from_secs(5)).unwrap();

    engine
        .translate("Hallo", &SourceLanguage::Automatic, &code("en"))
        .await
        .unwrap();

    let bodies = seen.lock().unwrap().clone();
    assert_eq!(bodies[0]["source"], "auto");
    assert!(bodies[0].get("api_key").is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_translating_then_returns_rate_limited() {
    let (base_url, _seen, shutdown_tx) =
        start_mock_libre_server(429, json!({"error": "Slowdown"}), json!([])).await;
    let engine = LibreTranslateEngine::new(&base_url, None, Duration::from_secs(5)).unwrap();

    let result = engine
        .translate("Hallo", &SourceLanguage::Automatic, &code("en"))
        .await;

    assert!(matches!(result, Err(TranslationError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_several_candidates_when_detecting_then_picks_highest_confidence() {
    let (base_url, _seen, shutdown_tx) = start_mock_libre_server(
        200,
        json!({}),
        json!([
            {"language": "pt", "confidence": 41.0},
            {"language": "es", "confidence": 88.5},
            {"language": "gl", "confidence": 12.0}
        ]),
    )
    .await;
    let engine = LibreTranslateEngine::new(&base_url, None, Duration::from_secs(5)).unwrap();

    let detected = engine.detect("¿Dónde está la biblioteca?").await.unwrap();

    assert_eq!(detected, "es");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_candidates_when_detecting_then_undetermined() {
    let (base_url, _seen, shutdown_tx) =
        start_mock_libre_server(200, json!({}), json!([])).await;
    let engine = LibreTranslateEngine::new(&base_url, None, Duration::from_secs(5)).unwrap();

    let result = engine.detect("???").await;

    assert!(matches!(result, Err(LanguageDetectionError::Undetermined)));
    shutdown_tx.send(()).ok();
}
