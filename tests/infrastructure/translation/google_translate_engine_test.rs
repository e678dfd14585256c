use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use speechbridge::application::ports::{
    LanguageDetectionError, LanguageDetector, TranslationEngine, TranslationError,
};
use speechbridge::domain::{LanguageCode, SourceLanguage};
use speechbridge::infrastructure::translation::GoogleTranslateEngine;

type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn start_mock_google_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, SeenQueries, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let seen: SeenQueries = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/translate_a/single",
            get(
                move |State(seen): State<SeenQueries>,
                      Query(query): Query<HashMap<String, String>>| async move {
                    seen.lock().unwrap().push(query);
                    let status = StatusCode::from_u16(response_status).unwrap();
                    (status, response_body).into_response()
                },
            ),
        )
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

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

fn engine(base_url: String) -> GoogleTranslateEngine {
    GoogleTranslateEngine::new(Some(base_url), Duration::from_secs(5)).unwrap()
}

fn code(value: &str) -> LanguageCode {
    LanguageCode::normalize(Some(value)).unwrap()
}

const BONJOUR_PAYLOAD: &str =
    r#"[[["Hello ","Bonjour ",null,null,10],["world","le monde",null,null,10]],null,"fr"]"#;

#[tokio::test]
async fn given_sentence_list_when_translating_then_joins_segments() {
    let (base_url, seen, shutdown_tx) = start_mock_google_server(200, BONJOUR_PAYLOAD).await;

    let translated = engine(base_url)
        .translate("Bonjour le monde", &SourceLanguage::Automatic, &code("en"))
        .await
        .unwrap();

    assert_eq!(translated, "Hello world");

    let queries = seen.lock().unwrap().clone();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query.get("client").map(String::as_str), Some("gtx"));
    assert_eq!(query.get("sl").map(String::as_str), Some("auto"));
    assert_eq!(query.get("tl").map(String::as_str), Some("en"));
    assert_eq!(query.get("dt").map(String::as_str), Some("t"));
    assert_eq!(query.get("q").map(String::as_str), Some("Bonjour le monde"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_chinese_languages_when_translating_then_sends_regional_code() {
    let (base_url, seen, shutdown_tx) =
        start_mock_google_server(200, r#"[[["你好","hello",null,null,10]],null,"en"]"#).await;

    engine(base_url)
        .translate("hello", &SourceLanguage::Explicit(code("en")), &code("zh"))
        .await
        .unwrap();

    let queries = seen.lock().unwrap().clone();
    assert_eq!(queries[0].get("sl").map(String::as_str), Some("en"));
    assert_eq!(queries[0].get("tl").map(String::as_str), Some("zh-CN"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_translating_then_returns_rate_limited() {
    let (base_url, _seen, shutdown_tx) = start_mock_google_server(429, "slow down").await;

    let result = engine(base_url)
        .translate("hola", &SourceLanguage::Automatic, &code("en"))
        .await;

    assert!(matches!(result, Err(TranslationError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unexpected_payload_when_translating_then_returns_invalid_response() {
    let (base_url, _seen, shutdown_tx) = start_mock_google_server(200, r#"{"oops":true}"#).await;

    let result = engine(base_url)
        .translate("hola", &SourceLanguage::Automatic, &code("en"))
        .await;

    assert!(matches!(result, Err(TranslationError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_detected_language_in_payload_when_detecting_then_returns_it() {
    let (base_url, seen, shutdown_tx) = start_mock_google_server(200, BONJOUR_PAYLOAD).await;

    let detected = engine(base_url).detect("Bonjour le monde").await.unwrap();

    assert_eq!(detected, "fr");
    let queries = seen.lock().unwrap().clone();
    assert_eq!(queries[0].get("sl").map(String::as_str), Some("auto"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_payload_without_language_when_detecting_then_undetermined() {
    let (base_url, _seen, shutdown_tx) =
        start_mock_google_server(200, r#"[[["x","x",null,null,1]],null,null]"#).await;

    let result = engine(base_url).detect("x").await;

    assert!(matches!(result, Err(LanguageDetectionError::Undetermined)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_detecting_then_returns_api_error() {
    let (base_url, _seen, shutdown_tx) = start_mock_google_server(503, "unavailable").await;

    let result = engine(base_url).detect("hola").await;

    assert!(matches!(result, Err(LanguageDetectionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
