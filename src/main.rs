use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use speechbridge::application::services::SpeechTranslationService;
use speechbridge::infrastructure::audio::TranscriptionEngineFactory;
use speechbridge::infrastructure::observability::{TracingConfig, init_tracing};
use speechbridge::infrastructure::storage::TempFileStaging;
use speechbridge::infrastructure::translation::TranslationEngineFactory;
use speechbridge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("Failed to initialize transcription engine")?;
    let translation_engine = TranslationEngineFactory::create(&settings.translation)
        .context("Failed to initialize translation engine")?;
    let language_detector = TranslationEngineFactory::create_detector(&settings.detection)
        .context("Failed to initialize language detector")?;
    let audio_staging = Arc::new(
        TempFileStaging::new(settings.uploads.staging_dir.as_ref().map(PathBuf::from))
            .context("Failed to prepare upload staging directory")?,
    );

    tracing::info!(
        transcription = %settings.transcription.provider,
        translation = ?settings.translation.provider,
        detection = ?settings.detection.provider,
        "Engines initialized"
    );

    let speech_service = Arc::new(SpeechTranslationService::new(
        transcription_engine,
        translation_engine,
        language_detector,
        audio_staging,
    ));

    let state = AppState {
        speech_service,
        max_upload_bytes: settings.uploads.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
