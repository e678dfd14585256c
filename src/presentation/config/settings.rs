use std::fmt;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub detection: DetectionSettings,
    pub uploads: UploadSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{Environment}.toml` (optional)
    /// and `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.api_version", "2024-06-01")?
            .set_default("transcription.request_timeout_secs", 300)?
            .set_default("translation.provider", "google")?
            .set_default("translation.request_timeout_secs", 30)?
            .set_default("detection.provider", "google")?
            .set_default("detection.request_timeout_secs", 30)?
            .set_default("uploads.max_file_size_mb", 25)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Azure deployment name; defaults to the model name.
    pub deployment: Option<String>,
    pub api_version: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

impl fmt::Display for TranscriptionProviderSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => f.write_str("openai"),
            Self::Azure => f.write_str("azure"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub provider: TranslationProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSettings {
    pub provider: TranslationProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderSetting {
    Google,
    Libre,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
    pub staging_dir: Option<String>,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
