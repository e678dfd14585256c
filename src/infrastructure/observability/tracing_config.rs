use crate::presentation::config::LoggingSettings;

const DEFAULT_DIRECTIVES: &str = "speechbridge=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json
                || std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            level: settings.level.clone(),
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> String {
        format!("{},{}", self.level, DEFAULT_DIRECTIVES)
    }
}
