mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DetectionSettings, LoggingSettings, ServerSettings, Settings, TranscriptionProviderSetting,
    TranscriptionSettings, TranslationProviderSetting, TranslationSettings, UploadSettings,
};
