use async_trait::async_trait;
use tempfile::TempPath;

use crate::domain::AudioUpload;

/// Writes an upload somewhere a transcription engine can read it by path.
///
/// The returned [`TempPath`] removes the staged file when dropped.
#[async_trait]
pub trait AudioStaging: Send + Sync {
    async fn stage(&self, upload: &AudioUpload) -> Result<TempPath, StagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("staging task failed: {0}")]
    TaskFailed(String),
}
