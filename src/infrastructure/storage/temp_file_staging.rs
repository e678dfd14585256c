use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::TempPath;

use crate::application::ports::{AudioStaging, StagingError};
use crate::domain::AudioUpload;

const STAGED_FILE_PREFIX: &str = "speechbridge-";

/// Stages uploads as named temporary files, deleted when the path is dropped.
pub struct TempFileStaging {
    dir: Option<PathBuf>,
}

impl TempFileStaging {
    pub fn new(dir: Option<PathBuf>) -> Result<Self, StagingError> {
        if let Some(dir) = &dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self { dir })
    }
}

#[async_trait]
impl AudioStaging for TempFileStaging {
    async fn stage(&self, upload: &AudioUpload) -> Result<TempPath, StagingError> {
        let suffix = upload.suffix();
        let data = upload.data.clone();
        let dir = self.dir.clone();

        let path = tokio::task::spawn_blocking(move || -> Result<TempPath, StagingError> {
            let mut builder = tempfile::Builder::new();
            builder.prefix(STAGED_FILE_PREFIX).suffix(&suffix);

            let mut file = match &dir {
                Some(dir) => builder.tempfile_in(dir)?,
                None => builder.tempfile()?,
            };
            file.write_all(&data)?;
            file.flush()?;

            Ok(file.into_temp_path())
        })
        .await
        .map_err(|e| StagingError::TaskFailed(e.to_string()))??;

        tracing::debug!(path = %path.display(), bytes = upload.size_bytes(), "Upload staged");

        Ok(path)
    }
}
