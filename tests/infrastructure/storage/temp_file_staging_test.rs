use bytes::Bytes;

use speechbridge::application::ports::AudioStaging;
use speechbridge::domain::AudioUpload;
use speechbridge::infrastructure::storage::TempFileStaging;

#[tokio::test]
async fn given_upload_when_staging_then_file_holds_bytes_with_original_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let staging = TempFileStaging::new(Some(dir.path().to_path_buf())).unwrap();
    let upload = AudioUpload::new(
        Some("meeting.ogg".to_string()),
        Bytes::from_static(b"OggS audio"),
    );

    let staged = staging.stage(&upload).await.unwrap();

    assert!(staged.starts_with(dir.path()));
    assert_eq!(staged.extension().and_then(|e| e.to_str()), Some("ogg"));
    let file_name = staged.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("speechbridge-"));
    assert_eq!(std::fs::read(&staged).unwrap(), b"OggS audio");
}

#[tokio::test]
async fn given_staged_path_when_dropped_then_file_is_removed() {
    let staging = TempFileStaging::new(None).unwrap();
    let upload = AudioUpload::new(None, Bytes::from_static(b"RIFF"));

    let staged = staging.stage(&upload).await.unwrap();
    let path = staged.to_path_buf();
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));

    drop(staged);

    assert!(!path.exists());
}

#[test]
fn given_missing_staging_dir_when_creating_then_directory_is_created() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("uploads").join("staging");

    TempFileStaging::new(Some(nested.clone())).unwrap();

    assert!(nested.is_dir());
}
