//! YouTube uploader integration tests against a mock API server

use std::sync::{Arc, Mutex};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use obs_uplink::application::ports::{UploadError, VideoUploader};
use obs_uplink::domain::video::{Privacy, VideoMetadata};
use obs_uplink::infrastructure::{YouTubeAuth, YouTubeUploader};

fn test_metadata() -> VideoMetadata {
    VideoMetadata {
        title: "Test recording".to_string(),
        description: String::new(),
        privacy: Privacy::Unlisted,
        category_id: "22".to_string(),
    }
}

fn uploader_for(server: &MockServer, chunk_size: usize) -> YouTubeUploader {
    YouTubeUploader::with_base_url(YouTubeAuth::with_static_token("test-token"), server.uri())
        .with_chunk_size(chunk_size)
}

async fn mount_session_init(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .and(query_param("uploadType", "resumable"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Location", format!("{}/upload/session/1", server.uri()).as_str()),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_chunk_upload_returns_the_video_id() {
    let server = MockServer::start().await;
    mount_session_init(&server).await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .and(header("Content-Range", "bytes 0-7/8"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "vid-abc" })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"12345678").unwrap();

    let receipt = uploader_for(&server, 1024)
        .upload(&file, &test_metadata(), None)
        .await
        .unwrap();

    assert_eq!(receipt.video_id, "vid-abc");
}

#[tokio::test]
async fn multi_chunk_upload_reports_progress() {
    let server = MockServer::start().await;
    mount_session_init(&server).await;

    // First chunk acknowledged with the committed offset, second is final
    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .and(header("Content-Range", "bytes 0-3/8"))
        .respond_with(ResponseTemplate::new(308).insert_header("Range", "bytes=0-3"))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .and(header("Content-Range", "bytes 4-7/8"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "vid-chunked" })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"12345678").unwrap();

    let reported: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reported);

    let receipt = uploader_for(&server, 4)
        .upload(
            &file,
            &test_metadata(),
            Some(Arc::new(move |percent| {
                sink.lock().unwrap().push(percent);
            })),
        )
        .await
        .unwrap();

    assert_eq!(receipt.video_id, "vid-chunked");
    assert_eq!(*reported.lock().unwrap(), vec![50, 100]);
}

#[tokio::test]
async fn api_rejection_is_a_recoverable_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"data").unwrap();

    let err = uploader_for(&server, 1024)
        .upload(&file, &test_metadata(), None)
        .await
        .unwrap_err();

    assert!(err.is_recoverable());
    match err {
        UploadError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "quotaExceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn chunk_rejection_surfaces_the_api_error() {
    let server = MockServer::start().await;
    mount_session_init(&server).await;

    Mock::given(method("PUT"))
        .and(path("/upload/session/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"data").unwrap();

    let err = uploader_for(&server, 1024)
        .upload(&file, &test_metadata(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Api { status: 500, .. }));
}

#[tokio::test]
async fn missing_location_header_fails_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"data").unwrap();

    let err = uploader_for(&server, 1024)
        .upload(&file, &test_metadata(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Request(_)));
}

#[tokio::test]
async fn empty_file_is_rejected_before_a_session_opens() {
    let server = MockServer::start().await;
    // No mocks mounted: any request the uploader made would come back 404

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("clip.mp4");
    std::fs::write(&file, b"").unwrap();

    let err = uploader_for(&server, 1024)
        .upload(&file, &test_metadata(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Io(_)));
    assert!(!err.is_recoverable());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_file_is_not_recoverable() {
    let server = MockServer::start().await;

    let err = uploader_for(&server, 1024)
        .upload(
            std::path::Path::new("/nonexistent/clip.mp4"),
            &test_metadata(),
            None,
        )
        .await
        .unwrap_err();

    assert!(!err.is_recoverable());
    assert!(matches!(err, UploadError::Io(_)));
}
