//! YouTube resumable upload adapter

use std::io::{self, SeekFrom};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::application::ports::{ProgressCallback, UploadError, UploadReceipt, VideoUploader};
use crate::domain::recording::ContainerFormat;
use crate::domain::video::{Privacy, VideoMetadata};

use super::auth::YouTubeAuth;

/// Google API host
const API_BASE_URL: &str = "https://www.googleapis.com";

/// Upload chunk size. The resumable protocol wants a multiple of 256 KiB.
const DEFAULT_CHUNK_SIZE: usize = 8 * 1024 * 1024;

// Request types for the videos.insert call

#[derive(Debug, Serialize)]
struct VideoResource {
    snippet: Snippet,
    status: Status,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    description: String,
    category_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Status {
    privacy_status: Privacy,
    self_declared_made_for_kids: bool,
}

// Response types

#[derive(Debug, Deserialize)]
struct VideoInsertResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Resumable uploader for the videos.insert endpoint.
///
/// Opens an upload session, then PUTs the file chunk by chunk with
/// `Content-Range` headers. HTTP 308 acknowledges a chunk and carries the
/// committed offset; the final chunk returns the video resource.
pub struct YouTubeUploader {
    auth: YouTubeAuth,
    client: reqwest::Client,
    base_url: String,
    chunk_size: usize,
}

impl YouTubeUploader {
    /// Create a new uploader against the production API
    pub fn new(auth: YouTubeAuth) -> Self {
        Self::with_base_url(auth, API_BASE_URL)
    }

    /// Create a new uploader against a custom API host
    pub fn with_base_url(auth: YouTubeAuth, base_url: impl Into<String>) -> Self {
        Self {
            auth,
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the chunk size (tests use tiny chunks)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    fn insert_url(&self) -> String {
        format!(
            "{}/upload/youtube/v3/videos?uploadType=resumable&part=snippet,status",
            self.base_url
        )
    }

    fn build_resource(metadata: &VideoMetadata) -> VideoResource {
        VideoResource {
            snippet: Snippet {
                title: metadata.title.clone(),
                description: metadata.description.clone(),
                category_id: metadata.category_id.clone(),
            },
            status: Status {
                privacy_status: metadata.privacy,
                self_declared_made_for_kids: false,
            },
        }
    }

    /// Map a non-success response to an API error, pulling the message out
    /// of the standard error envelope when present.
    async fn api_error(response: reqwest::Response) -> UploadError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(|error| error.message)
            .unwrap_or(body);
        UploadError::Api { status, message }
    }

    /// Open the resumable session; the session URL comes back in `Location`.
    async fn start_session(
        &self,
        token: &str,
        metadata: &VideoMetadata,
        total_size: u64,
        content_type: &str,
    ) -> Result<String, UploadError> {
        let response = self
            .client
            .post(self.insert_url())
            .bearer_auth(token)
            .header("X-Upload-Content-Length", total_size)
            .header("X-Upload-Content-Type", content_type)
            .json(&Self::build_resource(metadata))
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| {
                UploadError::Request("resumable session response had no Location header".to_string())
            })
    }

    /// Committed offset reported by a 308 response, if any.
    /// The header reads `Range: bytes=0-<last committed byte>`.
    fn committed_offset(response: &reqwest::Response) -> Option<u64> {
        let range = response
            .headers()
            .get(reqwest::header::RANGE)?
            .to_str()
            .ok()?;
        let (_, end) = range.strip_prefix("bytes=")?.split_once('-')?;
        end.parse::<u64>().ok().map(|end| end + 1)
    }

    fn report_progress(on_progress: &Option<ProgressCallback>, offset: u64, total: u64) {
        if let Some(cb) = on_progress {
            let percent = ((offset as f64 / total as f64) * 100.0).min(100.0) as u8;
            cb(percent);
        }
    }
}

#[async_trait]
impl VideoUploader for YouTubeUploader {
    async fn upload(
        &self,
        file: &Path,
        metadata: &VideoMetadata,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadReceipt, UploadError> {
        // Token refresh failures are transport-level and retried next scan
        let token = self
            .auth
            .bearer_token()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let total = tokio::fs::metadata(file).await?.len();
        // A file can be truncated between stabilization and upload; don't
        // open a session for it.
        if total == 0 {
            return Err(UploadError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to upload empty file: {}", file.display()),
            )));
        }
        let content_type = ContainerFormat::from_path(file)
            .map(ContainerFormat::mime_type)
            .unwrap_or("application/octet-stream");

        let session_url = self
            .start_session(&token, metadata, total, content_type)
            .await?;

        let mut source = File::open(file).await?;
        let mut offset: u64 = 0;

        while offset < total {
            let len = (total - offset).min(self.chunk_size as u64) as usize;
            let mut chunk = vec![0u8; len];
            source.seek(SeekFrom::Start(offset)).await?;
            source.read_exact(&mut chunk).await?;

            let end = offset + len as u64 - 1;
            let response = self
                .client
                .put(&session_url)
                .bearer_auth(&token)
                .header(
                    reqwest::header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", offset, end, total),
                )
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(chunk)
                .send()
                .await
                .map_err(|e| UploadError::Request(e.to_string()))?;

            let status = response.status();

            if status == reqwest::StatusCode::PERMANENT_REDIRECT {
                // 308: chunk accepted, more expected
                offset = Self::committed_offset(&response).unwrap_or(end + 1);
                Self::report_progress(&on_progress, offset, total);
                continue;
            }

            if status.is_success() {
                let parsed: VideoInsertResponse = response
                    .json()
                    .await
                    .map_err(|e| UploadError::Request(format!("Failed to parse upload response: {e}")))?;
                Self::report_progress(&on_progress, total, total);
                return Ok(UploadReceipt {
                    video_id: parsed.id,
                });
            }

            return Err(Self::api_error(response).await);
        }

        Err(UploadError::Request(
            "upload session ended without a final response".to_string(),
        ))
    }
}
