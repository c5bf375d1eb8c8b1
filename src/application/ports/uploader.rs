//! Video upload port interface

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::video::VideoMetadata;

/// Upload errors
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload request failed: {0}")]
    Request(String),

    #[error("Upload rejected by the API (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to read video file: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Network and API-level failures leave the file unseen and are retried
    /// on the next scan; anything else aborts the scan iteration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Api { .. })
    }
}

/// Terminal response of a finished upload
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// Identifier assigned by the hosting platform
    pub video_id: String,
}

/// Progress callback type. Parameter: percent complete (0-100).
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Port for the authenticated chunked upload
#[async_trait]
pub trait VideoUploader: Send + Sync {
    /// Upload a file with the given metadata.
    ///
    /// # Arguments
    /// * `file` - Path of the video to upload
    /// * `metadata` - Title, description, privacy, and category
    /// * `on_progress` - Optional callback for percent-complete updates
    async fn upload(
        &self,
        file: &Path,
        metadata: &VideoMetadata,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadReceipt, UploadError>;
}
