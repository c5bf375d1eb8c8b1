//! Watch-and-upload orchestration

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::config::WatcherConfig;
use crate::domain::recording::ContainerFormat;
use crate::domain::seen::SeenSet;
use crate::domain::video::VideoMetadata;

use super::ports::{
    Clock, FileStore, ProgressCallback, TitlePrompter, UploadError, VideoUploader,
};
use super::remux::RemuxAwaiter;
use super::scan::DirectoryScanner;
use super::stability::StabilityDetector;

/// Errors that abort a single scan iteration.
///
/// None of these terminate the watch loop; the caller logs them and backs
/// off before the next scan. Recoverable upload failures never surface
/// here - they only leave the candidate unseen.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read watch directory: {0}")]
    ListDir(#[source] io::Error),

    #[error("Failed to sample file: {0}")]
    Sample(#[source] io::Error),

    #[error("Title prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),
}

/// Outcome of handling one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Uploaded and marked seen under all of its aliases
    Uploaded { video_id: String },
    /// Recoverable upload failure; the name stays unseen and the whole
    /// flow (stabilize, remux wait, title prompt) repeats next scan
    RetryLater,
}

/// Status callbacks for the watch session
#[derive(Default)]
pub struct WatchCallbacks {
    /// Called when a new candidate is detected
    pub on_detected: Option<Box<dyn Fn(&Path) + Send + Sync>>,
    /// Called before waiting for the file to finish writing
    pub on_stabilizing: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when an MKV starts its remux grace wait, with the grace seconds
    pub on_awaiting_remux: Option<Box<dyn Fn(u64) + Send + Sync>>,
    /// Called when the remuxed sibling was found
    pub on_remux_found: Option<Box<dyn Fn(&Path) + Send + Sync>>,
    /// Called when the grace window elapsed without a sibling
    pub on_remux_missing: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the upload starts, with (path, title)
    pub on_upload_start: Option<Box<dyn Fn(&Path, &str) + Send + Sync>>,
    /// Called with percent-complete updates during the upload
    pub on_upload_progress: Option<ProgressCallback>,
    /// Called with the assigned video id after a successful upload
    pub on_uploaded: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when a recoverable upload failure leaves the file unseen
    pub on_upload_failed: Option<Box<dyn Fn(&UploadError) + Send + Sync>>,
}

/// One watch session: the seen set plus every injected collaborator.
pub struct WatchSession<F, C, U, P>
where
    F: FileStore,
    C: Clock,
    U: VideoUploader,
    P: TitlePrompter,
{
    config: WatcherConfig,
    fs: F,
    clock: C,
    uploader: U,
    prompter: P,
    callbacks: WatchCallbacks,
    seen: SeenSet,
}

impl<F, C, U, P> WatchSession<F, C, U, P>
where
    F: FileStore,
    C: Clock,
    U: VideoUploader,
    P: TitlePrompter,
{
    pub fn new(
        config: WatcherConfig,
        fs: F,
        clock: C,
        uploader: U,
        prompter: P,
        callbacks: WatchCallbacks,
    ) -> Self {
        Self {
            config,
            fs,
            clock,
            uploader,
            prompter,
            callbacks,
            seen: SeenSet::new(),
        }
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    /// Seed the seen set from the directory's current contents so files
    /// that predate the session are never uploaded.
    ///
    /// Returns the number of pre-existing recordings.
    pub async fn seed(&mut self) -> io::Result<usize> {
        let names = DirectoryScanner::new(&self.fs)
            .recognized_names(&self.config.watch_dir)
            .await?;
        for name in names {
            self.seen.insert(name);
        }
        Ok(self.seen.len())
    }

    /// One scan iteration: diff the directory against the seen set and
    /// handle every new candidate in lexicographic order.
    pub async fn scan_once(&mut self) -> Result<(), ScanError> {
        let new_names = DirectoryScanner::new(&self.fs)
            .new_names(&self.config.watch_dir, &self.seen)
            .await
            .map_err(ScanError::ListDir)?;

        for name in new_names {
            // Handling an earlier candidate may have marked this one seen
            // already (a remuxed sibling detected in the same scan).
            if self.seen.contains(&name) {
                continue;
            }

            let path = self.config.watch_dir.join(&name);
            self.handle_candidate(&path).await?;
        }

        Ok(())
    }

    /// Drive one candidate through the full flow:
    /// stabilize -> (mkv) await remux -> prompt title -> upload.
    pub async fn handle_candidate(&mut self, path: &Path) -> Result<CandidateOutcome, ScanError> {
        if let Some(cb) = &self.callbacks.on_detected {
            cb(path);
        }

        if let Some(cb) = &self.callbacks.on_stabilizing {
            cb();
        }
        self.stability()
            .wait_until_stable(path)
            .await
            .map_err(ScanError::Sample)?;

        let upload_path = self.resolve_upload_path(path).await?;

        let title = self
            .prompter
            .prompt_title()
            .await
            .map_err(ScanError::Prompt)?;

        if let Some(cb) = &self.callbacks.on_upload_start {
            cb(&upload_path, &title);
        }

        let metadata = VideoMetadata {
            title,
            description: self.config.description.clone(),
            privacy: self.config.privacy,
            category_id: self.config.category_id.clone(),
        };

        let progress = self.callbacks.on_upload_progress.clone();
        match self.uploader.upload(&upload_path, &metadata, progress).await {
            Ok(receipt) => {
                if let Some(cb) = &self.callbacks.on_uploaded {
                    cb(&receipt.video_id);
                }
                self.seen.mark_handled(path, &upload_path);
                Ok(CandidateOutcome::Uploaded {
                    video_id: receipt.video_id,
                })
            }
            Err(e) if e.is_recoverable() => {
                if let Some(cb) = &self.callbacks.on_upload_failed {
                    cb(&e);
                }
                Ok(CandidateOutcome::RetryLater)
            }
            Err(e) => Err(ScanError::Upload(e)),
        }
    }

    /// For MKV candidates, prefer the remuxed sibling when it shows up
    /// within the grace window; otherwise upload the original.
    async fn resolve_upload_path(&self, path: &Path) -> Result<PathBuf, ScanError> {
        let needs_remux = ContainerFormat::from_path(path)
            .is_some_and(ContainerFormat::needs_remux);
        if !needs_remux {
            return Ok(path.to_path_buf());
        }

        if let Some(cb) = &self.callbacks.on_awaiting_remux {
            cb(self.config.remux_grace.as_secs());
        }

        let awaiter = RemuxAwaiter::new(
            &self.fs,
            &self.clock,
            self.config.remux_grace,
            self.config.remux_poll_interval,
            self.config.stability_checks,
            self.config.stability_interval,
        );

        match awaiter.await_remuxed(path).await.map_err(ScanError::Sample)? {
            Some(sibling) => {
                if let Some(cb) = &self.callbacks.on_remux_found {
                    cb(&sibling);
                }
                Ok(sibling)
            }
            None => {
                if let Some(cb) = &self.callbacks.on_remux_missing {
                    cb();
                }
                Ok(path.to_path_buf())
            }
        }
    }

    fn stability(&self) -> StabilityDetector<'_, F, C> {
        StabilityDetector::new(
            &self.fs,
            &self.clock,
            self.config.stability_checks,
            self.config.stability_interval,
        )
    }
}
