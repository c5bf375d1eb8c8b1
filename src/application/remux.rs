//! Remux sibling awaiting

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::recording::{sibling_with_format, ContainerFormat};

use super::ports::{Clock, FileStore};
use super::stability::StabilityDetector;

/// Waits a bounded grace window for the remuxed MP4 sibling of an MKV
/// recording.
///
/// Returns the sibling path once it exists and has stabilized, or `None`
/// when the deadline elapses first. "Not found" is a policy outcome, not an
/// error: the caller falls back to uploading the MKV.
pub struct RemuxAwaiter<'a, F, C> {
    fs: &'a F,
    clock: &'a C,
    grace: Duration,
    poll_interval: Duration,
    stability_checks: u32,
    stability_interval: Duration,
}

impl<'a, F, C> RemuxAwaiter<'a, F, C>
where
    F: FileStore,
    C: Clock,
{
    pub fn new(
        fs: &'a F,
        clock: &'a C,
        grace: Duration,
        poll_interval: Duration,
        stability_checks: u32,
        stability_interval: Duration,
    ) -> Self {
        Self {
            fs,
            clock,
            grace,
            poll_interval,
            stability_checks,
            stability_interval,
        }
    }

    pub async fn await_remuxed(&self, mkv_path: &Path) -> io::Result<Option<PathBuf>> {
        let sibling = sibling_with_format(mkv_path, ContainerFormat::Mp4);
        let deadline = self.clock.now() + self.grace;

        while self.clock.now() < deadline {
            if self.fs.exists(&sibling).await {
                StabilityDetector::new(
                    self.fs,
                    self.clock,
                    self.stability_checks,
                    self.stability_interval,
                )
                .wait_until_stable(&sibling)
                .await?;
                return Ok(Some(sibling));
            }

            self.clock.sleep(self.poll_interval).await;
        }

        Ok(None)
    }
}
