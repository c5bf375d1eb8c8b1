//! File stability detection

use std::io;
use std::path::Path;
use std::time::Duration;

use super::ports::{Clock, FileStore};

/// Waits until a file's size stops changing.
///
/// A file counts as stable once its size has been observed identical and
/// greater than zero across `checks` consecutive samples spaced `interval`
/// apart. A sample of a missing file resets the streak. There is no upper
/// bound: a file that never settles blocks the caller indefinitely.
pub struct StabilityDetector<'a, F, C> {
    fs: &'a F,
    clock: &'a C,
    checks: u32,
    interval: Duration,
}

impl<'a, F, C> StabilityDetector<'a, F, C>
where
    F: FileStore,
    C: Clock,
{
    pub fn new(fs: &'a F, clock: &'a C, checks: u32, interval: Duration) -> Self {
        Self {
            fs,
            clock,
            checks,
            interval,
        }
    }

    pub async fn wait_until_stable(&self, path: &Path) -> io::Result<()> {
        let mut last_size: Option<u64> = None;
        let mut streak = 0u32;

        while streak < self.checks {
            let size = self.fs.file_size(path).await?;

            match size {
                Some(size) if size > 0 && last_size == Some(size) => streak += 1,
                _ => {
                    streak = 0;
                    last_size = size;
                }
            }

            // Fixed sampling cadence: the sleep happens even after the
            // streak completes.
            self.clock.sleep(self.interval).await;
        }

        Ok(())
    }
}
