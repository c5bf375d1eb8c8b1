//! Shared test doubles for the application layer

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ports::{Clock, FileStore};

/// One scripted size observation for a path
#[derive(Debug, Clone, Copy)]
pub enum SizeSample {
    Missing,
    Present(u64),
}

/// Scripted filesystem. Every observation of a path (size sample or
/// existence check) consumes one scripted sample; the last sample repeats
/// once the script runs out. Unscripted paths are missing.
#[derive(Default)]
pub struct FakeFs {
    listings: Mutex<VecDeque<Vec<String>>>,
    sizes: Mutex<HashMap<PathBuf, VecDeque<SizeSample>>>,
    observed: Mutex<HashMap<PathBuf, usize>>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a directory listing; the last queued listing repeats.
    pub fn push_listing(&self, names: &[&str]) {
        self.listings
            .lock()
            .unwrap()
            .push_back(names.iter().map(|s| s.to_string()).collect());
    }

    pub fn script_sizes(&self, path: impl Into<PathBuf>, samples: &[SizeSample]) {
        self.sizes
            .lock()
            .unwrap()
            .insert(path.into(), samples.iter().copied().collect());
    }

    /// How many times the path has been observed
    pub fn observations(&self, path: &Path) -> usize {
        self.observed.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    fn next_sample(&self, path: &Path) -> SizeSample {
        *self
            .observed
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert(0) += 1;

        let mut sizes = self.sizes.lock().unwrap();
        match sizes.get_mut(path) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().copied().unwrap_or(SizeSample::Missing),
            None => SizeSample::Missing,
        }
    }
}

#[async_trait]
impl FileStore for FakeFs {
    async fn list_file_names(&self, _dir: &Path) -> io::Result<Vec<String>> {
        let mut listings = self.listings.lock().unwrap();
        if listings.len() > 1 {
            Ok(listings.pop_front().unwrap())
        } else {
            Ok(listings.front().cloned().unwrap_or_default())
        }
    }

    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        Ok(match self.next_sample(path) {
            SizeSample::Missing => None,
            SizeSample::Present(size) => Some(size),
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        matches!(self.next_sample(path), SizeSample::Present(_))
    }
}

/// Clock that advances virtually on every sleep; nothing actually waits.
pub struct VirtualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Total virtual time slept
    pub fn slept(&self) -> Duration {
        *self.offset.lock().unwrap()
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        *self.offset.lock().unwrap() += duration;
    }
}
