//! Filesystem port interface

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Port for observing the watched directory.
///
/// The watcher only ever reads: directory listings, file sizes, and
/// existence checks. Writes are the recording/remux processes' business.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// List the names of regular files directly inside `dir`.
    async fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Current size of the file, or `None` if it does not exist.
    ///
    /// Errors other than "not found" propagate to the caller.
    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Whether the path currently exists.
    async fn exists(&self, path: &Path) -> bool;
}
