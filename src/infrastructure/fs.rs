//! Tokio filesystem adapter

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::FileStore;

/// Filesystem adapter backed by `tokio::fs`
pub struct TokioFileStore;

#[async_trait]
impl FileStore for TokioFileStore {
    async fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                // Skip names that are not valid UTF-8
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }

    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::metadata(path).await {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}
