//! Directory scanning and diffing

use std::io;
use std::path::Path;

use crate::domain::recording::ContainerFormat;
use crate::domain::seen::SeenSet;

use super::ports::FileStore;

/// Lists recognized recordings and diffs them against the seen set.
pub struct DirectoryScanner<'a, F> {
    fs: &'a F,
}

impl<'a, F: FileStore> DirectoryScanner<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Names of recognized recordings currently in `dir`, used both for the
    /// startup seed and for each scan.
    pub async fn recognized_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .fs
            .list_file_names(dir)
            .await?
            .into_iter()
            .filter(|name| ContainerFormat::from_name(name).is_some())
            .collect())
    }

    /// Newly appeared recordings, lexicographically ordered so the operator
    /// gets a predictable prompt sequence when several land in one scan.
    pub async fn new_names(&self, dir: &Path, seen: &SeenSet) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = self
            .recognized_names(dir)
            .await?
            .into_iter()
            .filter(|name| !seen.contains(name))
            .collect();
        names.sort();
        Ok(names)
    }
}
