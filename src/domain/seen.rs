//! Seen set of already-handled recording names

use std::collections::HashSet;
use std::path::Path;

use super::recording::{sibling_with_format, ContainerFormat};

/// File names considered already handled.
///
/// Seeded from the watch directory's contents at startup and grown on every
/// successful upload; it never shrinks during a run and is not persisted.
#[derive(Debug, Default)]
pub struct SeenSet {
    names: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Mark a handled candidate under all of its aliases: the detected name,
    /// the name actually uploaded, and both same-stem extension variants.
    ///
    /// The extension variants are inserted even when no such file exists on
    /// disk, so a remux that lands after the grace window is never offered
    /// as a new recording.
    pub fn mark_handled(&mut self, original: &Path, uploaded: &Path) {
        for path in [original, uploaded] {
            if let Some(name) = file_name(path) {
                self.names.insert(name);
            }
        }

        for format in [ContainerFormat::Mp4, ContainerFormat::Mkv] {
            if let Some(name) = file_name(&sibling_with_format(original, format)) {
                self.names.insert(name);
            }
        }
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn starts_empty() {
        let seen = SeenSet::new();
        assert!(seen.is_empty());
        assert!(!seen.contains("a.mp4"));
    }

    #[test]
    fn insert_and_contains() {
        let mut seen = SeenSet::new();
        seen.insert("a.mp4");
        assert!(seen.contains("a.mp4"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn mark_handled_adds_all_aliases() {
        let mut seen = SeenSet::new();
        let original = PathBuf::from("/rec/recording.mkv");
        let uploaded = PathBuf::from("/rec/recording.mp4");

        seen.mark_handled(&original, &uploaded);

        assert!(seen.contains("recording.mkv"));
        assert!(seen.contains("recording.mp4"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn mark_handled_adds_hypothetical_sibling() {
        // No remux ever appeared: the MKV was uploaded directly, but the
        // MP4 alias is still recorded.
        let mut seen = SeenSet::new();
        let original = PathBuf::from("/rec/recording.mkv");

        seen.mark_handled(&original, &original);

        assert!(seen.contains("recording.mkv"));
        assert!(seen.contains("recording.mp4"));
    }
}
