//! Recording file value objects

use std::path::{Path, PathBuf};

/// Container formats the watcher recognizes.
///
/// OBS writes MKV while recording is in progress and (when configured)
/// remuxes to MP4 afterwards; both forms may show up in the output folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    Mp4,
    Mkv,
}

impl ContainerFormat {
    /// Parse a file name's extension, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Mp4),
            "mkv" => Some(Self::Mkv),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_name)
    }

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Mkv => "mkv",
        }
    }

    /// MIME type sent as the upload content type
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::Mkv => "video/x-matroska",
        }
    }

    /// Whether an external remux step is expected to produce a sibling
    /// worth waiting for before uploading.
    pub fn needs_remux(self) -> bool {
        matches!(self, Self::Mkv)
    }
}

/// Same-stem sibling path with the given container's extension
pub fn sibling_with_format(path: &Path, format: ContainerFormat) -> PathBuf {
    path.with_extension(format.extension())
}
