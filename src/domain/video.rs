//! Upload metadata value objects

use serde::Serialize;

/// YouTube privacy status for uploaded videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Unlisted,
    Private,
}

impl Privacy {
    /// Wire value used by the videos.insert API
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

/// Metadata submitted with one upload.
///
/// Only the title comes from the operator; the rest are the watcher's
/// compile-time constants.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub privacy: Privacy,
    pub category_id: String,
}
