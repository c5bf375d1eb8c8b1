//! YouTube API adapters
//!
//! Authentication (installed-app OAuth with a disk token cache) and the
//! resumable chunked upload.

pub mod auth;
pub mod upload;

pub use auth::{AuthError, YouTubeAuth};
pub use upload::YouTubeUploader;
