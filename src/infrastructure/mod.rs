//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the terminal, and the YouTube API.

pub mod clock;
pub mod fs;
pub mod prompt;
pub mod youtube;

// Re-export adapters
pub use clock::TokioClock;
pub use fs::TokioFileStore;
pub use prompt::StdinPrompter;
pub use youtube::{AuthError, YouTubeAuth, YouTubeUploader};
