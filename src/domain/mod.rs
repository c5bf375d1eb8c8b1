//! Domain layer - Core business logic
//!
//! Contains value objects and the watcher's compile-time configuration.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod recording;
pub mod seen;
pub mod video;

// Re-export common types
pub use config::WatcherConfig;
pub use recording::{sibling_with_format, ContainerFormat};
pub use seen::SeenSet;
pub use video::{Privacy, VideoMetadata};
