//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clock;
pub mod filesystem;
pub mod prompter;
pub mod uploader;

// Re-export common types
pub use clock::Clock;
pub use filesystem::FileStore;
pub use prompter::TitlePrompter;
pub use uploader::{ProgressCallback, UploadError, UploadReceipt, VideoUploader};
