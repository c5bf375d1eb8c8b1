//! Application layer - Use cases and port interfaces
//!
//! Contains the watcher's core operations and the trait definitions
//! for external system interactions.

pub mod ports;
pub mod remux;
pub mod scan;
pub mod stability;
pub mod watch;

#[cfg(test)]
pub(crate) mod support;

// Re-export use cases
pub use remux::RemuxAwaiter;
pub use scan::DirectoryScanner;
pub use stability::StabilityDetector;
pub use watch::{CandidateOutcome, ScanError, WatchCallbacks, WatchSession};
