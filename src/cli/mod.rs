//! CLI layer - Console interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the main watch-loop runner.

pub mod app;
pub mod args;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run, run_with_config, EXIT_ERROR, EXIT_SUCCESS};
pub use args::Cli;
pub use presenter::Presenter;
pub use signals::ShutdownSignal;
