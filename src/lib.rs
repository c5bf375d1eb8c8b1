//! obs-uplink - auto-upload new OBS recordings to YouTube
//!
//! This crate watches the OBS output folder for newly finished recordings,
//! waits for each file to stop growing (and, for MKV recordings, for an
//! external remux step to produce the MP4 sibling), then uploads the result
//! to YouTube with an operator-supplied title.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects and pure logic (container formats, the seen
//!   set, upload metadata, configuration constants)
//! - **Application**: Use cases and port interfaces (traits) - the stability
//!   detector, remux awaiter, directory scanner, and watch session
//! - **Infrastructure**: Adapter implementations (tokio filesystem/clock,
//!   stdin prompt, YouTube OAuth and resumable upload)
//! - **CLI**: Console output, signal handling, and the main watch loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
