//! CLI argument definitions using Clap

use clap::Parser;

/// obs-uplink - auto-upload new OBS recordings to YouTube
///
/// The watched folder, polling cadence, and upload defaults are
/// compile-time constants; the CLI surface is help and version only.
#[derive(Parser, Debug)]
#[command(name = "obs-uplink")]
#[command(version)]
#[command(about = "Watches the OBS output folder and uploads new recordings to YouTube")]
#[command(long_about = None)]
pub struct Cli {}
