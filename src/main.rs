//! obs-uplink CLI entry point

use std::process::ExitCode;

use clap::Parser;

use obs_uplink::cli::{app::run, args::Cli};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // No runtime flags beyond --help/--version; everything else is a
    // compile-time constant in domain::config.
    let _cli = Cli::parse();

    run().await
}
