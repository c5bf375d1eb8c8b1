//! Main watch-loop runner

use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::Clock;
use crate::application::{WatchCallbacks, WatchSession};
use crate::domain::config::WatcherConfig;
use crate::infrastructure::{
    StdinPrompter, TokioClock, TokioFileStore, YouTubeAuth, YouTubeUploader,
};

use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the watcher with the compiled-in configuration
pub async fn run() -> ExitCode {
    run_with_config(WatcherConfig::default()).await
}

/// Run the watcher with an explicit configuration
pub async fn run_with_config(config: WatcherConfig) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    // Fatal: nothing to watch
    if !config.watch_dir.is_dir() {
        presenter.error(&format!(
            "Watch directory does not exist: {}",
            config.watch_dir.display()
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.info("Authenticating with YouTube...");
    let auth = match YouTubeAuth::authenticate(&config.client_secrets, &config.token_cache).await {
        Ok(auth) => auth,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    presenter.success("Authenticated.");

    let uploader = YouTubeUploader::new(auth);
    let callbacks = build_callbacks(Arc::clone(&presenter));

    let mut session = WatchSession::new(
        config.clone(),
        TokioFileStore,
        TokioClock,
        uploader,
        StdinPrompter::new(),
        callbacks,
    );

    let seeded = match session.seed().await {
        Ok(count) => count,
        Err(e) => {
            presenter.error(&format!("Failed to read watch directory: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!("Watching folder: {}", config.watch_dir.display()));
    presenter.info(&format!("Initial recordings count (.mp4/.mkv): {}", seeded));
    presenter.info("Waiting for new recordings...");

    let shutdown = ShutdownSignal::new();
    shutdown.setup();

    let clock = TokioClock;
    loop {
        if shutdown.is_shutdown() {
            presenter.info("Stopping watcher. Bye!");
            break;
        }

        match session.scan_once().await {
            Ok(()) => clock.sleep(config.poll_interval).await,
            Err(e) => {
                // The loop survives anything short of startup failure;
                // back off a little longer than the scan cadence.
                presenter.error(&format!("Unexpected error: {}", e));
                presenter.warn(&format!(
                    "Retrying in {} seconds...",
                    config.error_backoff.as_secs()
                ));
                clock.sleep(config.error_backoff).await;
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Wire session status callbacks to the presenter
fn build_callbacks(presenter: Arc<Presenter>) -> WatchCallbacks {
    WatchCallbacks {
        on_detected: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |path| p.info(&format!("Detected new file: {}", path.display()))
        })),
        on_stabilizing: Some(Box::new({
            let p = Arc::clone(&presenter);
            move || p.info("Waiting for file to finish writing...")
        })),
        on_awaiting_remux: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |grace_secs| {
                p.info(&format!(
                    "MKV detected. Waiting up to {}s for remuxed MP4...",
                    grace_secs
                ))
            }
        })),
        on_remux_found: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |path| {
                p.info(&format!(
                    "Found remuxed MP4: {} (will upload this instead of MKV)",
                    path.display()
                ))
            }
        })),
        on_remux_missing: Some(Box::new({
            let p = Arc::clone(&presenter);
            move || p.warn("No remuxed MP4 found in grace window; uploading MKV.")
        })),
        on_upload_start: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |path, title| {
                p.info(&format!("Uploading: {}", path.display()));
                p.info(&format!("Title: {}", title));
            }
        })),
        on_upload_progress: Some(Arc::new({
            let p = Arc::clone(&presenter);
            move |percent| p.upload_progress(percent)
        })),
        on_uploaded: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |video_id| {
                p.upload_done();
                p.success(&format!("Upload complete! Video ID: {}", video_id));
            }
        })),
        on_upload_failed: Some(Box::new({
            let p = Arc::clone(&presenter);
            move |error| {
                p.upload_done();
                p.error(&format!("YouTube upload failed: {}", error));
                p.warn("Will NOT mark as seen; will retry next scan.");
            }
        })),
    }
}
