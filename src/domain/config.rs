//! Watcher configuration
//!
//! Everything here is a compile-time decision: there are no environment
//! variables, config files, or flags. The struct exists so tests can inject
//! variants (short intervals, temp directories) instead of patching globals.

use std::path::PathBuf;
use std::time::Duration;

use super::video::Privacy;

/// Delay between directory scans
const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Consecutive equal size samples required before a file counts as stable
const STABILITY_CHECKS: u32 = 3;
/// Delay between size samples
const STABILITY_INTERVAL: Duration = Duration::from_secs(2);

/// How long to wait for the external remux to produce the MP4 sibling
const REMUX_GRACE: Duration = Duration::from_secs(180);
/// Delay between existence checks for the remuxed sibling
const REMUX_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Pause after an unexpected scan error before resuming
const ERROR_BACKOFF: Duration = Duration::from_secs(10);

const CLIENT_SECRETS_FILE: &str = "client_secrets.json";
const TOKEN_CACHE_FILE: &str = "tokens.json";

const UPLOAD_PRIVACY: Privacy = Privacy::Unlisted;
/// YouTube category 22, "People & Blogs"
const UPLOAD_CATEGORY_ID: &str = "22";
const UPLOAD_DESCRIPTION: &str = "";

/// All tunables of one watch session
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Directory OBS writes recordings into; must exist at startup
    pub watch_dir: PathBuf,
    /// OAuth client secrets (downloaded from the Google console)
    pub client_secrets: PathBuf,
    /// Cached OAuth tokens, written back after consent/refresh
    pub token_cache: PathBuf,
    pub poll_interval: Duration,
    pub stability_checks: u32,
    pub stability_interval: Duration,
    pub remux_grace: Duration,
    pub remux_poll_interval: Duration,
    pub error_backoff: Duration,
    pub privacy: Privacy,
    pub category_id: String,
    pub description: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            watch_dir: default_watch_dir(),
            client_secrets: PathBuf::from(CLIENT_SECRETS_FILE),
            token_cache: PathBuf::from(TOKEN_CACHE_FILE),
            poll_interval: POLL_INTERVAL,
            stability_checks: STABILITY_CHECKS,
            stability_interval: STABILITY_INTERVAL,
            remux_grace: REMUX_GRACE,
            remux_poll_interval: REMUX_POLL_INTERVAL,
            error_backoff: ERROR_BACKOFF,
            privacy: UPLOAD_PRIVACY,
            category_id: UPLOAD_CATEGORY_ID.to_string(),
            description: UPLOAD_DESCRIPTION.to_string(),
        }
    }
}

fn default_watch_dir() -> PathBuf {
    dirs::video_dir()
        .map(|dir| dir.join("OBS"))
        .unwrap_or_else(|| PathBuf::from("recordings"))
}
