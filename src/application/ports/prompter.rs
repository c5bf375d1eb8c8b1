//! Title prompt port interface

use async_trait::async_trait;
use std::io;

/// Port for the interactive per-file title prompt.
///
/// Blocks the whole watch loop until the operator answers; there is no
/// default and no derivation from the file name.
#[async_trait]
pub trait TitlePrompter: Send + Sync {
    async fn prompt_title(&self) -> io::Result<String>;
}
