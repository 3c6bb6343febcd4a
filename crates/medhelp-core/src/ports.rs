//! Port traits — the boundary between the controller and the browser.
//!
//! Implementations live in `medhelp-platform`. The core only depends on
//! these traits, which keeps it testable on the host with mocks.

use async_trait::async_trait;
use medhelp_types::Result;

// ─── Reply Port ──────────────────────────────────────────────

/// The remote service that turns a prompt into a reply.
#[async_trait(?Send)]
pub trait ReplyPort {
    /// Send one prompt and wait for the reply text.
    ///
    /// Transport failures, non-success statuses and malformed bodies all
    /// surface as `Err`.
    async fn request_reply(&self, prompt: &str) -> Result<String>;

    /// Where requests go (for logging/debug)
    fn endpoint(&self) -> &str;
}

// ─── Startup Port ────────────────────────────────────────────

/// One-shot initialization task run before the greeting is shown.
#[async_trait(?Send)]
pub trait StartupPort {
    async fn start(&self) -> Result<()>;
}
