//! Startup task adapter.
//!
//! The browser build has nothing to check at startup; it just holds the
//! loading screen for a configurable moment before the greeting appears.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use medhelp_core::ports::StartupPort;
use medhelp_types::{Result, config::BootstrapConfig};

pub struct TimerStartup {
    delay_ms: u32,
}

impl TimerStartup {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            delay_ms: config.delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

#[async_trait(?Send)]
impl StartupPort for TimerStartup {
    async fn start(&self) -> Result<()> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        log::info!("Startup finished after {}ms", self.delay_ms);
        Ok(())
    }
}
