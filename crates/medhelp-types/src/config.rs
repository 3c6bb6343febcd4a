use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub reply: ReplyServiceConfig,
    pub bootstrap: BootstrapConfig,
    /// Assistant message seeded once bootstrap completes
    pub greeting: String,
    /// Assistant message shown whenever a reply cannot be obtained
    pub fallback_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply: ReplyServiceConfig::default(),
            bootstrap: BootstrapConfig::default(),
            greeting: DEFAULT_GREETING.to_string(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> Result<()> {
        self.reply.validate()?;
        if self.greeting.trim().is_empty() {
            return Err(ChatError::Config("greeting must not be empty".to_string()));
        }
        if self.fallback_reply.trim().is_empty() {
            return Err(ChatError::Config(
                "fallback_reply must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyServiceConfig {
    /// Full URL the prompt is POSTed to
    pub endpoint: String,
}

impl Default for ReplyServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ReplyServiceConfig {
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ChatError::Config("reply endpoint is empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "reply endpoint must be http(s): {}",
                endpoint
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Startup delay before the greeting appears. 0 = immediate.
    pub delay_ms: u32,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/get";

pub const DEFAULT_GREETING: &str =
    "Hello! I'm MedHelp, your medical assistant. How can I help you today?";

pub const DEFAULT_FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting. Please try again later.";
