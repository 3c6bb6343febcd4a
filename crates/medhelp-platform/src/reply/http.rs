//! Reply service adapter over browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use medhelp_core::ports::ReplyPort;
use medhelp_types::{ChatError, Result, config::ReplyServiceConfig};

use super::wire::{decode_response, ReplyRequest};

/// POSTs each prompt to a fixed endpoint and reads back `response`.
pub struct HttpReplyService {
    endpoint: String,
}

impl HttpReplyService {
    pub fn new(config: &ReplyServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            endpoint: config.endpoint.trim().to_string(),
        })
    }
}

#[async_trait(?Send)]
impl ReplyPort for HttpReplyService {
    async fn request_reply(&self, prompt: &str) -> Result<String> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&ReplyRequest::new(prompt))
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if ok => return Err(ChatError::Network(e.to_string())),
            Err(_) => "unknown error".to_string(),
        };

        decode_response(status, ok, &body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
