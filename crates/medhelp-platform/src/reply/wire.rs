//! JSON envelope spoken by the reply service.
//!
//! Request:  `{"msg": "<user text>"}`
//! Response: `{"response": "<assistant text>", "status": "success"}`
//!
//! Failures come back as a non-2xx status, usually still carrying an
//! envelope with `"status": "error"`; that text is never shown as a reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use medhelp_types::{ChatError, Result};

#[derive(Debug, Serialize)]
pub struct ReplyRequest<'a> {
    pub msg: &'a str,
}

impl<'a> ReplyRequest<'a> {
    pub fn new(msg: &'a str) -> Self {
        Self { msg }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Deserialize)]
struct ReplyEnvelope {
    #[serde(default)]
    response: Option<Value>,
    #[serde(default)]
    status: Option<String>,
}

/// Turn a complete HTTP response into reply text or an error.
///
/// `ok` is the transport's 2xx flag; anything else maps to
/// `ChatError::Status` carrying the raw body, whatever it contains.
pub fn decode_response(status: u16, ok: bool, body: &str) -> Result<String> {
    if !ok {
        return Err(ChatError::Status {
            status,
            body: body.to_string(),
        });
    }
    decode_reply(body)
}

/// Extract the reply text from a 2xx response body.
pub fn decode_reply(body: &str) -> Result<String> {
    let envelope: ReplyEnvelope = serde_json::from_str(body)
        .map_err(|e| ChatError::Malformed(format!("invalid JSON: {}", e)))?;

    if envelope.status.as_deref() == Some("error") {
        return Err(ChatError::Malformed(
            "reply service reported status \"error\"".to_string(),
        ));
    }

    match envelope.response {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ChatError::Malformed(format!(
            "`response` is not a string: {}",
            other
        ))),
        None => Err(ChatError::Malformed("missing `response` field".to_string())),
    }
}
