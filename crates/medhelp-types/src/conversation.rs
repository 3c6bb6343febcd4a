//! Append-only conversation log.
//!
//! The conversation owns the id counter so identifiers stay unique and
//! strictly increasing no matter who appends. It is session-scoped and
//! never serialized, so the counter can only start at 1.

use crate::message::{Message, MessageId, Sender};

#[derive(Debug, Clone)]
pub struct Conversation {
    session_id: String,
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_session_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message and return a reference to it
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
