use serde::{Deserialize, Serialize};
use crate::message::Message;
use crate::state::ChatState;

/// Events emitted by the conversation controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// Controller moved to a new state
    StateChanged { state: ChatState },

    /// A message was appended to the conversation
    MessageAppended { message: Message },

    /// The reply service could not produce a reply; the fallback was shown
    ReplyFailed { reason: String },
}
