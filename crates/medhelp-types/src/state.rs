use serde::{Deserialize, Serialize};

/// Conversation controller lifecycle.
///
/// `Bootstrapping → Ready → AwaitingReply → Ready → ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatState {
    /// Startup task running, no greeting yet
    Bootstrapping,
    /// Accepting input
    Ready,
    /// One reply request in flight
    AwaitingReply,
}

impl ChatState {
    /// The loading indicator is shown in every state except `Ready`
    pub fn is_loading(&self) -> bool {
        !matches!(self, ChatState::Ready)
    }

    pub fn label(&self) -> &str {
        match self {
            ChatState::Bootstrapping => "Loading MedHelp...",
            ChatState::Ready => "Ready",
            ChatState::AwaitingReply => "Thinking...",
        }
    }
}
