//! UI-level state that drives rendering.
//! This is a read-only projection of the conversation controller,
//! updated each frame by draining the EventBus.

use medhelp_types::event::ChatEvent;
use medhelp_types::message::Message;
use medhelp_types::state::ChatState;

/// State visible to UI panels
pub struct UiState {
    /// Displayed messages, in append order
    pub messages: Vec<Message>,
    /// Mirror of the controller state
    pub chat_state: ChatState,
    /// Status line text
    pub status_text: String,
    /// Reason for the most recent failed reply, for the status tooltip
    pub last_error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            chat_state: ChatState::Bootstrapping,
            status_text: ChatState::Bootstrapping.label().to_string(),
            last_error: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::StateChanged { state } => {
                    self.chat_state = state;
                    self.status_text = state.label().to_string();
                    if state == ChatState::AwaitingReply {
                        self.last_error = None;
                    }
                }
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                ChatEvent::ReplyFailed { reason } => {
                    log::debug!("reply failed: {}", reason);
                    self.last_error = Some(reason);
                }
            }
        }
    }

    /// Loading indicator visible (bootstrap or reply in flight)
    pub fn is_busy(&self) -> bool {
        self.chat_state.is_loading()
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.chat_state == ChatState::Bootstrapping
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
