//! Conversation controller — the client-side state machine.
//!
//! ```text
//! Bootstrapping ──complete_bootstrap──▶ Ready ──submit──▶ AwaitingReply
//!                                         ▲                    │
//!                                         └──────resolve───────┘
//! ```
//!
//! `submit` and `resolve` are synchronous so the controller can sit in an
//! `Rc<RefCell<_>>` without a borrow living across the network await. The
//! request itself runs between the two via `ReplyTicket::fetch`.

use medhelp_types::{
    Result,
    config::ChatConfig,
    conversation::Conversation,
    event::ChatEvent,
    message::{Message, Sender},
    state::ChatState,
};
use crate::event_bus::EventBus;
use crate::ports::{ReplyPort, StartupPort};

/// The one outstanding reply request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTicket {
    pub turn_id: u64,
    pub prompt: String,
}

impl ReplyTicket {
    /// Issue the request for this ticket. Never touches controller state.
    pub async fn fetch(&self, reply: &dyn ReplyPort) -> Result<String> {
        log::debug!("turn {}: POST {}", self.turn_id, reply.endpoint());
        reply.request_reply(&self.prompt).await
    }
}

pub struct ConversationController {
    config: ChatConfig,
    conversation: Conversation,
    draft: String,
    state: ChatState,
    event_bus: EventBus,
    turn_counter: u64,
    outstanding: Option<u64>,
}

impl ConversationController {
    pub fn new(config: ChatConfig, event_bus: EventBus) -> Self {
        let controller = Self {
            config,
            conversation: Conversation::new(),
            draft: String::new(),
            state: ChatState::Bootstrapping,
            event_bus,
            turn_counter: 0,
            outstanding: None,
        };
        controller.event_bus.emit(ChatEvent::StateChanged {
            state: ChatState::Bootstrapping,
        });
        log::debug!("[{}] session started", controller.session_id());
        controller
    }

    // ─── Bootstrap ───────────────────────────────────────────

    /// Finish the startup sequence: seed the greeting and go `Ready`.
    ///
    /// A failed startup task still completes bootstrap so the session is
    /// usable. Returns `false` if bootstrap already happened.
    pub fn complete_bootstrap(&mut self, outcome: Result<()>) -> bool {
        if self.state != ChatState::Bootstrapping {
            return false;
        }
        if let Err(e) = outcome {
            log::warn!("[{}] startup task failed: {}", self.session_id(), e);
        }
        let greeting = self.config.greeting.clone();
        self.append(Sender::Assistant, greeting);
        self.transition(ChatState::Ready);
        true
    }

    /// Run the startup task and complete bootstrap.
    pub async fn initialize(&mut self, startup: &dyn StartupPort) -> bool {
        let outcome = startup.start().await;
        self.complete_bootstrap(outcome)
    }

    // ─── Submit / resolve ────────────────────────────────────

    /// Take the draft and open a reply request.
    ///
    /// No-op (returns `None`, draft kept) when the draft is blank or the
    /// controller is not `Ready`.
    pub fn submit(&mut self) -> Option<ReplyTicket> {
        if self.state != ChatState::Ready || self.draft.trim().is_empty() {
            return None;
        }

        let prompt = std::mem::take(&mut self.draft);
        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        log::info!(
            "[{}] turn {}: submitting {} chars",
            self.session_id(),
            turn_id,
            prompt.len()
        );

        self.append(Sender::User, prompt.clone());
        self.outstanding = Some(turn_id);
        self.transition(ChatState::AwaitingReply);

        Some(ReplyTicket { turn_id, prompt })
    }

    /// Feed a reply outcome back in. Success and failure share this path.
    ///
    /// Returns `false` for a ticket that is not the outstanding one.
    pub fn resolve(&mut self, ticket: &ReplyTicket, outcome: Result<String>) -> bool {
        if self.outstanding != Some(ticket.turn_id) {
            log::debug!(
                "[{}] ignoring stale reply for turn {}",
                self.session_id(),
                ticket.turn_id
            );
            return false;
        }
        self.outstanding = None;

        let text = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_reply_unavailable() {
                    log::warn!("[{}] turn {}: {}", self.session_id(), ticket.turn_id, e);
                } else {
                    log::error!("[{}] turn {}: {}", self.session_id(), ticket.turn_id, e);
                }
                self.event_bus.emit(ChatEvent::ReplyFailed {
                    reason: e.to_string(),
                });
                self.config.fallback_reply.clone()
            }
        };

        self.append(Sender::Assistant, text);
        self.transition(ChatState::Ready);
        true
    }

    /// Submit the current draft, await the reply, and resolve it.
    ///
    /// Returns `false` when the submit was a no-op.
    pub async fn send(&mut self, reply: &dyn ReplyPort) -> bool {
        let Some(ticket) = self.submit() else {
            return false;
        };
        let outcome = ticket.fetch(reply).await;
        self.resolve(&ticket, outcome)
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.conversation.last()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn session_id(&self) -> &str {
        self.conversation.session_id()
    }

    // ─── Internals ───────────────────────────────────────────

    fn append(&mut self, sender: Sender, text: String) {
        let message = self.conversation.append(sender, text).clone();
        self.event_bus.emit(ChatEvent::MessageAppended { message });
    }

    fn transition(&mut self, next: ChatState) {
        log::debug!(
            "[{}] {:?} -> {:?}",
            self.session_id(),
            self.state,
            next
        );
        self.state = next;
        self.event_bus.emit(ChatEvent::StateChanged { state: next });
    }
}
