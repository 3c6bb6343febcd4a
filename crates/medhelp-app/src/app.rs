//! Main egui application — lays out the panels and drives the controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use egui::{self, CentralPanel, TopBottomPanel};

use medhelp_core::controller::{ConversationController, ReplyTicket};
use medhelp_core::event_bus::EventBus;
use medhelp_core::ports::{ReplyPort, StartupPort};
use medhelp_platform::reply::HttpReplyService;
use medhelp_platform::startup::TimerStartup;
use medhelp_types::{ChatError, config::ChatConfig};
use medhelp_ui::panels::{chat, header, loading};
use medhelp_ui::state::UiState;
use medhelp_ui::theme;

/// The main application state
pub struct MedHelpApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: Rc<RefCell<ConversationController>>,
    reply: Rc<dyn ReplyPort>,
    first_frame: bool,
}

impl MedHelpApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ChatConfig) -> Self {
        let repaint_ctx = cc.egui_ctx.clone();
        let event_bus = EventBus::with_notifier(move || repaint_ctx.request_repaint());

        let reply: Rc<dyn ReplyPort> = match HttpReplyService::new(&config.reply) {
            Ok(service) => {
                log::info!("Reply service: {}", service.endpoint());
                Rc::new(service)
            }
            Err(e) => {
                log::warn!("Reply service unavailable: {}. Using stub.", e);
                Rc::new(UnavailableReply { reason: e })
            }
        };
        let startup = TimerStartup::new(&config.bootstrap);

        let controller = Rc::new(RefCell::new(ConversationController::new(
            config,
            event_bus.clone(),
        )));

        Self::bootstrap(Rc::downgrade(&controller), startup);

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            reply,
            first_frame: true,
        }
    }

    /// Run the startup task, then seed the greeting (async).
    ///
    /// The controller's events wake the UI through the bus notifier.
    fn bootstrap(controller: Weak<RefCell<ConversationController>>, startup: TimerStartup) {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = startup.start().await;
            match controller.upgrade() {
                Some(controller) => {
                    controller.borrow_mut().complete_bootstrap(outcome);
                }
                None => log::debug!("Bootstrap finished after teardown"),
            }
        });
    }

    /// Issue the request for `ticket` and feed the outcome back (async).
    ///
    /// The task only holds a weak handle; a reply that lands after the
    /// app is gone is dropped.
    fn dispatch_reply(&self, ticket: ReplyTicket) {
        let controller = Rc::downgrade(&self.controller);
        let reply = self.reply.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = ticket.fetch(reply.as_ref()).await;
            match controller.upgrade() {
                Some(controller) => {
                    controller.borrow_mut().resolve(&ticket, outcome);
                }
                None => log::debug!("Dropping reply for turn {} after teardown", ticket.turn_id),
            }
        });
    }
}

impl eframe::App for MedHelpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        if self.ui_state.is_bootstrapping() {
            CentralPanel::default().show(ctx, |ui| {
                loading::loading_panel(ui, &self.ui_state);
            });
            return;
        }

        TopBottomPanel::top("header").show(ctx, |ui| {
            header::header(ui);
        });

        TopBottomPanel::bottom("disclaimer").show(ctx, |ui| {
            ui.add_space(4.0);
            header::disclaimer(ui);
            ui.add_space(4.0);
        });

        let mut ticket = None;
        CentralPanel::default().show(ctx, |ui| {
            let mut controller = self.controller.borrow_mut();
            if chat::chat_panel(ui, &self.ui_state, controller.draft_mut()) {
                ticket = controller.submit();
            }
        });

        if let Some(ticket) = ticket {
            self.dispatch_reply(ticket);
        }
    }
}

// ─── Stub reply service for when the endpoint is misconfigured ──

struct UnavailableReply {
    reason: ChatError,
}

#[async_trait::async_trait(?Send)]
impl ReplyPort for UnavailableReply {
    async fn request_reply(&self, _prompt: &str) -> medhelp_types::Result<String> {
        Err(self.reason.clone())
    }

    fn endpoint(&self) -> &str {
        "unavailable"
    }
}
