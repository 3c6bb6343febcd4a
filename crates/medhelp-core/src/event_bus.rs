//! Queue of `ChatEvent`s from the controller to whoever renders them.
//!
//! Single-threaded (WASM), so the queue sits behind `Rc<RefCell<_>>`. The
//! renderer drains it once per frame. An optional notifier runs on every
//! emit so a renderer that sleeps between frames is woken when a reply
//! lands from an async task.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use medhelp_types::event::ChatEvent;

type Notifier = Rc<dyn Fn()>;

/// Cloned handles share one queue and one notifier.
#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
    notify: Option<Notifier>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
            notify: None,
        }
    }

    /// Bus that calls `notify` after each event is queued.
    ///
    /// `notify` must not emit on or drain this bus.
    pub fn with_notifier(notify: impl Fn() + 'static) -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
            notify: Some(Rc::new(notify)),
        }
    }

    pub fn emit(&self, event: ChatEvent) {
        self.queue.borrow_mut().push_back(event);
        if let Some(notify) = &self.notify {
            notify();
        }
    }

    /// Everything queued since the last drain, oldest first.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
