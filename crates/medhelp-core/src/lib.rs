//! MedHelp core — the conversation state machine and the ports it talks through.

pub mod controller;
pub mod event_bus;
pub mod ports;


pub use controller::{ConversationController, ReplyTicket};
