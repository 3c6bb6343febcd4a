//! WASM-target tests for medhelp-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use medhelp_types::message::*;
use medhelp_types::conversation::*;
use medhelp_types::state::*;
use medhelp_types::config::*;
use medhelp_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::new(MessageId(1), Sender::User, "Hello");
    assert_eq!(msg.sender(), Sender::User);
    assert_eq!(msg.text(), "Hello");
}

#[wasm_bindgen_test]
fn message_timestamp_is_now() {
    let before = chrono::Utc::now();
    let msg = Message::new(MessageId(1), Sender::Assistant, "Hi");
    assert!(msg.timestamp() >= before);
    assert_eq!(msg.display_time().len(), 8);
}

// ─── Conversation Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn conversation_uuid_session_id() {
    let convo = Conversation::new();
    assert_eq!(convo.session_id().len(), 36);
}

#[wasm_bindgen_test]
fn conversation_ids_increase() {
    let mut convo = Conversation::new();
    let a = convo.append(Sender::Assistant, "greeting").id();
    let b = convo.append(Sender::User, "question").id();
    assert!(a < b);
    assert_eq!(convo.messages().len(), 2);
}

// ─── State / Config / Error Tests ────────────────────────

#[wasm_bindgen_test]
fn state_loading_flag() {
    assert!(ChatState::Bootstrapping.is_loading());
    assert!(!ChatState::Ready.is_loading());
}

#[wasm_bindgen_test]
fn config_default_is_valid() {
    assert!(ChatConfig::default().validate().is_ok());
}

#[wasm_bindgen_test]
fn error_status_display() {
    let err = ChatError::Status { status: 503, body: "down".to_string() };
    assert_eq!(err.to_string(), "HTTP 503: down");
}
