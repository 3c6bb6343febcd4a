#[cfg(test)]
mod tests {
    use crate::reply::wire::{decode_reply, decode_response, ReplyRequest};
    use crate::reply::HttpReplyService;
    use crate::startup::TimerStartup;
    use medhelp_core::controller::ConversationController;
    use medhelp_core::event_bus::EventBus;
    use medhelp_core::ports::{ReplyPort, StartupPort};
    use medhelp_types::ChatError;
    use medhelp_types::config::{BootstrapConfig, ChatConfig, ReplyServiceConfig, DEFAULT_FALLBACK_REPLY};
    use medhelp_types::message::Sender;
    use medhelp_types::state::ChatState;
    use async_trait::async_trait;
    use futures::executor::block_on;

    const SERVICE_ERROR_BODY: &str =
        r#"{"response":"Sorry, I encountered an error. Please try again.","status":"error"}"#;

    /// Reply port that answers every prompt with a fixed HTTP status and body,
    /// decoded the same way `HttpReplyService` decodes a fetch response.
    struct CannedHttpReply {
        status: u16,
        body: &'static str,
    }

    #[async_trait(?Send)]
    impl ReplyPort for CannedHttpReply {
        async fn request_reply(&self, _prompt: &str) -> medhelp_types::Result<String> {
            let ok = (200..300).contains(&self.status);
            decode_response(self.status, ok, self.body)
        }

        fn endpoint(&self) -> &str {
            "canned://reply"
        }
    }

    fn exchange(reply: &CannedHttpReply) -> ConversationController {
        let mut controller = ConversationController::new(ChatConfig::default(), EventBus::new());
        controller.complete_bootstrap(Ok(()));
        controller.set_draft("hello");
        assert!(block_on(controller.send(reply)));
        controller
    }

    // ─── Wire Format Tests ───────────────────────────────────

    #[test]
    fn test_request_encodes_msg_field() {
        let json = ReplyRequest::new("hello").to_json().unwrap();
        assert_eq!(json, r#"{"msg":"hello"}"#);
    }

    #[test]
    fn test_request_escapes_text() {
        let json = ReplyRequest::new("say \"hi\"\n").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["msg"], "say \"hi\"\n");
    }

    #[test]
    fn test_decode_reply_success() {
        assert_eq!(decode_reply(r#"{"response":"hi there"}"#).unwrap(), "hi there");
    }

    #[test]
    fn test_decode_reply_with_success_status() {
        let body = r#"{"response":"Take rest and fluids.","status":"success"}"#;
        assert_eq!(decode_reply(body).unwrap(), "Take rest and fluids.");
    }

    #[test]
    fn test_decode_reply_ignores_unknown_fields() {
        let body = r#"{"response":"ok","sources":[1,2,3]}"#;
        assert_eq!(decode_reply(body).unwrap(), "ok");
    }

    #[test]
    fn test_decode_reply_missing_field() {
        let err = decode_reply(r#"{"answer":"hi"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Malformed(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_decode_reply_non_string_response() {
        assert!(matches!(
            decode_reply(r#"{"response":42}"#),
            Err(ChatError::Malformed(_))
        ));
        assert!(matches!(
            decode_reply(r#"{"response":null}"#),
            Err(ChatError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_reply_error_status() {
        let body = r#"{"response":"Sorry, I encountered an error. Please try again.","status":"error"}"#;
        assert!(matches!(decode_reply(body), Err(ChatError::Malformed(_))));
    }

    #[test]
    fn test_decode_reply_invalid_json() {
        assert!(matches!(decode_reply("<html>"), Err(ChatError::Malformed(_))));
        assert!(matches!(decode_reply(""), Err(ChatError::Malformed(_))));
        assert!(matches!(decode_reply("[]"), Err(ChatError::Malformed(_))));
    }

    // ─── Status Mapping Tests ────────────────────────────────

    #[test]
    fn test_decode_response_200_success() {
        let text = decode_response(200, true, r#"{"response":"hi there","status":"success"}"#).unwrap();
        assert_eq!(text, "hi there");
    }

    #[test]
    fn test_decode_response_500_with_error_envelope() {
        let err = decode_response(500, false, SERVICE_ERROR_BODY).unwrap_err();
        match err {
            ChatError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, SERVICE_ERROR_BODY);
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_response_500_with_valid_reply_shape_is_still_error() {
        let err = decode_response(500, false, r#"{"response":"looks fine"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Status { status: 500, .. }));
    }

    #[test]
    fn test_decode_response_404_empty_body() {
        let err = decode_response(404, false, "").unwrap_err();
        assert_eq!(err, ChatError::Status { status: 404, body: String::new() });
        assert!(err.is_reply_unavailable());
    }

    #[test]
    fn test_decode_response_2xx_malformed_body() {
        assert!(matches!(
            decode_response(200, true, r#"{"answer":"hi"}"#),
            Err(ChatError::Malformed(_))
        ));
    }

    #[test]
    fn test_http_500_exchange_shows_fallback() {
        let controller = exchange(&CannedHttpReply { status: 500, body: SERVICE_ERROR_BODY });

        let msgs = controller.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].sender(), Sender::User);
        assert_eq!(msgs[1].text(), "hello");
        assert_eq!(msgs[2].sender(), Sender::Assistant);
        assert_eq!(msgs[2].text(), DEFAULT_FALLBACK_REPLY);
        assert_eq!(controller.state(), ChatState::Ready);
    }

    #[test]
    fn test_http_200_exchange_shows_reply() {
        let controller = exchange(&CannedHttpReply {
            status: 200,
            body: r#"{"response":"hi there"}"#,
        });
        assert_eq!(controller.last_message().unwrap().text(), "hi there");
        assert_eq!(controller.state(), ChatState::Ready);
    }

    // ─── Adapter Construction Tests ──────────────────────────

    #[test]
    fn test_http_service_uses_configured_endpoint() {
        let config = ReplyServiceConfig {
            endpoint: " https://medhelp.example/get ".to_string(),
        };
        let service = HttpReplyService::new(&config).unwrap();
        assert_eq!(service.endpoint(), "https://medhelp.example/get");
    }

    #[test]
    fn test_http_service_rejects_bad_endpoint() {
        let config = ReplyServiceConfig { endpoint: String::new() };
        assert!(matches!(
            HttpReplyService::new(&config),
            Err(ChatError::Config(_))
        ));
    }

    #[test]
    fn test_timer_startup_reads_config() {
        let startup = TimerStartup::new(&BootstrapConfig::default());
        assert_eq!(startup.delay_ms(), 1500);
    }

    #[test]
    fn test_timer_startup_zero_delay_is_immediate() {
        let startup = TimerStartup::new(&BootstrapConfig { delay_ms: 0 });
        assert!(block_on(startup.start()).is_ok());
    }
}
