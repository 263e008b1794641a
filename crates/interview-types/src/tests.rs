#[cfg(test)]
mod tests {
    use crate::Result;
    use crate::chat::*;
    use crate::config::*;
    use crate::error::*;
    use crate::evaluation::*;
    use crate::event::*;
    use crate::id::*;
    use crate::interview::*;
    use crate::query::*;

    // ─── Id Tests ────────────────────────────────────────────

    #[test]
    fn test_new_id_has_prefix() {
        let id = new_id(SESSION_PREFIX);
        assert!(id.starts_with("chat_"));
        assert!(id.len() > SESSION_PREFIX.len());
    }

    #[test]
    fn test_new_id_unique() {
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| new_id(EVALUATION_PREFIX)).collect();
        assert_eq!(ids.len(), 1000);
    }

    // ─── Chat Tests ──────────────────────────────────────────

    #[test]
    fn test_chat_session_new() {
        let session = ChatSession::new("intv-1", "Hello!");
        assert_eq!(session.interview_id, "intv-1");
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].author, Author::System);
        assert_eq!(session.messages[0].content, "Hello!");
        assert_eq!(session.status, SessionStatus::Active);
        assert!(session.is_active());
        assert!(session.evaluation_id.is_none());
        assert_eq!(session.user_turns(), 0);
    }

    #[test]
    fn test_chat_session_user_turns() {
        let mut session = ChatSession::new("intv-1", "Hello!");
        session.messages.push(ChatMessage::user("a"));
        session.messages.push(ChatMessage::system("b"));
        session.messages.push(ChatMessage::user("c"));
        assert_eq!(session.user_turns(), 2);
        let texts: Vec<&str> = session.user_messages().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_author_wire_names() {
        assert_eq!(serde_json::to_string(&Author::System).unwrap(), r#""ai""#);
        assert_eq!(serde_json::to_string(&Author::User).unwrap(), r#""user""#);
        let author: Author = serde_json::from_str(r#""ai""#).unwrap();
        assert_eq!(author, Author::System);
    }

    #[test]
    fn test_message_serializes_author_as_type() {
        let msg = ChatMessage::user("I am a backend engineer");
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "user");
        assert_eq!(json["content"], "I am a backend engineer");
        assert!(json["id"].as_str().unwrap().starts_with("msg_"));
    }

    #[test]
    fn test_session_status_serialization() {
        assert_eq!(serde_json::to_string(&SessionStatus::Active).unwrap(), r#""active""#);
        assert_eq!(serde_json::to_string(&SessionStatus::Completed).unwrap(), r#""completed""#);
        assert_eq!(SessionStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_session_without_evaluation_id_deserializes() {
        let json = r#"{
            "id": "chat_1",
            "interview_id": "1",
            "messages": [],
            "status": "active",
            "created_at": "2025-05-30T10:30:00Z"
        }"#;
        let session: ChatSession = serde_json::from_str(json).unwrap();
        assert!(session.evaluation_id.is_none());
    }

    #[test]
    fn test_send_message_response_omits_missing_ai_response() {
        let resp = SendMessageResponse {
            message: ChatMessage::user("hi"),
            ai_response: None,
            session_status: SessionStatus::Active,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("ai_response"));
        assert!(json.contains(r#""session_status":"active""#));
    }

    // ─── Evaluation Tests ────────────────────────────────────

    #[test]
    fn test_answers_from_ordered_labels_by_position() {
        let answers = Answers::from_ordered(["first", "second", "third"]);
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("question_0"), Some("first"));
        assert_eq!(answers.get("question_2"), Some("third"));
    }

    #[test]
    fn test_answers_keys_numeric_order() {
        let answers = Answers::from_ordered((0..12).map(|i| format!("a{}", i)));
        let keys = answers.keys();
        assert_eq!(keys[2], "question_2");
        assert_eq!(keys[10], "question_10");
        assert_eq!(answers.texts()[11], "a11");
    }

    #[test]
    fn test_answers_serialize_as_plain_object() {
        let answers = Answers::from_ordered(["x"]);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"question_0":"x"}"#);
    }

    #[test]
    fn test_evaluation_clamps_score() {
        let eval = Evaluation::new("1", Answers::new(), 1.7, "ok");
        assert_eq!(eval.score, 1.0);
        let eval = Evaluation::new("1", Answers::new(), -0.2, "ok");
        assert_eq!(eval.score, 0.0);
        assert!(eval.id.starts_with("eval_"));
    }

    // ─── Query Tests ─────────────────────────────────────────

    #[test]
    fn test_list_query_default_is_empty() {
        assert!(ListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_list_query_pairs() {
        let query = ListQuery {
            limit: Some(10),
            page: Some(2),
            candidate_name: Some("Li".to_string()),
            sort_by: Some(SortBy::Name),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("limit", "10".to_string()),
                ("page", "2".to_string()),
                ("candidate_name", "Li".to_string()),
                ("sort_by", "name".to_string()),
                ("sort_order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_deserializes_partial() {
        let query: ListQuery = serde_json::from_str(r#"{"sort_by":"date"}"#).unwrap();
        assert_eq!(query.sort_by, Some(SortBy::Date));
        assert!(query.limit.is_none());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert!(config.use_mock_data);
        assert_eq!(config.session.turn_limit, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = AppConfig::from_json(r#"{"use_mock_data": false, "api": {"base_url": "https://api.example.com"}}"#).unwrap();
        assert!(!config.use_mock_data);
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_config_rejects_bad_url_in_api_mode() {
        let result = AppConfig::from_json(r#"{"use_mock_data": false, "api": {"base_url": "localhost"}}"#);
        assert!(matches!(result, Err(InterviewError::Config(_))));
    }

    #[test]
    fn test_config_rejects_zero_turn_limit() {
        let mut config = AppConfig::default();
        config.session.turn_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_malformed_json() {
        let result = AppConfig::from_json("{not json");
        assert!(matches!(result, Err(InterviewError::Config(_))));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let e = InterviewError::not_found("session", "chat_x");
        assert_eq!(e.to_string(), "session not found: chat_x");

        let e = InterviewError::Http { status: 500, message: "boom".to_string() };
        assert_eq!(e.to_string(), "HTTP 500: boom");

        let e = InterviewError::Timeout(10_000);
        assert_eq!(e.to_string(), "Timeout after 10000ms");
    }

    #[test]
    fn test_error_is_client_error() {
        assert!(InterviewError::InvalidInput("x".to_string()).is_client_error());
        assert!(InterviewError::InvalidState("x".to_string()).is_client_error());
        assert!(!InterviewError::Network("x".to_string()).is_client_error());
    }

    #[test]
    fn test_error_from_serde() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{bad}");
        let e: InterviewError = err.unwrap_err().into();
        assert!(matches!(e, InterviewError::Serialization(_)));
    }

    #[test]
    fn test_result_alias() {
        let ok: Result<i32> = Ok(1);
        assert_eq!(ok.unwrap(), 1);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_session_event_serialization() {
        let event = SessionEvent::TurnAccepted {
            session_id: "chat_1".to_string(),
            turn: 3,
            status: SessionStatus::Active,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TurnAccepted"));
        assert!(json.contains(r#""turn":3"#));
    }

    // ─── Interview Tests ─────────────────────────────────────

    #[test]
    fn test_interview_new() {
        let interview = Interview::new("Ming", vec!["Q1".to_string(), "Q2".to_string()]);
        assert!(interview.id.starts_with("intv_"));
        assert_eq!(interview.question_count(), 2);
    }

    #[test]
    fn test_interview_deserializes_from_backend_shape() {
        let json = r#"{
            "id": "1",
            "candidate_name": "Ming",
            "questions": ["Tell me about yourself."],
            "created_at": "2025-05-30T10:30:00Z"
        }"#;
        let interview: Interview = serde_json::from_str(json).unwrap();
        assert_eq!(interview.questions.len(), 1);
        assert_eq!(interview.created_at.to_rfc3339(), "2025-05-30T10:30:00+00:00");
    }
}
