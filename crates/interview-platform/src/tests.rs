#[cfg(test)]
mod tests {
    use crate::http::{race_deadline, status_error, HttpInterviewApi};
    use crate::select::connect;
    use crate::storage::MemoryStorage;
    use interview_core::event_bus::EventBus;
    use interview_core::ports::{InterviewApi, StoragePort};
    use interview_types::config::{ApiConfig, AppConfig};
    use interview_types::query::{ListQuery, SortBy, SortOrder};
    use interview_types::InterviewError;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::Cell;

    fn http_api(base_url: &str) -> HttpInterviewApi {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        HttpInterviewApi::new(&config, EventBus::new())
    }

    // ─── MemoryStorage Tests ─────────────────────────────────

    #[test]
    fn test_memory_storage_set_and_get() {
        let storage = MemoryStorage::new();
        block_on(async {
            assert!(storage.get("k").await.unwrap().is_none());
            storage.set("k", b"v1").await.unwrap();
            storage.set("k", b"v2").await.unwrap();
            assert_eq!(storage.get("k").await.unwrap(), Some(b"v2".to_vec()));
            assert!(storage.exists("k").await.unwrap());
        });
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.backend_name(), "memory");
    }

    #[test]
    fn test_memory_storage_list_keys_sorted_by_prefix() {
        let storage = MemoryStorage::new();
        block_on(async {
            storage.set("session:b", b"2").await.unwrap();
            storage.set("session:a", b"1").await.unwrap();
            storage.set("interview:c", b"3").await.unwrap();
            let keys = storage.list_keys("session:").await.unwrap();
            assert_eq!(keys, vec!["session:a", "session:b"]);
            assert_eq!(storage.list_keys("").await.unwrap().len(), 3);
            assert!(storage.list_keys("evaluation:").await.unwrap().is_empty());
        });
    }

    // ─── HttpInterviewApi URL Tests ──────────────────────────

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = http_api("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url(&["interviews"]), "http://localhost:8080/interviews");
    }

    #[test]
    fn test_url_routes() {
        let api = http_api("http://localhost:8080");
        assert_eq!(
            api.url(&["interviews", "42", "chat", "start"]),
            "http://localhost:8080/interviews/42/chat/start"
        );
        assert_eq!(api.url(&["chat", "chat_1", "end"]), "http://localhost:8080/chat/chat_1/end");
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let api = http_api("http://localhost:8080");
        assert_eq!(api.url(&["evaluation", "a/b c"]), "http://localhost:8080/evaluation/a%2Fb%20c");
    }

    #[test]
    fn test_url_with_query() {
        let api = http_api("https://api.example.com");
        let query = ListQuery {
            limit: Some(5),
            candidate_name: Some("Li Mei".to_string()),
            sort_by: Some(SortBy::Date),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        assert_eq!(
            api.url_with_query(&["interviews"], &query),
            "https://api.example.com/interviews?limit=5&candidate_name=Li%20Mei&sort_by=date&sort_order=desc"
        );
        assert_eq!(
            api.url_with_query(&["interviews"], &ListQuery::default()),
            "https://api.example.com/interviews"
        );
    }

    #[test]
    fn test_http_backend_name() {
        assert_eq!(http_api("http://localhost:8080").backend_name(), "http");
    }

    // ─── Status Mapping Tests ────────────────────────────────

    #[test]
    fn test_status_404_is_not_found() {
        let e = status_error(404, "", "session", "chat_1");
        assert_eq!(e, InterviewError::not_found("session", "chat_1"));
    }

    #[test]
    fn test_status_409_is_invalid_state() {
        let e = status_error(409, r#"{"error":"session completed"}"#, "session", "chat_1");
        assert_eq!(e, InterviewError::InvalidState("session completed".to_string()));
    }

    #[test]
    fn test_status_400_and_422_are_invalid_input() {
        let body = r#"{"error":"validation failed","details":"message is empty"}"#;
        assert_eq!(
            status_error(400, body, "session", "x"),
            InterviewError::InvalidInput("validation failed: message is empty".to_string())
        );
        assert!(matches!(status_error(422, "bad", "session", "x"), InterviewError::InvalidInput(_)));
    }

    #[test]
    fn test_other_status_is_http_error() {
        assert_eq!(
            status_error(503, "  upstream down ", "interview", ""),
            InterviewError::Http { status: 503, message: "upstream down".to_string() }
        );
        assert_eq!(
            status_error(500, "", "interview", ""),
            InterviewError::Http { status: 500, message: "request failed with status 500".to_string() }
        );
    }

    // ─── Timeout Tests ───────────────────────────────────────

    #[test]
    fn test_deadline_aborts_pending_request() {
        let aborted = Cell::new(false);
        let result = block_on(race_deadline(
            future::pending::<interview_types::Result<u8>>(),
            future::ready(()),
            250,
            || aborted.set(true),
        ));
        assert_eq!(result, Err(InterviewError::Timeout(250)));
        assert!(aborted.get());
    }

    #[test]
    fn test_finished_request_is_not_aborted() {
        let aborted = Cell::new(false);
        let result = block_on(race_deadline(
            future::ready(Ok(7u8)),
            future::pending::<()>(),
            250,
            || aborted.set(true),
        ));
        assert_eq!(result, Ok(7));
        assert!(!aborted.get());
    }

    // ─── connect Tests ───────────────────────────────────────

    #[test]
    fn test_connect_mock_backend() {
        let api = block_on(connect(&AppConfig::default(), EventBus::new())).unwrap();
        assert_eq!(api.backend_name(), "mock");
        let interview = block_on(api.get_interview("1")).unwrap();
        assert_eq!(interview.questions.len(), 3);
    }

    #[test]
    fn test_connect_http_backend() {
        let config = AppConfig {
            use_mock_data: false,
            ..Default::default()
        };
        let api = block_on(connect(&config, EventBus::new())).unwrap();
        assert_eq!(api.backend_name(), "http");
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let config = AppConfig {
            use_mock_data: false,
            api: ApiConfig {
                base_url: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = block_on(connect(&config, EventBus::new()));
        assert!(matches!(result, Err(InterviewError::Config(_))));
    }
}
