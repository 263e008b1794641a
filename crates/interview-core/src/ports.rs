//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `interview-core` (pure Rust).
//! Implementations live in `interview-platform` (browser adapters) and in
//! [`crate::mock`]. The core never imports platform code.

use async_trait::async_trait;
use interview_types::{
    Result,
    chat::{ChatSession, SendMessageRequest, SendMessageResponse},
    evaluation::{Evaluation, SubmitEvaluationRequest},
    interview::{CreateInterviewRequest, Interview, ListInterviewsResponse},
    query::ListQuery,
};

// ─── Interview API Port ──────────────────────────────────────

/// Everything the front end can ask of a backend, mock or real.
#[async_trait(?Send)]
pub trait InterviewApi {
    async fn create_interview(&self, req: CreateInterviewRequest) -> Result<Interview>;

    /// List interviews with optional filtering, sorting and pagination
    async fn list_interviews(&self, query: ListQuery) -> Result<ListInterviewsResponse>;

    async fn get_interview(&self, id: &str) -> Result<Interview>;

    /// Score a full set of answers given outside a chat session
    async fn submit_evaluation(&self, req: SubmitEvaluationRequest) -> Result<Evaluation>;

    async fn get_evaluation(&self, id: &str) -> Result<Evaluation>;

    /// Open a chat interview for an existing interview definition
    async fn start_chat_session(&self, interview_id: &str) -> Result<ChatSession>;

    /// Submit one user turn and receive the interviewer's reply
    async fn send_message(
        &self,
        session_id: &str,
        req: SendMessageRequest,
    ) -> Result<SendMessageResponse>;

    async fn get_chat_session(&self, session_id: &str) -> Result<ChatSession>;

    /// Terminate the session and obtain its evaluation
    async fn end_chat_session(&self, session_id: &str) -> Result<Evaluation>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Storage Port ────────────────────────────────────────────

/// Key/value storage underneath the session store.
/// There is deliberately no delete: records live as long as the backend.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// List keys with a given prefix
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    fn backend_name(&self) -> &str;
}
