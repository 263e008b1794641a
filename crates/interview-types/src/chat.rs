use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{new_id, MESSAGE_PREFIX, SESSION_PREFIX};

/// Who wrote a chat message. On the wire the interviewer side is `"ai"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    #[serde(rename = "ai")]
    System,
    #[serde(rename = "user")]
    User,
}

/// A single message in an interview conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Author::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            id: new_id(MESSAGE_PREFIX),
            author,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// A chat-style interview in progress or finished.
///
/// `messages` is append-only and always starts with one system message.
/// `status` only ever moves from `Active` to `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub interview_id: String,
    pub messages: Vec<ChatMessage>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    /// Set when the session is ended and its evaluation minted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_id: Option<String>,
}

impl ChatSession {
    pub fn new(interview_id: impl Into<String>, opening: impl Into<String>) -> Self {
        Self {
            id: new_id(SESSION_PREFIX),
            interview_id: interview_id.into(),
            messages: vec![ChatMessage::system(opening)],
            status: SessionStatus::Active,
            created_at: Utc::now(),
            evaluation_id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.author == Author::User)
    }

    pub fn user_turns(&self) -> usize {
        self.user_messages().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub interview_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message: ChatMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<ChatMessage>,
    pub session_status: SessionStatus,
}
