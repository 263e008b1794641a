//! Session store: typed records on top of StoragePort.
//!
//! Records are JSON-encoded under one key per record:
//!   interview `1`     → "interview:1"
//!   session `chat_x`  → "session:chat_x"
//!   evaluation `e`    → "evaluation:e"
//!
//! Nothing is ever deleted. Callers that read-modify-write a session hold
//! its lock from [`SessionStore::session_lock`] for the whole operation,
//! and only ask for a lock once the session is known to exist.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::lock::Mutex;
use serde::{de::DeserializeOwned, Serialize};

use crate::ports::StoragePort;
use interview_types::{
    InterviewError, Result,
    chat::ChatSession,
    evaluation::Evaluation,
    interview::Interview,
};

const INTERVIEW_PREFIX: &str = "interview:";
const SESSION_PREFIX: &str = "session:";
const EVALUATION_PREFIX: &str = "evaluation:";

pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
    locks: RefCell<HashMap<String, Rc<Mutex<()>>>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self {
            storage,
            locks: RefCell::new(HashMap::new()),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Per-session mutex serializing mutations of one session.
    pub fn session_lock(&self, session_id: &str) -> Rc<Mutex<()>> {
        self.locks
            .borrow_mut()
            .entry(session_id.to_string())
            .or_insert_with(|| Rc::new(Mutex::new(())))
            .clone()
    }

    /// Number of sessions that have had a lock handed out.
    pub fn lock_count(&self) -> usize {
        self.locks.borrow().len()
    }

    // ─── Sessions ────────────────────────────────────────────

    pub async fn put_session(&self, session: &ChatSession) -> Result<()> {
        self.put_record(&key(SESSION_PREFIX, &session.id), session).await
    }

    pub async fn get_session(&self, id: &str) -> Result<ChatSession> {
        self.get_record(&key(SESSION_PREFIX, id))
            .await?
            .ok_or_else(|| InterviewError::not_found("session", id))
    }

    // ─── Evaluations ─────────────────────────────────────────

    pub async fn put_evaluation(&self, evaluation: &Evaluation) -> Result<()> {
        self.put_record(&key(EVALUATION_PREFIX, &evaluation.id), evaluation).await
    }

    pub async fn get_evaluation(&self, id: &str) -> Result<Evaluation> {
        self.get_record(&key(EVALUATION_PREFIX, id))
            .await?
            .ok_or_else(|| InterviewError::not_found("evaluation", id))
    }

    // ─── Interviews ──────────────────────────────────────────

    pub async fn put_interview(&self, interview: &Interview) -> Result<()> {
        self.put_record(&key(INTERVIEW_PREFIX, &interview.id), interview).await
    }

    pub async fn get_interview(&self, id: &str) -> Result<Interview> {
        self.get_record(&key(INTERVIEW_PREFIX, id))
            .await?
            .ok_or_else(|| InterviewError::not_found("interview", id))
    }

    pub async fn interview_exists(&self, id: &str) -> Result<bool> {
        self.storage.exists(&key(INTERVIEW_PREFIX, id)).await
    }

    /// All stored interviews, in no particular order.
    pub async fn list_interviews(&self) -> Result<Vec<Interview>> {
        let keys = self.storage.list_keys(INTERVIEW_PREFIX).await?;
        let mut interviews = Vec::with_capacity(keys.len());
        for k in &keys {
            if let Some(interview) = self.get_record::<Interview>(k).await? {
                interviews.push(interview);
            }
        }
        Ok(interviews)
    }

    // ─── Encoding ────────────────────────────────────────────

    async fn put_record<T: Serialize>(&self, key: &str, record: &T) -> Result<()> {
        let bytes = serde_json::to_vec(record)?;
        self.storage.set(key, &bytes).await
    }

    async fn get_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.storage.get(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

fn key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}
