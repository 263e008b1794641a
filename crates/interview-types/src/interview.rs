use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{new_id, INTERVIEW_PREFIX};

/// An interview definition: who is being interviewed and what to ask.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub candidate_name: String,
    /// Insertion order is the order questions are asked in
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    pub fn new(candidate_name: impl Into<String>, questions: Vec<String>) -> Self {
        Self {
            id: new_id(INTERVIEW_PREFIX),
            candidate_name: candidate_name.into(),
            questions,
            created_at: Utc::now(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub candidate_name: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInterviewsResponse {
    pub interviews: Vec<Interview>,
    /// Number of interviews matching the query, before pagination
    pub total: usize,
}
