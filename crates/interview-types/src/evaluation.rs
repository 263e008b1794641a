use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{new_id, EVALUATION_PREFIX};

/// Prefix of the answer slot labels: `question_0`, `question_1`, ...
pub const ANSWER_SLOT_PREFIX: &str = "question_";

pub fn answer_slot(index: usize) -> String {
    format!("{}{}", ANSWER_SLOT_PREFIX, index)
}

/// Slot label → answer text, kept in slot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label each answer by its position.
    pub fn from_ordered<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            answers
                .into_iter()
                .enumerate()
                .map(|(i, a)| (answer_slot(i), a.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, slot: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(slot.into(), answer.into());
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_by_key(|k| slot_index(k).unwrap_or(usize::MAX));
        keys
    }

    /// Answers in slot order. Slots that are not `question_{n}` sort last.
    pub fn texts(&self) -> Vec<&str> {
        self.keys()
            .into_iter()
            .filter_map(|k| self.get(k))
            .collect()
    }
}

fn slot_index(slot: &str) -> Option<usize> {
    slot.strip_prefix(ANSWER_SLOT_PREFIX)?.parse().ok()
}

/// Scored result of an interview. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub interview_id: String,
    pub answers: Answers,
    /// Always within `[0, 1]`
    pub score: f64,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn new(
        interview_id: impl Into<String>,
        answers: Answers,
        score: f64,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(EVALUATION_PREFIX),
            interview_id: interview_id.into(),
            answers,
            score: score.clamp(0.0, 1.0),
            feedback: feedback.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEvaluationRequest {
    pub interview_id: String,
    pub answers: Answers,
}
