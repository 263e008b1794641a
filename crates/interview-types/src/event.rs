use serde::{Deserialize, Serialize};

use crate::chat::SessionStatus;

/// Events emitted by the session controller.
/// The front end drains these to refresh its views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new session was opened for an interview
    Started { session_id: String, interview_id: String },

    /// A user turn was accepted and answered
    TurnAccepted { session_id: String, turn: usize, status: SessionStatus },

    /// The session reached its terminal state
    Completed { session_id: String, turns: usize },

    /// An evaluation is available
    EvaluationReady { session_id: Option<String>, evaluation_id: String, score: f64 },

    /// An operation was rejected
    Error { message: String },
}
