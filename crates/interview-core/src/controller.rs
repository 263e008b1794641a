//! Session lifecycle controller: the turn-taking protocol.
//!
//! A session opens with one system greeting, then alternates:
//! 1. the user submits one message
//! 2. the controller appends it and replies with the next script prompt
//! 3. once the user has taken `turn_limit` turns the session completes
//!
//! Ending a session forces it to `Completed` and mints its evaluation once;
//! ending it again returns the same evaluation.

use std::rc::Rc;

use interview_types::{
    InterviewError, Result,
    chat::{ChatMessage, ChatSession, SendMessageResponse, SessionStatus},
    config::SessionConfig,
    evaluation::{Answers, Evaluation},
    event::SessionEvent,
};
use crate::event_bus::EventBus;
use crate::script::{prompt_for_turn, OPENING_MESSAGE};
use crate::scoring::{feedback_for, score_answers};
use crate::store::SessionStore;

pub struct SessionController {
    store: Rc<SessionStore>,
    event_bus: EventBus,
    turn_limit: usize,
}

impl SessionController {
    pub fn new(store: Rc<SessionStore>, event_bus: EventBus, config: &SessionConfig) -> Self {
        Self {
            store,
            event_bus,
            turn_limit: config.turn_limit,
        }
    }

    pub fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    /// Open a new session for `interview_id`.
    pub async fn start_session(&self, interview_id: &str) -> Result<ChatSession> {
        if !self.store.interview_exists(interview_id).await? {
            return Err(self.reject(InterviewError::not_found("interview", interview_id)));
        }

        let session = ChatSession::new(interview_id, OPENING_MESSAGE);
        self.store.put_session(&session).await?;

        log::info!("Session {} started for interview {}", session.id, interview_id);
        self.event_bus.emit(SessionEvent::Started {
            session_id: session.id.clone(),
            interview_id: interview_id.to_string(),
        });
        Ok(session)
    }

    /// Accept one user message and append the interviewer's reply.
    pub async fn submit_turn(&self, session_id: &str, text: &str) -> Result<SendMessageResponse> {
        self.submit_turn_for(session_id, "", text).await
    }

    /// Like [`submit_turn`](Self::submit_turn), but a non-empty
    /// `interview_id` must match the session's interview.
    pub async fn submit_turn_for(
        &self,
        session_id: &str,
        interview_id: &str,
        text: &str,
    ) -> Result<SendMessageResponse> {
        self.store.get_session(session_id).await.map_err(|e| self.reject(e))?;
        let lock = self.store.session_lock(session_id);
        let _guard = lock.lock().await;

        let mut session = self.store.get_session(session_id).await?;
        if !interview_id.is_empty() && session.interview_id != interview_id {
            return Err(self.reject(InterviewError::InvalidInput(format!(
                "session {} belongs to interview {}, not {}",
                session_id, session.interview_id, interview_id
            ))));
        }
        if !session.is_active() {
            return Err(self.reject(InterviewError::InvalidState(format!(
                "session {} is already completed",
                session_id
            ))));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(self.reject(InterviewError::InvalidInput(
                "message must not be empty".to_string(),
            )));
        }

        let user_msg = ChatMessage::user(text);
        session.messages.push(user_msg.clone());
        let turn = session.user_turns();

        let reply = ChatMessage::system(prompt_for_turn(turn));
        session.messages.push(reply.clone());

        if turn >= self.turn_limit {
            session.status = SessionStatus::Completed;
        }
        self.store.put_session(&session).await?;

        log::debug!("Session {} turn {} accepted", session_id, turn);
        self.event_bus.emit(SessionEvent::TurnAccepted {
            session_id: session_id.to_string(),
            turn,
            status: session.status,
        });
        if session.status == SessionStatus::Completed {
            log::info!("Session {} completed after {} turns", session_id, turn);
            self.event_bus.emit(SessionEvent::Completed {
                session_id: session_id.to_string(),
                turns: turn,
            });
        }

        Ok(SendMessageResponse {
            message: user_msg,
            ai_response: Some(reply),
            session_status: session.status,
        })
    }

    /// Force the session to completion and return its evaluation.
    pub async fn end_session(&self, session_id: &str) -> Result<Evaluation> {
        self.store.get_session(session_id).await.map_err(|e| self.reject(e))?;
        let lock = self.store.session_lock(session_id);
        let _guard = lock.lock().await;

        let mut session = self.store.get_session(session_id).await?;
        if let Some(ref evaluation_id) = session.evaluation_id {
            log::debug!("Session {} already ended, returning {}", session_id, evaluation_id);
            return self.store.get_evaluation(evaluation_id).await;
        }

        let was_active = session.is_active();
        session.status = SessionStatus::Completed;

        let answers = Answers::from_ordered(session.user_messages().map(|m| m.content.clone()));
        let score = score_answers(&answers.texts(), self.turn_limit);
        let evaluation = Evaluation::new(
            session.interview_id.clone(),
            answers,
            score,
            feedback_for(score),
        );

        // The evaluation is written first so a stored session never points
        // at a missing evaluation.
        self.store.put_evaluation(&evaluation).await?;
        session.evaluation_id = Some(evaluation.id.clone());
        self.store.put_session(&session).await?;

        let turns = session.user_turns();
        log::info!(
            "Session {} ended after {} turns, evaluation {} scored {:.2}",
            session_id,
            turns,
            evaluation.id,
            evaluation.score
        );
        if was_active {
            self.event_bus.emit(SessionEvent::Completed {
                session_id: session_id.to_string(),
                turns,
            });
        }
        self.event_bus.emit(SessionEvent::EvaluationReady {
            session_id: Some(session_id.to_string()),
            evaluation_id: evaluation.id.clone(),
            score: evaluation.score,
        });
        Ok(evaluation)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<ChatSession> {
        self.store.get_session(session_id).await
    }

    fn reject(&self, e: InterviewError) -> InterviewError {
        log::warn!("Session operation rejected: {}", e);
        self.event_bus.emit(SessionEvent::Error {
            message: e.to_string(),
        });
        e
    }
}
