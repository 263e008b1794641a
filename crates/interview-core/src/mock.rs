//! In-memory mock backend.
//!
//! Serves the whole [`InterviewApi`] locally so the front end runs without a
//! server. Composes the catalog and the session controller over one store.

use std::rc::Rc;

use async_trait::async_trait;
use interview_types::{
    Result,
    chat::{ChatSession, SendMessageRequest, SendMessageResponse},
    config::SessionConfig,
    evaluation::{Evaluation, SubmitEvaluationRequest},
    interview::{CreateInterviewRequest, Interview, ListInterviewsResponse},
    query::ListQuery,
};
use crate::catalog::InterviewCatalog;
use crate::controller::SessionController;
use crate::event_bus::EventBus;
use crate::fixtures::{sample_evaluations, sample_interviews};
use crate::ports::{InterviewApi, StoragePort};
use crate::store::SessionStore;

pub struct MockInterviewApi {
    catalog: InterviewCatalog,
    controller: SessionController,
    event_bus: EventBus,
}

impl MockInterviewApi {
    pub fn new(storage: Rc<dyn StoragePort>, config: &SessionConfig, event_bus: EventBus) -> Self {
        let store = Rc::new(SessionStore::new(storage));
        Self {
            catalog: InterviewCatalog::new(store.clone(), event_bus.clone()),
            controller: SessionController::new(store, event_bus.clone(), config),
            event_bus,
        }
    }

    /// A mock backend preloaded with the sample interviews and evaluations.
    pub async fn with_sample_data(
        storage: Rc<dyn StoragePort>,
        config: &SessionConfig,
        event_bus: EventBus,
    ) -> Result<Self> {
        let api = Self::new(storage, config, event_bus);
        for interview in sample_interviews() {
            api.catalog.import_interview(&interview).await?;
        }
        for evaluation in sample_evaluations() {
            api.catalog.import_evaluation(&evaluation).await?;
        }
        log::info!("Mock backend seeded with sample data");
        Ok(api)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }
}

#[async_trait(?Send)]
impl InterviewApi for MockInterviewApi {
    async fn create_interview(&self, req: CreateInterviewRequest) -> Result<Interview> {
        self.catalog.create_interview(req).await
    }

    async fn list_interviews(&self, query: ListQuery) -> Result<ListInterviewsResponse> {
        self.catalog.list_interviews(&query).await
    }

    async fn get_interview(&self, id: &str) -> Result<Interview> {
        self.catalog.get_interview(id).await
    }

    async fn submit_evaluation(&self, req: SubmitEvaluationRequest) -> Result<Evaluation> {
        self.catalog.submit_evaluation(req).await
    }

    async fn get_evaluation(&self, id: &str) -> Result<Evaluation> {
        self.catalog.get_evaluation(id).await
    }

    async fn start_chat_session(&self, interview_id: &str) -> Result<ChatSession> {
        self.controller.start_session(interview_id).await
    }

    async fn send_message(
        &self,
        session_id: &str,
        req: SendMessageRequest,
    ) -> Result<SendMessageResponse> {
        self.controller
            .submit_turn_for(session_id, &req.interview_id, &req.message)
            .await
    }

    async fn get_chat_session(&self, session_id: &str) -> Result<ChatSession> {
        self.controller.get_session(session_id).await
    }

    async fn end_chat_session(&self, session_id: &str) -> Result<Evaluation> {
        self.controller.end_session(session_id).await
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
