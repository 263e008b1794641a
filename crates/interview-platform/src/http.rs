//! REST backend adapter.
//!
//! Speaks the interview backend's JSON API with browser `fetch()` via
//! gloo-net. Every request races a timer and is aborted when the timer
//! wins; HTTP error statuses are mapped back onto the same error kinds the
//! mock backend produces.

use async_trait::async_trait;
use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use interview_core::event_bus::EventBus;
use interview_core::ports::InterviewApi;
use interview_types::{
    InterviewError, Result,
    chat::{ChatSession, SendMessageRequest, SendMessageResponse},
    config::ApiConfig,
    evaluation::{Evaluation, SubmitEvaluationRequest},
    event::SessionEvent,
    interview::{CreateInterviewRequest, Interview, ListInterviewsResponse},
    query::{ApiErrorBody, ListQuery},
};

/// What a request is about, for `NotFound` errors on 404.
struct Target<'a> {
    kind: &'static str,
    id: &'a str,
}

pub struct HttpInterviewApi {
    base_url: String,
    timeout_ms: u64,
    event_bus: EventBus,
}

impl HttpInterviewApi {
    pub fn new(config: &ApiConfig, event_bus: EventBus) -> Self {
        Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
            event_bus,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    pub fn url_with_query(&self, segments: &[&str], query: &ListQuery) -> String {
        let mut url = self.url(segments);
        let pairs = query.to_pairs();
        if !pairs.is_empty() {
            let encoded: Vec<String> = pairs
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: String, target: Target<'_>) -> Result<T> {
        log::debug!("GET {}", url);
        let abort = abort_controller()?;
        let request = Request::get(&url)
            .header("Accept", "application/json")
            .abort_signal(Some(&abort.signal()))
            .build()
            .map_err(|e| InterviewError::Network(e.to_string()))?;
        self.send(request, &abort, &url, target).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: Option<&B>,
        target: Target<'_>,
    ) -> Result<T> {
        log::debug!("POST {}", url);
        let abort = abort_controller()?;
        let builder = Request::post(&url)
            .header("Accept", "application/json")
            .abort_signal(Some(&abort.signal()));
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| InterviewError::Network(e.to_string()))?;
        self.send(request, &abort, &url, target).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: Request,
        abort: &AbortController,
        url: &str,
        target: Target<'_>,
    ) -> Result<T> {
        let result = self.send_inner(request, abort, target).await;
        if let Err(ref e) = result {
            log::error!("API error on {}: {}", url, e);
            self.event_bus.emit(SessionEvent::Error {
                message: e.to_string(),
            });
        }
        result
    }

    async fn send_inner<T: DeserializeOwned>(
        &self,
        request: Request,
        abort: &AbortController,
        target: Target<'_>,
    ) -> Result<T> {
        let sent = async move {
            request
                .send()
                .await
                .map_err(|e| InterviewError::Network(e.to_string()))
        };
        let timer = TimeoutFuture::new(u32::try_from(self.timeout_ms).unwrap_or(u32::MAX));
        let response = race_deadline(sent, timer, self.timeout_ms, || abort.abort()).await?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body, target.kind, target.id));
        }

        decode(response).await
    }

    fn evaluation_ready(&self, session_id: Option<&str>, evaluation: &Evaluation) {
        self.event_bus.emit(SessionEvent::EvaluationReady {
            session_id: session_id.map(str::to_string),
            evaluation_id: evaluation.id.clone(),
            score: evaluation.score,
        });
    }
}

#[async_trait(?Send)]
impl InterviewApi for HttpInterviewApi {
    async fn create_interview(&self, req: CreateInterviewRequest) -> Result<Interview> {
        let target = Target { kind: "interview", id: "" };
        self.post(self.url(&["interviews"]), Some(&req), target).await
    }

    async fn list_interviews(&self, query: ListQuery) -> Result<ListInterviewsResponse> {
        let url = self.url_with_query(&["interviews"], &query);
        self.get(url, Target { kind: "interview", id: "" }).await
    }

    async fn get_interview(&self, id: &str) -> Result<Interview> {
        self.get(self.url(&["interviews", id]), Target { kind: "interview", id })
            .await
    }

    async fn submit_evaluation(&self, req: SubmitEvaluationRequest) -> Result<Evaluation> {
        let url = self.url(&["evaluation"]);
        let target = Target { kind: "interview", id: &req.interview_id };
        let evaluation: Evaluation = self.post(url, Some(&req), target).await?;
        self.evaluation_ready(None, &evaluation);
        Ok(evaluation)
    }

    async fn get_evaluation(&self, id: &str) -> Result<Evaluation> {
        self.get(self.url(&["evaluation", id]), Target { kind: "evaluation", id })
            .await
    }

    async fn start_chat_session(&self, interview_id: &str) -> Result<ChatSession> {
        let url = self.url(&["interviews", interview_id, "chat", "start"]);
        let target = Target { kind: "interview", id: interview_id };
        self.post::<(), _>(url, None, target).await
    }

    async fn send_message(
        &self,
        session_id: &str,
        req: SendMessageRequest,
    ) -> Result<SendMessageResponse> {
        let url = self.url(&["chat", session_id, "message"]);
        let target = Target { kind: "session", id: session_id };
        self.post(url, Some(&req), target).await
    }

    async fn get_chat_session(&self, session_id: &str) -> Result<ChatSession> {
        let target = Target { kind: "session", id: session_id };
        self.get(self.url(&["chat", session_id]), target).await
    }

    async fn end_chat_session(&self, session_id: &str) -> Result<Evaluation> {
        let url = self.url(&["chat", session_id, "end"]);
        let target = Target { kind: "session", id: session_id };
        let evaluation: Evaluation = self.post::<(), _>(url, None, target).await?;
        self.evaluation_ready(Some(session_id), &evaluation);
        Ok(evaluation)
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

/// Map a non-2xx response onto an error kind.
pub fn status_error(status: u16, body: &str, kind: &'static str, id: &str) -> InterviewError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error, details: Some(details) }) => format!("{}: {}", error, details),
        Ok(ApiErrorBody { error, details: None }) => error,
        Err(_) if body.trim().is_empty() => format!("request failed with status {}", status),
        Err(_) => body.trim().to_string(),
    };

    match status {
        404 => InterviewError::not_found(kind, id),
        409 => InterviewError::InvalidState(message),
        400 | 422 => InterviewError::InvalidInput(message),
        _ => InterviewError::Http { status, message },
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| InterviewError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn abort_controller() -> Result<AbortController> {
    AbortController::new()
        .map_err(|e| InterviewError::Network(format!("cannot create AbortController: {:?}", e)))
}

/// Resolve `fut`, or run `on_timeout` and fail with `Timeout(ms)` once
/// `deadline` completes first.
pub(crate) async fn race_deadline<T, F, D>(
    fut: F,
    deadline: D,
    ms: u64,
    on_timeout: impl FnOnce(),
) -> Result<T>
where
    F: Future<Output = Result<T>>,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(fut), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::warn!("Request timed out after {} ms, aborting", ms);
            on_timeout();
            Err(InterviewError::Timeout(ms))
        }
    }
}
