//! JS-facing client. Every call returns a Promise that resolves to plain
//! JSON-shaped objects, or rejects with an `Error` whose `name` is the
//! error kind (`NotFound`, `InvalidState`, `InvalidInput`, ...).

use std::future::Future;
use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use js_sys::Promise;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use interview_core::event_bus::EventBus;
use interview_core::ports::InterviewApi;
use interview_platform::connect as connect_backend;
use interview_types::{
    InterviewError,
    chat::SendMessageRequest,
    config::AppConfig,
    evaluation::SubmitEvaluationRequest,
    interview::CreateInterviewRequest,
    query::ListQuery,
};

#[wasm_bindgen]
pub struct InterviewClient {
    api: Rc<dyn InterviewApi>,
    event_bus: EventBus,
}

#[wasm_bindgen]
impl InterviewClient {
    /// Build a client. `config_json` may be partial; omitted fields default.
    pub fn connect(config_json: Option<String>) -> Promise {
        future_to_promise(async move {
            let config = match config_json {
                Some(json) => AppConfig::from_json(&json).map_err(to_js_error)?,
                None => AppConfig::default(),
            };
            let event_bus = EventBus::new();
            let api = connect_backend(&config, event_bus.clone()).await.map_err(to_js_error)?;
            Ok(JsValue::from(InterviewClient { api, event_bus }))
        })
    }

    #[wasm_bindgen(getter, js_name = backendName)]
    pub fn backend_name(&self) -> String {
        self.api.backend_name().to_string()
    }

    #[wasm_bindgen(js_name = createInterview)]
    pub fn create_interview(&self, request: JsValue) -> Promise {
        let api = self.api.clone();
        respond(async move {
            let req: CreateInterviewRequest = from_js(&request)?;
            api.create_interview(req).await
        })
    }

    /// `query` may be `undefined` to list everything.
    #[wasm_bindgen(js_name = listInterviews)]
    pub fn list_interviews(&self, query: JsValue) -> Promise {
        let api = self.api.clone();
        respond(async move {
            let query: ListQuery = if query.is_undefined() || query.is_null() {
                ListQuery::default()
            } else {
                from_js(&query)?
            };
            api.list_interviews(query).await
        })
    }

    #[wasm_bindgen(js_name = getInterview)]
    pub fn get_interview(&self, id: String) -> Promise {
        let api = self.api.clone();
        respond(async move { api.get_interview(&id).await })
    }

    #[wasm_bindgen(js_name = submitEvaluation)]
    pub fn submit_evaluation(&self, request: JsValue) -> Promise {
        let api = self.api.clone();
        respond(async move {
            let req: SubmitEvaluationRequest = from_js(&request)?;
            api.submit_evaluation(req).await
        })
    }

    #[wasm_bindgen(js_name = getEvaluation)]
    pub fn get_evaluation(&self, id: String) -> Promise {
        let api = self.api.clone();
        respond(async move { api.get_evaluation(&id).await })
    }

    #[wasm_bindgen(js_name = startChatSession)]
    pub fn start_chat_session(&self, interview_id: String) -> Promise {
        let api = self.api.clone();
        respond(async move { api.start_chat_session(&interview_id).await })
    }

    #[wasm_bindgen(js_name = sendMessage)]
    pub fn send_message(&self, session_id: String, request: JsValue) -> Promise {
        let api = self.api.clone();
        respond(async move {
            let req: SendMessageRequest = from_js(&request)?;
            api.send_message(&session_id, req).await
        })
    }

    #[wasm_bindgen(js_name = getChatSession)]
    pub fn get_chat_session(&self, session_id: String) -> Promise {
        let api = self.api.clone();
        respond(async move { api.get_chat_session(&session_id).await })
    }

    #[wasm_bindgen(js_name = endChatSession)]
    pub fn end_chat_session(&self, session_id: String) -> Promise {
        let api = self.api.clone();
        respond(async move { api.end_chat_session(&session_id).await })
    }

    /// Pending session events, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.event_bus.drain())
            .map_err(|e| to_js_error(InterviewError::from(e)))
    }
}

/// Run `fut` as a Promise, serializing its output to a JS value.
fn respond<T, F>(fut: F) -> Promise
where
    T: Serialize,
    F: Future<Output = interview_types::Result<T>> + 'static,
{
    future_to_promise(async move {
        let value = fut.await.map_err(to_js_error)?;
        JsValue::from_serde(&value).map_err(|e| to_js_error(InterviewError::from(e)))
    })
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> interview_types::Result<T> {
    value
        .into_serde()
        .map_err(|e| InterviewError::InvalidInput(format!("malformed request: {}", e)))
}

fn to_js_error(e: InterviewError) -> JsValue {
    let err = js_sys::Error::new(&e.to_string());
    err.set_name(error_name(&e));
    err.into()
}

/// Stable name of an error kind, used as the JS `Error.name`.
pub(crate) fn error_name(e: &InterviewError) -> &'static str {
    match e {
        InterviewError::NotFound { .. } => "NotFound",
        InterviewError::InvalidState(_) => "InvalidState",
        InterviewError::InvalidInput(_) => "InvalidInput",
        InterviewError::Storage(_) => "StorageError",
        InterviewError::Serialization(_) => "SerializationError",
        InterviewError::Network(_) => "NetworkError",
        InterviewError::Http { .. } => "HttpError",
        InterviewError::Timeout(_) => "TimeoutError",
        InterviewError::Config(_) => "ConfigError",
    }
}
