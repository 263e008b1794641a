//! Pick the interview backend from configuration.
//!
//! `use_mock_data` → in-memory mock seeded with sample data,
//! otherwise → REST client against `api.base_url`.

use std::rc::Rc;
use interview_core::event_bus::EventBus;
use interview_core::mock::MockInterviewApi;
use interview_core::ports::InterviewApi;
use interview_types::{Result, config::AppConfig};
use crate::http::HttpInterviewApi;
use crate::storage::MemoryStorage;

/// Build the configured backend.
/// Returns a trait object so callers are backend-agnostic.
pub async fn connect(config: &AppConfig, event_bus: EventBus) -> Result<Rc<dyn InterviewApi>> {
    config.validate()?;

    if config.use_mock_data {
        log::info!("Interview backend: mock (in-memory)");
        let storage = Rc::new(MemoryStorage::new());
        let api = MockInterviewApi::with_sample_data(storage, &config.session, event_bus).await?;
        Ok(Rc::new(api))
    } else {
        log::info!(
            "Interview backend: {} (timeout {}ms)",
            config.api.base_url,
            config.api.timeout_ms
        );
        Ok(Rc::new(HttpInterviewApi::new(&config.api, event_bus)))
    }
}
