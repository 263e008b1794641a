use serde::{Deserialize, Serialize};

use crate::{InterviewError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TURN_LIMIT: usize = 8;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Serve everything from the in-memory mock backend
    pub use_mock_data: bool,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            use_mock_data: true,
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)
            .map_err(|e| InterviewError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.use_mock_data {
            let url = self.api.base_url.trim();
            if url.is_empty() {
                return Err(InterviewError::Config("api.base_url is empty".to_string()));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(InterviewError::Config(format!(
                    "api.base_url must be an http(s) URL, got {}",
                    url
                )));
            }
        }
        if self.api.timeout_ms == 0 {
            return Err(InterviewError::Config("api.timeout_ms must be positive".to_string()));
        }
        if self.session.turn_limit == 0 {
            return Err(InterviewError::Config("session.turn_limit must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// User turns after which a session completes on its own
    pub turn_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
        }
    }
}
