//! LLM configuration from the environment

use super::gemini::{GeminiService, DEFAULT_MODEL};
use super::{LlmService, LoggingService};
use std::sync::Arc;

/// Configuration for the Gemini backend
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    /// Model name, defaults to `gemini-1.5-flash`
    pub model: Option<String>,
    /// Gateway base URL; when set, the gateway handles authentication
    pub gateway: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL").ok(),
            gateway: std::env::var("LLM_GATEWAY").ok(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Build the logging-wrapped service, or `None` when no credentials exist
    pub fn build_service(&self) -> Option<Arc<dyn LlmService>> {
        // In gateway mode, use "implicit" as the API key
        let api_key = if self.gateway.is_some() {
            "implicit".to_string()
        } else {
            self.gemini_api_key
                .clone()
                .filter(|key| !key.is_empty())?
        };

        match GeminiService::new(api_key, self.model_name(), self.gateway.as_deref()) {
            Ok(service) => Some(Arc::new(LoggingService::new(Arc::new(service)))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Gemini client");
                None
            }
        }
    }
}
