//! Trait abstractions for the interview's external collaborators
//!
//! These traits enable testing the runtime with mock implementations.

use crate::archive::{ArchiveError, CandidateRecord, JsonArchive};
use crate::llm::{LlmError, LlmRequest, LlmService};
use crate::prompt::build_clarifier_prompt;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Source of technical questions
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Raw newline-separated questions for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Produces a steering message for off-topic input
#[async_trait]
pub trait Clarifier: Send + Sync {
    /// `None` when nothing usable came back, whatever the reason
    async fn explain(&self, input: &str, context: &str) -> Option<String>;
}

/// Durable sink for anonymized interview summaries
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, record: CandidateRecord) -> Result<(), ArchiveError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: QuestionProvider + ?Sized> QuestionProvider for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).generate(prompt).await
    }
}

#[async_trait]
impl<T: Clarifier + ?Sized> Clarifier for Arc<T> {
    async fn explain(&self, input: &str, context: &str) -> Option<String> {
        (**self).explain(input, context).await
    }
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn append(&self, record: CandidateRecord) -> Result<(), ArchiveError> {
        (**self).append(record).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

const NO_LLM_MESSAGE: &str = "No LLM configured. Set GEMINI_API_KEY or LLM_GATEWAY.";

const CLARIFY_TIMEOUT: Duration = Duration::from_secs(15);
const CLARIFY_MAX_TOKENS: u32 = 300;

/// Question provider backed by an LLM completion
pub struct LlmQuestionProvider {
    llm: Option<Arc<dyn LlmService>>,
}

impl LlmQuestionProvider {
    pub fn new(llm: Option<Arc<dyn LlmService>>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionProvider for LlmQuestionProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let llm = self
            .llm
            .as_ref()
            .ok_or_else(|| LlmError::auth(NO_LLM_MESSAGE))?;
        let response = llm.complete(&LlmRequest::user(prompt)).await?;
        Ok(response.text)
    }
}

/// Clarifier backed by an LLM completion; failures and timeouts yield `None`
pub struct LlmClarifier {
    llm: Option<Arc<dyn LlmService>>,
    timeout: Duration,
}

impl LlmClarifier {
    pub fn new(llm: Option<Arc<dyn LlmService>>) -> Self {
        Self {
            llm,
            timeout: CLARIFY_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Clarifier for LlmClarifier {
    async fn explain(&self, input: &str, context: &str) -> Option<String> {
        let llm = self.llm.as_ref()?;
        let request =
            LlmRequest::user(build_clarifier_prompt(input, context)).with_max_tokens(CLARIFY_MAX_TOKENS);

        match timeout(self.timeout, llm.complete(&request)).await {
            Ok(Ok(response)) => {
                let text = response.text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e.message, "Clarifier LLM error");
                None
            }
            Err(_) => {
                tracing::warn!("Clarifier timed out");
                None
            }
        }
    }
}

#[async_trait]
impl RecordStore for JsonArchive {
    async fn append(&self, record: CandidateRecord) -> Result<(), ArchiveError> {
        JsonArchive::append(self, record).await
    }
}
