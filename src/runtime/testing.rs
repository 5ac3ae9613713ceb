//! Mock implementations for testing
//!
//! These mocks enable exercising the runtime and HTTP layer without real I/O.

use super::traits::*;
use crate::archive::{ArchiveError, CandidateRecord};
use crate::llm::{LlmError, LlmRequest, LlmResponse, LlmService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Newline-separated questions as a provider would return them
pub fn sample_questions(count: usize) -> String {
    (1..=count)
        .map(|i| format!("{i}. Sample technical question {i}?"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Mock Question Provider
// ============================================================================

/// Question provider that returns queued responses
pub struct MockQuestionProvider {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    /// Record of all prompts received
    pub prompts: Mutex<Vec<String>>,
}

impl MockQuestionProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_questions(self, text: impl Into<String>) -> Self {
        self.queue_questions(text);
        self
    }

    pub fn queue_questions(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockQuestionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionProvider for MockQuestionProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock questions queued")))
    }
}

// ============================================================================
// Mock Clarifier
// ============================================================================

/// Clarifier with a fixed answer
pub struct MockClarifier {
    reply: Option<String>,
    /// Record of (input, context) pairs
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockClarifier {
    pub fn new(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clarifier for MockClarifier {
    async fn explain(&self, input: &str, context: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_string(), context.to_string()));
        self.reply.clone()
    }
}

// ============================================================================
// In-memory Record Store
// ============================================================================

/// Record store keeping everything in memory, optionally failing every append
pub struct MemoryRecordStore {
    records: Mutex<Vec<CandidateRecord>>,
    fail: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn records(&self) -> Vec<CandidateRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append(&self, record: CandidateRecord) -> Result<(), ArchiveError> {
        if self.fail {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only archive",
            )));
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

// ============================================================================
// Scripted LLM service
// ============================================================================

/// LLM service returning queued responses, with an optional delay
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    requests: Mutex<Vec<LlmRequest>>,
    delay: Option<Duration>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queue_response(&self, response: LlmResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for ScriptedLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmService for ScriptedLlm {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_question_provider() {
        let provider = MockQuestionProvider::new().with_questions(sample_questions(2));
        assert_eq!(
            provider.generate("p").await.unwrap(),
            "1. Sample technical question 1?\n2. Sample technical question 2?"
        );
        // Second call should fail (nothing queued)
        assert!(provider.generate("p").await.is_err());
        assert_eq!(provider.recorded_prompts(), vec!["p".to_string(); 2]);
    }

    #[tokio::test]
    async fn test_memory_record_store() {
        let store = MemoryRecordStore::failing();
        let record = CandidateRecord {
            id: "id".to_string(),
            timestamp: chrono::Utc::now(),
            experience: String::new(),
            position: String::new(),
            location: String::new(),
            tech_stack: String::new(),
            responses: vec![],
        };
        assert!(store.append(record).await.is_err());
        assert!(store.records().is_empty());
    }
}
