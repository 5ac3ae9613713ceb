//! API request and response types

use crate::archive::CandidateRecord;
use crate::runtime::Reply;
use crate::state_machine::SessionState;
use serde::{Deserialize, Serialize};

/// Candidate input, typed or a quick-reply selection
#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub text: String,
}

/// Response for a newly opened session
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub replies: Vec<Reply>,
}

/// Response for one turn of input
#[derive(Debug, Serialize)]
pub struct InputResponse {
    pub replies: Vec<Reply>,
    pub phase: &'static str,
    pub question_number: u32,
    pub active: bool,
    /// Question generation failure detail, for display alongside the replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full session state for transcript replay
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub state: SessionState,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
