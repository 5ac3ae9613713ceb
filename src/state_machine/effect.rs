//! Effects produced by state transitions

use super::state::CandidateProfile;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show an assistant message, optionally with quick-reply buttons
    Say {
        message: String,
        quick_replies: Vec<String>,
    },

    /// Ask the question provider for technical questions
    GenerateQuestions { prompt: String },

    /// Ask the clarifier to respond to an off-topic input
    RequestClarification { input: String, context: String },

    /// Append the anonymized interview summary to the archive
    PersistRecord {
        profile: CandidateProfile,
        responses: Vec<String>,
    },
}

impl Effect {
    pub fn say(message: impl Into<String>) -> Self {
        Effect::Say {
            message: message.into(),
            quick_replies: vec![],
        }
    }

    pub fn say_with_replies(message: impl Into<String>, replies: &[&str]) -> Self {
        Effect::Say {
            message: message.into(),
            quick_replies: replies.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    /// Message text if this is a `Say` effect
    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        match self {
            Effect::Say { message, .. } => Some(message),
            _ => None,
        }
    }
}
