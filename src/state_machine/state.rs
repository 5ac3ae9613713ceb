//! Interview session state types

use serde::{Deserialize, Serialize};

/// Number of technical questions asked in one interview
pub const INTERVIEW_LENGTH: u32 = 5;

/// Upper bound on questions kept from a provider response
pub const MAX_QUESTIONS: usize = 10;

// ============================================================================
// Candidate Profile
// ============================================================================

/// A profile field, in collection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
}

impl ProfileField {
    /// All fields in the order they are asked for
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Experience,
        ProfileField::Position,
        ProfileField::Location,
        ProfileField::TechStack,
    ];

    /// 1-based collection step
    pub fn step(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .map_or(0, |idx| idx + 1)
    }

    /// The field collected after this one, if any
    pub fn next(self) -> Option<ProfileField> {
        Self::ALL.get(self.step()).copied()
    }

    #[cfg(test)]
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Experience => "experience",
            ProfileField::Position => "position",
            ProfileField::Location => "location",
            ProfileField::TechStack => "tech_stack",
        }
    }
}

/// Candidate details collected before the technical phase.
///
/// Fields are only ever set or overwritten, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
}

impl CandidateProfile {
    fn slot(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Experience => &mut self.experience,
            ProfileField::Position => &mut self.position,
            ProfileField::Location => &mut self.location,
            ProfileField::TechStack => &mut self.tech_stack,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Experience => &self.experience,
            ProfileField::Position => &self.position,
            ProfileField::Location => &self.location,
            ProfileField::TechStack => &self.tech_stack,
        };
        value.as_deref()
    }

    /// Field value, or an empty string when not yet collected
    pub fn value(&self, field: ProfileField) -> &str {
        self.get(field).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        ProfileField::ALL.iter().all(|f| self.get(*f).is_some())
    }
}

// ============================================================================
// Question Set
// ============================================================================

/// Technical questions for one interview, fixed once generated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<String>);

impl QuestionSet {
    /// Build from a raw provider response: one question per non-blank line,
    /// keeping at most `max` entries.
    pub fn from_response(text: &str, max: usize) -> Self {
        Self(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .take(max)
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ============================================================================
// Transcript
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub message: String,
}

/// A question the candidate chose to skip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedQuestion {
    pub number: u32,
    pub question: String,
}

// ============================================================================
// Session State
// ============================================================================

/// Where the interview currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Phase {
    /// Session created, welcome not yet shown
    #[default]
    Greeting,

    /// Waiting for the answer to one profile field
    CollectingProfile { field: ProfileField },

    /// Profile complete, question generation in flight or failed
    GeneratingQuestions,

    /// A technical question is on screen
    Interviewing,

    /// Candidate asked to skip; waiting for yes/no
    AwaitingSkipConfirmation,

    /// Interview over (finished or exited)
    Completed,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Greeting => "greeting",
            Phase::CollectingProfile { .. } => "collecting_profile",
            Phase::GeneratingQuestions => "generating_questions",
            Phase::Interviewing => "interviewing",
            Phase::AwaitingSkipConfirmation => "awaiting_skip_confirmation",
            Phase::Completed => "completed",
        }
    }
}

/// All mutable state for one candidate conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub profile: CandidateProfile,
    pub questions: QuestionSet,
    /// 1-based number shown to the candidate; 0 before the interview starts
    pub current_question_number: u32,
    /// Index into `questions`; always `current_question_number - 1` once started
    pub question_index: usize,
    pub skipped_questions: Vec<SkippedQuestion>,
    pub transcript: Vec<TranscriptEntry>,
    /// Transcript length when the technical interview began
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_started_at: Option<usize>,
    pub active: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Greeting,
            profile: CandidateProfile::default(),
            questions: QuestionSet::default(),
            current_question_number: 0,
            question_index: 0,
            skipped_questions: Vec::new(),
            transcript: Vec::new(),
            interview_started_at: None,
            active: true,
        }
    }

    /// Question currently on screen
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.question_index)
    }

    /// User messages sent since the technical interview began
    pub fn interview_responses(&self) -> Vec<String> {
        let start = self.interview_started_at.unwrap_or(self.transcript.len());
        self.transcript
            .iter()
            .skip(start)
            .filter(|entry| entry.speaker == Speaker::User)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub(crate) fn record(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            message: message.into(),
        });
    }
}

/// Per-session configuration (immutable)
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    /// Questions asked before the interview ends
    pub interview_length: u32,
    /// Cap applied when building the question set
    pub max_questions: usize,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            interview_length: INTERVIEW_LENGTH,
            max_questions: MAX_QUESTIONS,
        }
    }

    /// Questions actually asked for a given question set
    pub fn effective_length(&self, questions: &QuestionSet) -> u32 {
        let available = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        self.interview_length.min(available)
    }
}
