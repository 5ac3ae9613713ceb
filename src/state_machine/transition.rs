//! Pure state transition function
//!
//! Covers profile collection, the hand-off to question generation, the
//! technical interview (skip confirmation, off-topic recovery) and the
//! closing sequence. All I/O is requested through effects.

use super::script;
use super::state::{
    Phase, ProfileField, QuestionSet, SessionContext, SessionState, SkippedQuestion, Speaker,
};
use super::{Effect, Event};
use crate::classifier::{classify, Category};
use crate::prompt::{build_candidate_prompt, interview_context};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Emit an assistant message and record it in the transcript
    pub fn say(self, message: impl Into<String>) -> Self {
        self.say_with_replies(message, &[])
    }

    pub fn say_with_replies(mut self, message: impl Into<String>, replies: &[&str]) -> Self {
        let message = message.into();
        self.new_state.record(Speaker::Assistant, message.clone());
        self.effects.push(Effect::say_with_replies(message, replies));
        self
    }

    /// Text of every `Say` effect, in order
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.effects.iter().filter_map(Effect::message).collect()
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs; external
/// calls are requested via [`Effect`] and their results come back as events.
pub fn transition(
    state: &SessionState,
    context: &SessionContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state.phase, event) {
        (Phase::Greeting, Event::Start) => {
            let mut next = state.clone();
            next.phase = Phase::CollectingProfile {
                field: ProfileField::Name,
            };
            Ok(TransitionResult::new(next)
                .say_with_replies(script::WELCOME, script::WELCOME_REPLIES))
        }

        // Finished sessions acknowledge input and change nothing
        (_, Event::UserInput { .. }) if !state.active => Ok(TransitionResult::new(state.clone())
            .with_effect(Effect::say(script::ALREADY_COMPLETED))),

        (phase, Event::UserInput { text }) if phase != Phase::Greeting => {
            handle_input(state, context, text)
        }

        (Phase::GeneratingQuestions, Event::QuestionsGenerated { text }) => {
            let questions = QuestionSet::from_response(&text, context.max_questions);
            if questions.is_empty() {
                return Ok(generation_failed(state));
            }
            Ok(start_interview(state, questions))
        }

        (Phase::GeneratingQuestions, Event::GenerationFailed) => Ok(generation_failed(state)),

        // Clarification, then the same question again with counters untouched
        (Phase::Interviewing, Event::ClarificationReceived { explanation }) => {
            let message = explanation
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map_or_else(|| script::NOT_UNDERSTOOD.to_string(), script::clarification);
            let question = current_question_message(state);
            Ok(TransitionResult::new(state.clone())
                .say(message)
                .say(question))
        }

        (phase, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {phase:?} with event {event:?}"
        ))),
    }
}

fn handle_input(
    state: &SessionState,
    context: &SessionContext,
    text: String,
) -> Result<TransitionResult, TransitionError> {
    let category = classify(&text, state.phase);
    let mut next = state.clone();
    next.record(Speaker::User, text.clone());

    if category == Category::Exit {
        next.phase = Phase::Completed;
        next.active = false;
        return Ok(TransitionResult::new(next).say(script::FAREWELL));
    }

    let result = match (state.phase, category) {
        (Phase::CollectingProfile { field }, _) => collect_field(next, field, text),

        // Re-submitted tech stack after a failed generation
        (Phase::GeneratingQuestions, _) => {
            next.profile.set(ProfileField::TechStack, text);
            request_questions(next)
        }

        (Phase::Interviewing, Category::SkipRequest) => {
            next.phase = Phase::AwaitingSkipConfirmation;
            TransitionResult::new(next).say_with_replies(script::SKIP_CONFIRM, script::SKIP_REPLIES)
        }

        (Phase::Interviewing, Category::Unexpected) => {
            let context = interview_context(&next.profile);
            TransitionResult::new(next).with_effect(Effect::RequestClarification {
                input: text,
                context,
            })
        }

        (Phase::Interviewing, _) => advance(TransitionResult::new(next), context),

        (Phase::AwaitingSkipConfirmation, Category::ConfirmYes) => {
            let skipped = SkippedQuestion {
                number: next.current_question_number,
                question: next.current_question().unwrap_or_default().to_string(),
            };
            next.skipped_questions.push(skipped);
            next.phase = Phase::Interviewing;
            advance(TransitionResult::new(next).say(script::MOVING_ON), context)
        }

        (Phase::AwaitingSkipConfirmation, _) => {
            next.phase = Phase::Interviewing;
            let question = current_question_message(&next);
            TransitionResult::new(next).say(question)
        }

        (phase @ (Phase::Greeting | Phase::Completed), _) => {
            return Err(TransitionError::InvalidTransition(format!(
                "No input expected in {phase:?}"
            )));
        }
    };

    Ok(result)
}

fn collect_field(mut next: SessionState, field: ProfileField, value: String) -> TransitionResult {
    next.profile.set(field, value);
    match field.next() {
        Some(following) => {
            next.phase = Phase::CollectingProfile { field: following };
            TransitionResult::new(next).say_with_replies(
                script::field_prompt(following),
                script::field_replies(following),
            )
        }
        None => request_questions(next),
    }
}

fn request_questions(mut next: SessionState) -> TransitionResult {
    next.phase = Phase::GeneratingQuestions;
    let prompt = build_candidate_prompt(&next.profile);
    TransitionResult::new(next).with_effect(Effect::GenerateQuestions { prompt })
}

fn generation_failed(state: &SessionState) -> TransitionResult {
    TransitionResult::new(state.clone()).say(script::GENERATION_FAILED)
}

fn start_interview(state: &SessionState, questions: QuestionSet) -> TransitionResult {
    let mut next = state.clone();
    next.questions = questions;
    next.current_question_number = 1;
    next.question_index = 0;
    next.interview_started_at = Some(next.transcript.len());
    next.phase = Phase::Interviewing;

    let first = current_question_message(&next);
    TransitionResult::new(next)
        .say(script::INTERVIEW_START)
        .say(first)
}

/// Move both counters forward together, then ask the next question or wrap up
fn advance(mut result: TransitionResult, context: &SessionContext) -> TransitionResult {
    let state = &mut result.new_state;
    state.current_question_number += 1;
    state.question_index += 1;

    if state.current_question_number <= context.effective_length(&state.questions) {
        let question = current_question_message(state);
        result.say(question)
    } else {
        finish_interview(result)
    }
}

fn finish_interview(mut result: TransitionResult) -> TransitionResult {
    let skipped = result.new_state.skipped_questions.len();
    if skipped > 0 {
        result = result.say(script::skipped_note(skipped));
    }

    let profile = result.new_state.profile.clone();
    let responses = result.new_state.interview_responses();
    result.new_state.phase = Phase::Completed;
    result.new_state.active = false;

    result
        .with_effect(Effect::PersistRecord { profile, responses })
        .say(script::CLOSING_THANKS)
        .say(script::CLOSING_NEXT_STEPS)
}

fn current_question_message(state: &SessionState) -> String {
    script::question(
        state.current_question_number,
        state.current_question().unwrap_or_default(),
    )
}
