//! Turn executor: runs the pure transition and carries out its effects

use super::traits::{Clarifier, QuestionProvider, RecordStore};
use crate::archive::CandidateRecord;
use crate::state_machine::state::{Phase, Speaker};
use crate::state_machine::{transition, Effect, Event, SessionContext, SessionState, TransitionError};
use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;

/// One message for the shell to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub speaker: Speaker,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
}

impl Reply {
    fn assistant(message: String, quick_replies: Vec<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            message,
            quick_replies: (!quick_replies.is_empty()).then_some(quick_replies),
        }
    }
}

/// Everything a single turn produced
#[derive(Debug, Clone, Default)]
pub struct TurnOutcome {
    pub replies: Vec<Reply>,
    /// Set when question generation failed during this turn
    pub generation_error: Option<String>,
    /// Session status once the turn committed
    pub phase: Phase,
    pub question_number: u32,
    pub active: bool,
}

#[cfg(test)]
impl TurnOutcome {
    pub fn messages(&self) -> Vec<&str> {
        self.replies.iter().map(|r| r.message.as_str()).collect()
    }
}

/// Generic interview runtime that can work with any collaborator implementations
pub struct InterviewRuntime<Q, C, R>
where
    Q: QuestionProvider,
    C: Clarifier,
    R: RecordStore,
{
    questions: Q,
    clarifier: C,
    store: R,
}

impl<Q, C, R> InterviewRuntime<Q, C, R>
where
    Q: QuestionProvider,
    C: Clarifier,
    R: RecordStore,
{
    pub fn new(questions: Q, clarifier: C, store: R) -> Self {
        Self {
            questions,
            clarifier,
            store,
        }
    }

    /// Process one input event to completion.
    ///
    /// Collaborator results are fed back as follow-up events within the same
    /// turn. `state` is only updated if every transition succeeded.
    pub async fn run_turn(
        &self,
        context: &SessionContext,
        state: &mut SessionState,
        event: Event,
    ) -> Result<TurnOutcome, TransitionError> {
        let mut working = state.clone();
        let mut pending = VecDeque::from([event]);
        let mut outcome = TurnOutcome::default();

        while let Some(event) = pending.pop_front() {
            let result = transition(&working, context, event)?;
            working = result.new_state;
            for effect in result.effects {
                if let Some(follow_up) = self.execute_effect(context, effect, &mut outcome).await {
                    pending.push_back(follow_up);
                }
            }
        }

        tracing::debug!(
            session_id = %context.session_id,
            phase = working.phase.name(),
            question = working.current_question_number,
            replies = outcome.replies.len(),
            "Turn complete"
        );

        outcome.phase = working.phase;
        outcome.question_number = working.current_question_number;
        outcome.active = working.active;
        *state = working;
        Ok(outcome)
    }

    async fn execute_effect(
        &self,
        context: &SessionContext,
        effect: Effect,
        outcome: &mut TurnOutcome,
    ) -> Option<Event> {
        match effect {
            Effect::Say {
                message,
                quick_replies,
            } => {
                outcome.replies.push(Reply::assistant(message, quick_replies));
                None
            }

            Effect::GenerateQuestions { prompt } => match self.questions.generate(&prompt).await {
                Ok(text) => {
                    tracing::info!(session_id = %context.session_id, "Technical questions generated");
                    Some(Event::QuestionsGenerated { text })
                }
                Err(e) => {
                    tracing::warn!(
                        session_id = %context.session_id,
                        error = %e,
                        "Question generation failed"
                    );
                    outcome.generation_error = Some(e.to_string());
                    Some(Event::GenerationFailed)
                }
            },

            Effect::RequestClarification { input, context: interview } => {
                let explanation = self.clarifier.explain(&input, &interview).await;
                Some(Event::ClarificationReceived { explanation })
            }

            // Best-effort: the closing messages go out regardless
            Effect::PersistRecord { profile, responses } => {
                let record = CandidateRecord::anonymize(&profile, responses, Utc::now());
                if let Err(e) = self.store.append(record).await {
                    tracing::warn!(
                        session_id = %context.session_id,
                        error = %e,
                        "Failed to archive candidate record"
                    );
                }
                None
            }
        }
    }
}
