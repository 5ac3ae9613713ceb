//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary input sequences.

use super::script;
use super::state::*;
use super::transition::*;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> SessionContext {
    SessionContext::new("test-session")
}

fn questions_text(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Question text {i}?"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply(state: &SessionState, event: Event) -> TransitionResult {
    transition(state, &test_context(), event).expect("valid transition")
}

/// Feed an input and resolve any clarification request inline
fn apply_input(state: &SessionState, text: &str) -> TransitionResult {
    let result = apply(state, Event::user_input(text));
    let wants_clarification = result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::RequestClarification { .. }));
    if wants_clarification {
        apply(&result.new_state, Event::ClarificationReceived { explanation: None })
    } else {
        result
    }
}

fn interviewing_state(question_count: usize) -> SessionState {
    let mut state = apply(&SessionState::new(), Event::Start).new_state;
    for answer in ["Ann", "ann@example.com", "1", "2 years", "SRE", "Oslo", "Go"] {
        state = apply(&state, Event::user_input(answer)).new_state;
    }
    apply(
        &state,
        Event::QuestionsGenerated {
            text: questions_text(question_count),
        },
    )
    .new_state
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Profile answers that can never contain an exit word
fn arb_field_answer() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,8}[0-9]{1,3}".prop_map(String::from)
}

fn arb_interview_input() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{2,10}[0-9]".prop_map(String::from),
        1 => Just("skip".to_string()),
        1 => Just("I don't know".to_string()),
        1 => Just("yes".to_string()),
        1 => Just("No, continue".to_string()),
        1 => Just("??".to_string()),
        1 => Just("x".to_string()),
    ]
}

fn arb_provider_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[A-Za-z ?]{1,30}".prop_map(String::from),
            Just(String::new()),
            Just("   ".to_string()),
        ],
        0..30,
    )
    .prop_map(|lines| lines.join("\n"))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_profile_answers_fill_fields_in_order(answers in proptest::collection::vec(arb_field_answer(), 7)) {
        let mut state = apply(&SessionState::new(), Event::Start).new_state;
        let mut generation_requests = 0;

        for (i, answer) in answers.iter().enumerate() {
            let result = apply(&state, Event::user_input(answer.clone()));
            generation_requests += result
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::GenerateQuestions { .. }))
                .count();
            state = result.new_state;

            let expect_generating = i == answers.len() - 1;
            prop_assert_eq!(state.phase == Phase::GeneratingQuestions, expect_generating);
        }

        prop_assert_eq!(generation_requests, 1);
        for (field, answer) in ProfileField::ALL.iter().zip(&answers) {
            prop_assert_eq!(state.profile.get(*field), Some(answer.as_str()));
        }
    }

    #[test]
    fn prop_question_set_bounded_and_blank_free(text in arb_provider_text()) {
        let questions = QuestionSet::from_response(&text, MAX_QUESTIONS);
        prop_assert!(questions.len() <= MAX_QUESTIONS);
        prop_assert!(questions.iter().all(|q| !q.trim().is_empty()));
    }

    #[test]
    fn prop_counters_stay_in_lockstep(
        question_count in 1usize..12,
        inputs in proptest::collection::vec(arb_interview_input(), 0..40),
    ) {
        let mut state = interviewing_state(question_count);

        for text in &inputs {
            let before = state.clone();
            let result = apply_input(&state, text);
            state = result.new_state;

            prop_assert!(!result.effects.is_empty(), "every turn says something");

            match state.phase {
                Phase::Interviewing | Phase::AwaitingSkipConfirmation => {
                    prop_assert_eq!(
                        state.current_question_number as usize,
                        state.question_index + 1
                    );
                    prop_assert!(state.current_question_number <= INTERVIEW_LENGTH);
                }
                Phase::Completed => {
                    prop_assert!(!state.active);
                    prop_assert!(state.current_question_number <= INTERVIEW_LENGTH + 1);
                }
                other => prop_assert!(false, "unexpected phase {:?}", other),
            }

            // Skipped entries only ever reference questions already shown
            for skipped in &state.skipped_questions {
                prop_assert!(skipped.number < state.current_question_number);
                let shown = state.questions.get(skipped.number as usize - 1);
                prop_assert_eq!(Some(skipped.question.as_str()), shown);
            }
            prop_assert!(state.skipped_questions.len() >= before.skipped_questions.len());
        }
    }

    #[test]
    fn prop_declined_skip_changes_nothing(answered in 0usize..4) {
        let mut state = interviewing_state(MAX_QUESTIONS);
        for _ in 0..answered {
            state = apply_input(&state, "answer1").new_state;
        }
        let before = state.clone();
        let shown_before = script::question(
            before.current_question_number,
            before.current_question().unwrap_or_default(),
        );

        let asked = apply_input(&state, "skip").new_state;
        let declined = apply_input(&asked, "No, continue");

        prop_assert_eq!(declined.new_state.current_question_number, before.current_question_number);
        prop_assert_eq!(declined.new_state.question_index, before.question_index);
        prop_assert_eq!(&declined.new_state.skipped_questions, &before.skipped_questions);
        prop_assert_eq!(declined.messages(), vec![shown_before.as_str()]);
    }

    #[test]
    fn prop_unexpected_input_reshows_current_question(
        answered in 0usize..4,
        junk in prop_oneof![Just(String::new()), "[!?#*.]{1,6}", "[a-z]"],
    ) {
        let mut state = interviewing_state(MAX_QUESTIONS);
        for _ in 0..answered {
            state = apply_input(&state, "answer1").new_state;
        }
        let before = state.clone();

        let result = apply_input(&state, &junk);
        prop_assert_eq!(result.new_state.phase, Phase::Interviewing);
        prop_assert_eq!(result.new_state.current_question_number, before.current_question_number);
        prop_assert_eq!(result.new_state.question_index, before.question_index);

        let expected = script::question(
            before.current_question_number,
            before.current_question().unwrap_or_default(),
        );
        prop_assert_eq!(result.messages().last().copied(), Some(expected.as_str()));
    }

    #[test]
    fn prop_exit_ends_any_active_phase(steps in 0usize..10) {
        let mut state = apply(&SessionState::new(), Event::Start).new_state;
        let answers = ["Ann", "ann@example.com", "1", "2 years", "SRE", "Oslo", "Go"];
        for answer in answers.iter().take(steps.min(answers.len())) {
            state = apply(&state, Event::user_input(*answer)).new_state;
        }

        let result = apply(&state, Event::user_input("quit"));
        prop_assert!(!result.new_state.active);
        prop_assert_eq!(result.new_state.phase, Phase::Completed);
        prop_assert_eq!(result.messages(), vec![script::FAREWELL]);
    }
}
