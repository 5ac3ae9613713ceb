//! Heuristic classification of candidate input
//!
//! No language understanding here: keyword lists plus a couple of shape
//! checks, evaluated against the phase the session is in.

use crate::state_machine::state::Phase;

/// Words that end the conversation from any active phase
const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye", "stop", "end"];

/// Phrases that request skipping the current question
const SKIP_KEYWORDS: &[&str] = &["skip", "don't know", "not sure", "pass"];

/// Answers accepted as "yes" to the skip confirmation, including the
/// confirmation prompt's own quick reply
const CONFIRM_KEYWORDS: &[&str] = &["yes", "y", "confirm", "yes, skip"];

/// Minimum trimmed length of a meaningful interview answer
const MIN_ANSWER_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Exit,
    SkipRequest,
    ConfirmYes,
    ConfirmNo,
    Unexpected,
    Normal,
}

/// Classify raw input for the given phase.
///
/// Exit wins everywhere. During skip confirmation every other input is a
/// yes or a no. Skip requests and off-topic detection only apply while a
/// question is on screen.
pub fn classify(raw: &str, phase: Phase) -> Category {
    let folded = normalize(raw);

    if is_exit(&folded) {
        return Category::Exit;
    }

    match phase {
        Phase::AwaitingSkipConfirmation => {
            if CONFIRM_KEYWORDS.contains(&folded.trim()) {
                Category::ConfirmYes
            } else {
                Category::ConfirmNo
            }
        }
        Phase::Interviewing => {
            if SKIP_KEYWORDS.iter().any(|k| folded.contains(k)) {
                Category::SkipRequest
            } else if is_unexpected(raw) {
                Category::Unexpected
            } else {
                Category::Normal
            }
        }
        _ => Category::Normal,
    }
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('\u{2019}', "'")
}

/// Exit keywords must appear as whole words ("Backend" is not "end")
fn is_exit(folded: &str) -> bool {
    folded
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| EXIT_KEYWORDS.contains(&word))
}

/// Too short to be an answer, or nothing but symbols.
///
/// Letters and digits from any script count as content.
fn is_unexpected(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_ANSWER_CHARS {
        return true;
    }
    trimmed
        .chars()
        .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
