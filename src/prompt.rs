//! Prompt construction for the question provider and the clarifier
//!
//! Both prompts are deterministic functions of the candidate profile (and,
//! for the clarifier, the input being clarified).

use crate::state_machine::state::{CandidateProfile, ProfileField};
use std::fmt::Write;

/// Profile lines shown to the question provider, in fixed order
const PROFILE_LABELS: [(ProfileField, &str); 7] = [
    (ProfileField::Name, "Full Name"),
    (ProfileField::Email, "Email"),
    (ProfileField::Phone, "Phone"),
    (ProfileField::Experience, "Years of Experience"),
    (ProfileField::Position, "Desired Position"),
    (ProfileField::Location, "Current Location"),
    (ProfileField::TechStack, "Tech Stack"),
];

const CANDIDATE_PREAMBLE: &str =
    "You are an intelligent hiring assistant for a tech recruitment agency.";

const CANDIDATE_TASK: &str = r"Your task:
1. Analyze the tech stack and generate 3-5 technical questions tailored to the listed technologies.
2. Ensure each question assesses the candidate's depth of understanding and practical skills.
3. Avoid generic questions. Keep them relevant to their mentioned skills (e.g., Python, Django, MySQL).

Output only the questions in a clear numbered list.";

const CLARIFIER_PREAMBLE: &str =
    "You are TalentScout, an intelligent hiring assistant helping conduct technical interviews.";

const CLARIFIER_TASK: &str = r"This input seems unclear or off-topic.
Politely prompt the candidate to clarify or rephrase, while keeping the interview focused.
Avoid deviating from the technical interview purpose.";

/// Prompt asking for technical questions tailored to the candidate
pub fn build_candidate_prompt(profile: &CandidateProfile) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "{CANDIDATE_PREAMBLE}\n");
    let _ = writeln!(prompt, "Candidate Profile:");
    for (field, label) in PROFILE_LABELS {
        let _ = writeln!(prompt, "- {label}: {}", profile.value(field));
    }
    let _ = write!(prompt, "\n{CANDIDATE_TASK}");
    prompt
}

/// Role and stack summary handed to the clarifier
pub fn interview_context(profile: &CandidateProfile) -> String {
    let position = profile.get(ProfileField::Position).unwrap_or("software");
    let tech_stack = profile.value(ProfileField::TechStack);
    format!("Technical interview for a {position} role. Candidate tech stack: {tech_stack}.")
}

/// Prompt asking the clarifier to steer an off-topic answer back
pub fn build_clarifier_prompt(user_input: &str, context: &str) -> String {
    format!(
        "{CLARIFIER_PREAMBLE}\n\nA candidate has responded with: '{user_input}'\nContext: {context}\n\n{CLARIFIER_TASK}"
    )
}
