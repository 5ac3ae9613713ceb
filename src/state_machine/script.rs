//! Fixed assistant wording used by the transition function

use super::state::ProfileField;

pub const WELCOME: &str = "**Hi! I'm TalentScout, your intelligent hiring assistant.**\n\n\
Thank you for taking the time to speak with us today.\n\n\
I'll help gather your candidate information and conduct a technical interview.\n\n\
You can type 'exit', 'quit', or 'bye' to end the chat anytime.\n\n\
Let's begin. What's your **full name**?";

pub const WELCOME_REPLIES: &[&str] = &["Ready to begin!", "I have questions first"];

pub const EXPERIENCE_REPLIES: &[&str] = &["0-2 years", "3-5 years", "5+ years"];

pub const FAREWELL: &str = "That concludes our discussion. Our team will now review your \
responses and be in touch shortly with the next steps. We appreciate your interest in the \
opportunity and wish you the very best. Have a great day!";

pub const INTERVIEW_START: &str =
    "**Technical Interview Starting**\n\nI'll ask you questions one by one. Take your time!";

pub const GENERATION_FAILED: &str = "Sorry, I couldn't prepare your technical questions just now. \
Please send your **tech stack** again to retry.";

pub const SKIP_CONFIRM: &str = "Are you sure you want to skip this question?";

pub const SKIP_REPLIES: &[&str] = &["Yes, skip", "No, continue"];

pub const MOVING_ON: &str = "Moving to next question...";

pub const NOT_UNDERSTOOD: &str =
    "Sorry, I didn't quite understand that. Could you try rephrasing?";

pub const CLOSING_THANKS: &str = "**Thank you for taking the time to speak with us today.**\n\n\
It's been a pleasure learning more about your background and experience.";

pub const CLOSING_NEXT_STEPS: &str = "**That concludes our discussion.**\n\n\
Our team will now review your responses and be in touch shortly with next steps.\n\n\
We appreciate your interest in the opportunity and wish you the very best.\nHave a great day!";

pub const ALREADY_COMPLETED: &str = "Interview completed. Thank you!";

/// Prompt shown when asking for a profile field (name is asked in the welcome)
pub fn field_prompt(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Name => "What's your **full name**?",
        ProfileField::Email => "Thanks! What's your **email address**?",
        ProfileField::Phone => "Great. Please share your **phone number**.",
        ProfileField::Experience => "How many **years of experience** do you have?",
        ProfileField::Position => "What **position(s)** are you applying for?",
        ProfileField::Location => "Where are you **currently located**?",
        ProfileField::TechStack => "What is your **tech stack**? (e.g., Python, React, MySQL)",
    }
}

pub fn field_replies(field: ProfileField) -> &'static [&'static str] {
    match field {
        ProfileField::Experience => EXPERIENCE_REPLIES,
        _ => &[],
    }
}

pub fn question(number: u32, text: &str) -> String {
    format!("**Question {number}:**\n\n{text}")
}

pub fn clarification(explanation: &str) -> String {
    format!("\u{21a9}\u{fe0f} {explanation}")
}

pub fn skipped_note(count: usize) -> String {
    let noun = if count == 1 { "question was" } else { "questions were" };
    format!("Note: {count} {noun} skipped")
}
