//! Events that drive an interview session

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// First turn of a new session
    Start,

    /// Typed text or a selected quick reply
    UserInput { text: String },

    // Question provider events
    QuestionsGenerated {
        /// Raw provider output, one question per line
        text: String,
    },
    GenerationFailed,

    // Clarifier events
    ClarificationReceived {
        /// `None` when the clarifier had nothing usable
        explanation: Option<String>,
    },
}

impl Event {
    pub fn user_input(text: impl Into<String>) -> Self {
        Event::UserInput { text: text.into() }
    }
}
