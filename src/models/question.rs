use serde::Deserialize;

/// A single multiple-choice question.
///
/// The correct answer is stored as the option text itself, so grading is a
/// verbatim string comparison against one of `options`.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    /// Whether the given option text is this question's correct answer.
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}
