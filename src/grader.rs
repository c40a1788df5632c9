//! Pure scoring for a submitted assessment.
//!
//! Grading is a single pass over the bank in order. A question with no
//! selection is a valid state, not an error: it is left out of the answer
//! record and never counts as correct.

use std::collections::{BTreeMap, HashMap};

use crate::models::Question;

/// Lookup for the candidate's currently selected option per question.
///
/// Returning `None` means the question was left unanswered.
pub trait SelectionLookup {
    fn selected_option(&self, question_id: u32) -> Option<&str>;
}

impl SelectionLookup for BTreeMap<u32, String> {
    fn selected_option(&self, question_id: u32) -> Option<&str> {
        self.get(&question_id).map(String::as_str)
    }
}

impl SelectionLookup for HashMap<u32, String> {
    fn selected_option(&self, question_id: u32) -> Option<&str> {
        self.get(&question_id).map(String::as_str)
    }
}

/// Outcome of grading one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    /// Percentage in `[0, 100]`, full precision.
    pub score: f64,
    /// Number of correctly answered questions.
    pub correct: usize,
    /// Number of questions in the bank.
    pub total: usize,
    /// Question id to the option the candidate picked. Unanswered questions
    /// have no entry.
    pub answers: BTreeMap<u32, String>,
}

impl GradeOutcome {
    /// The score rendered with two decimal places, for display only.
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Grade a submission against the question bank.
///
/// Selections are compared by exact string equality against each question's
/// recorded answer. An empty bank grades to a score of 0 rather than
/// dividing by zero.
pub fn grade(questions: &[Question], selections: &impl SelectionLookup) -> GradeOutcome {
    let mut answers = BTreeMap::new();
    let mut correct = 0;

    for question in questions {
        if let Some(selected) = selections.selected_option(question.id) {
            answers.insert(question.id, selected.to_string());
            if question.is_correct(selected) {
                correct += 1;
            }
        }
    }

    let total = questions.len();
    let score = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    GradeOutcome {
        score,
        correct,
        total,
        answers,
    }
}
