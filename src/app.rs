use std::collections::BTreeMap;

use crate::grader::{self, GradeOutcome};
use crate::models::{AppState, AssessmentConfig, Question};

/// State for one candidate's assessment session.
///
/// All session data lives here, built from the config passed in. Selections
/// are kept as option indices per question; the id-to-option answer record
/// is only materialized at submission and discarded on restart.
pub struct App {
    pub state: AppState,
    config: AssessmentConfig,
    current_question_index: usize,
    highlighted_option: usize,
    selections: Vec<Option<usize>>,
    outcome: Option<GradeOutcome>,
    result_scroll: usize,
}

impl App {
    pub fn new(config: AssessmentConfig) -> Self {
        let num_questions = config.questions.len();

        Self {
            state: AppState::Welcome,
            config,
            current_question_index: 0,
            highlighted_option: 0,
            selections: vec![None; num_questions],
            outcome: None,
            result_scroll: 0,
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.config.candidate_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.config.questions
    }

    pub fn current_question(&self) -> &Question {
        &self.config.questions[self.current_question_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.config.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn outcome(&self) -> Option<&GradeOutcome> {
        self.outcome.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_question().options.len();
        self.highlighted_option = (self.highlighted_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_question().options.len();
        self.highlighted_option = (self.highlighted_option + count - 1) % count;
    }

    /// Leave the welcome screen. An empty bank has nothing to ask, so it
    /// submits immediately and grades to zero.
    pub fn start(&mut self) {
        if self.config.questions.is_empty() {
            self.submit();
        } else {
            self.state = AppState::Quiz;
        }
    }

    /// Record the highlighted option for the current question and move on.
    pub fn confirm_selection(&mut self) {
        self.selections[self.current_question_index] = Some(self.highlighted_option);
        self.advance();
    }

    /// Move on without recording a selection. Unanswered is a valid state.
    pub fn skip_question(&mut self) {
        self.selections[self.current_question_index] = None;
        self.advance();
    }

    /// Submit now, leaving the remaining questions unanswered.
    pub fn finish_early(&mut self) {
        self.submit();
    }

    fn advance(&mut self) {
        self.highlighted_option = 0;

        if self.current_question_index + 1 >= self.config.questions.len() {
            self.submit();
        } else {
            self.current_question_index += 1;
        }
    }

    fn submit(&mut self) {
        let record = self.answer_record();
        self.outcome = Some(grader::grade(&self.config.questions, &record));
        self.state = AppState::Result;
    }

    /// The transient answer record: question id to the chosen option text.
    /// Questions without a selection have no entry.
    pub fn answer_record(&self) -> BTreeMap<u32, String> {
        self.selections
            .iter()
            .zip(self.config.questions.iter())
            .filter_map(|(selection, question)| {
                selection.map(|index| (question.id, question.options[index].clone()))
            })
            .collect()
    }

    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.highlighted_option = 0;
        self.selections = vec![None; self.config.questions.len()];
        self.outcome = None;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.total_questions() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_questions;

    fn new_app() -> App {
        App::new(AssessmentConfig::new("CAND-42", builtin_questions()))
    }

    fn highlight_correct_option(app: &mut App) {
        let question = app.current_question();
        let correct = question
            .options
            .iter()
            .position(|o| o == &question.answer)
            .unwrap();
        for _ in 0..correct {
            app.select_next_option();
        }
    }

    #[test]
    fn test_answering_everything_correctly_scores_100() {
        let mut app = new_app();
        app.start();

        while app.state == AppState::Quiz {
            highlight_correct_option(&mut app);
            app.confirm_selection();
        }

        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.score, 100.0);
        assert_eq!(outcome.answers.len(), 3);
    }

    #[test]
    fn test_skipping_everything_scores_zero() {
        let mut app = new_app();
        app.start();

        app.skip_question();
        app.skip_question();
        app.skip_question();

        assert_eq!(app.state, AppState::Result);
        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.score, 0.0);
        assert!(outcome.answers.is_empty());
    }

    #[test]
    fn test_finish_early_leaves_remaining_unanswered() {
        let mut app = new_app();
        app.start();

        // First option of question 1 is "O(n)", which is wrong.
        app.confirm_selection();
        app.finish_early();

        assert_eq!(app.state, AppState::Result);
        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.answers.len(), 1);
        assert_eq!(outcome.correct, 0);
    }

    #[test]
    fn test_answer_record_maps_ids_to_option_text() {
        let mut app = new_app();
        app.start();

        app.select_next_option();
        app.confirm_selection();

        let record = app.answer_record();
        assert_eq!(record.get(&1).map(String::as_str), Some("O(log n)"));
        assert!(!record.contains_key(&2));
    }

    #[test]
    fn test_restart_discards_selections_and_outcome() {
        let mut app = new_app();
        app.start();
        app.confirm_selection();
        app.finish_early();
        assert!(app.outcome().is_some());

        app.restart();

        assert_eq!(app.state, AppState::Welcome);
        assert!(app.outcome().is_none());
        assert!(app.answer_record().is_empty());
        assert_eq!(app.answered_count(), 0);
    }

    #[test]
    fn test_empty_bank_submits_immediately_with_zero_score() {
        let mut app = App::new(AssessmentConfig::new("CAND-42", Vec::new()));
        app.start();

        assert_eq!(app.state, AppState::Result);
        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.total, 0);
    }

    #[test]
    fn test_option_highlight_wraps_both_ways() {
        let mut app = new_app();
        app.start();

        app.select_previous_option();
        assert_eq!(app.highlighted_option(), 3);
        app.select_next_option();
        assert_eq!(app.highlighted_option(), 0);
    }

    #[test]
    fn test_resubmitting_same_selections_is_idempotent() {
        let mut app = new_app();
        app.start();
        highlight_correct_option(&mut app);
        app.confirm_selection();
        app.finish_early();
        let first = app.outcome().unwrap().clone();

        // Grade again from the same recorded selections.
        let second = grader::grade(app.questions(), &app.answer_record());
        assert_eq!(first, second);
    }
}
