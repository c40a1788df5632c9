//! # candidate-assessment
//!
//! A terminal-based multiple-choice assessment for screening candidates.
//!
//! A fixed question bank is presented one question at a time; the candidate
//! picks an option per question (or leaves it unanswered) and receives a
//! percentage score on submission. Grading itself is a pure function over
//! the bank and the recorded selections, independent of any rendering.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use candidate_assessment::{Assessment, AssessmentConfig, AssessmentError, builtin_questions};
//!
//! fn main() -> Result<(), AssessmentError> {
//!     let config = AssessmentConfig::new("DEMO_USER", builtin_questions());
//!
//!     // Run the assessment in the terminal; the outcome is returned once
//!     // the candidate has submitted.
//!     if let Some(outcome) = Assessment::new(config).run()? {
//!         println!("score: {}%", outcome.display_score());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod grader;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{LoadError, builtin_questions, load_questions_from_json, parse_questions};
pub use grader::{GradeOutcome, SelectionLookup, grade};
pub use models::{AppState, AssessmentConfig, DEFAULT_CANDIDATE_ID, Question};

/// Error type for assessment operations.
#[derive(Debug)]
pub enum AssessmentError {
    /// Error loading the question bank.
    Load(LoadError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentError::Load(e) => write!(f, "Failed to load questions: {}", e),
            AssessmentError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AssessmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssessmentError::Load(e) => Some(e),
            AssessmentError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for AssessmentError {
    fn from(err: LoadError) -> Self {
        AssessmentError::Load(err)
    }
}

impl From<io::Error> for AssessmentError {
    fn from(err: io::Error) -> Self {
        AssessmentError::Io(err)
    }
}

/// An assessment session that can be run in the terminal.
pub struct Assessment {
    app: App,
}

impl Assessment {
    /// Create an assessment from an explicit configuration.
    pub fn new(config: AssessmentConfig) -> Self {
        Self {
            app: App::new(config),
        }
    }

    /// Create an assessment with a question bank loaded from a JSON file.
    pub fn from_json<P: AsRef<Path>>(
        candidate_id: impl Into<String>,
        path: P,
    ) -> Result<Self, AssessmentError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(AssessmentConfig::new(candidate_id, questions)))
    }

    /// Run the assessment in the terminal.
    ///
    /// Takes over the terminal until the candidate quits. Returns the graded
    /// outcome of the last submission, or `None` if the candidate quit
    /// without submitting.
    pub fn run(mut self) -> Result<Option<GradeOutcome>, AssessmentError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result?;

        Ok(self.app.outcome().cloned())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::AssessmentTerminal,
    app: &mut App,
) -> Result<(), AssessmentError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm_selection();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.skip_question();
            false
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.finish_early();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_app() -> App {
        let mut app = App::new(AssessmentConfig::new("CAND-1", builtin_questions()));
        app.start();
        app
    }

    #[test]
    fn test_enter_starts_the_assessment() {
        let mut app = App::new(AssessmentConfig::new("CAND-1", builtin_questions()));
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn test_skip_key_leaves_question_unanswered() {
        let mut app = started_app();
        assert!(!handle_input(&mut app, KeyCode::Char('s')));
        assert_eq!(app.answered_count(), 0);
        assert_eq!(app.current_question_number(), 2);
    }

    #[test]
    fn test_finish_key_submits_from_mid_quiz() {
        let mut app = started_app();
        assert!(!handle_input(&mut app, KeyCode::Char('f')));
        assert_eq!(app.state, AppState::Result);
        assert!(app.outcome().is_some());
    }

    #[test]
    fn test_quit_key_exits_from_every_state() {
        let mut app = App::new(AssessmentConfig::new("CAND-1", builtin_questions()));
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        app.start();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        app.finish_early();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
