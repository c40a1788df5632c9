mod question;

pub use question::Question;

/// Candidate identifier shown when none is supplied.
pub const DEFAULT_CANDIDATE_ID: &str = "DEMO_USER";

/// Which screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}

/// Everything one assessment session needs, passed in explicitly.
///
/// The candidate identifier is opaque display data (it arrives from the
/// outside world, e.g. an invitation token) and is never validated.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub candidate_id: String,
    pub questions: Vec<Question>,
}

impl AssessmentConfig {
    pub fn new(candidate_id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            questions,
        }
    }
}
