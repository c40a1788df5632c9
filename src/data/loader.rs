use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Question;

/// Error loading a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the file failed.
    Io(io::Error),
    /// The file is not valid question JSON.
    Parse(serde_json::Error),
    /// The parsed bank violates a bank invariant.
    Invalid(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read questions file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse questions file: {}", e),
            LoadError::Invalid(msg) => write!(f, "invalid question bank: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load and validate a question bank from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_questions(&json)
}

/// Parse and validate a question bank from a JSON string.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate_bank(&questions)?;
    Ok(questions)
}

fn validate_bank(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Invalid(
            "bank must contain at least one question".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for question in questions {
        if !seen_ids.insert(question.id) {
            return Err(LoadError::Invalid(format!(
                "duplicate question id {}",
                question.id
            )));
        }

        if question.options.is_empty() {
            return Err(LoadError::Invalid(format!(
                "question {} has no options",
                question.id
            )));
        }

        let unique_options: HashSet<&str> =
            question.options.iter().map(String::as_str).collect();
        if unique_options.len() != question.options.len() {
            return Err(LoadError::Invalid(format!(
                "question {} has duplicate options",
                question.id
            )));
        }

        if !question.options.iter().any(|o| o == &question.answer) {
            return Err(LoadError::Invalid(format!(
                "question {} answer does not match any option",
                question.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_bank() {
        let json = r#"[
            {
                "id": 1,
                "text": "Which planet is closest to the sun?",
                "options": ["Venus", "Mercury", "Mars"],
                "answer": "Mercury"
            }
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 1);
        assert!(questions[0].is_correct("Mercury"));
        assert!(!questions[0].is_correct("Venus"));
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let err = parse_questions("[]").unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_questions("not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_answer_must_match_an_option() {
        let json = r#"[
            {"id": 1, "text": "Pick one", "options": ["A", "B"], "answer": "C"}
        ]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 7, "text": "First", "options": ["A", "B"], "answer": "A"},
            {"id": 7, "text": "Second", "options": ["C", "D"], "answer": "D"}
        ]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_options_are_rejected() {
        let json = r#"[
            {"id": 1, "text": "Pick one", "options": ["A", "A"], "answer": "A"}
        ]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_question_without_options_is_rejected() {
        let json = r#"[
            {"id": 1, "text": "Pick one", "options": [], "answer": "A"}
        ]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }
}
