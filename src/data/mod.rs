mod loader;

pub use loader::{LoadError, load_questions_from_json, parse_questions};

use crate::models::Question;

/// The bank used when no questions file is supplied.
///
/// Fixed at load time and immutable for the session, like any other bank.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "What is the time complexity of binary search?".to_string(),
            options: vec![
                "O(n)".to_string(),
                "O(log n)".to_string(),
                "O(n^2)".to_string(),
                "O(1)".to_string(),
            ],
            answer: "O(log n)".to_string(),
        },
        Question {
            id: 2,
            text: "Which data structure uses LIFO?".to_string(),
            options: vec![
                "Queue".to_string(),
                "Stack".to_string(),
                "Tree".to_string(),
                "Graph".to_string(),
            ],
            answer: "Stack".to_string(),
        },
        Question {
            id: 3,
            text: "What does SQL stand for?".to_string(),
            options: vec![
                "Structured Query Key".to_string(),
                "Structured Query Language".to_string(),
                "Simple Query Language".to_string(),
                "Strong Question Language".to_string(),
            ],
            answer: "Structured Query Language".to_string(),
        },
    ]
}
