// src/questions.rs

//! Where the question set comes from. Fetched once per test session.

use std::{collections::HashSet, fmt, path::PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::models::question::Question;

#[derive(Debug)]
pub enum QuestionSourceError {
    Io(String),
    Malformed(String),
}

impl fmt::Display for QuestionSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSourceError::Io(msg) => write!(f, "could not read questions: {}", msg),
            QuestionSourceError::Malformed(msg) => write!(f, "malformed question set: {}", msg),
        }
    }
}

impl std::error::Error for QuestionSourceError {}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

/// Reads a JSON array of questions from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| QuestionSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        parse_questions(&raw)
    }
}

/// Fixed in-memory question set.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.questions.clone())
    }
}

/// Parses a question set. The document must be a JSON array and ids must be unique.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, QuestionSourceError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;

    if !value.is_array() {
        return Err(QuestionSourceError::Malformed(
            "fetched data is not an array".to_string(),
        ));
    }

    let questions: Vec<Question> =
        serde_json::from_value(value).map_err(|e| QuestionSourceError::Malformed(e.to_string()))?;

    let mut seen = HashSet::new();
    for q in &questions {
        if !seen.insert(q.id) {
            return Err(QuestionSourceError::Malformed(format!(
                "duplicate question id {}",
                q.id
            )));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_with_optional_image() {
        let raw = r#"[
            {"id": 1, "question": "2 + 2?", "options": ["3", "4"], "answer": "4"},
            {"id": 2, "question": "Capital?", "options": ["A", "B"], "answer": "B", "image": "/assets/map.png"}
        ]"#;
        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].image, None);
        assert_eq!(questions[1].image.as_deref(), Some("/assets/map.png"));
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_questions(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Malformed(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[
            {"id": 1, "question": "a", "options": ["x"], "answer": "x"},
            {"id": 1, "question": "b", "options": ["y"], "answer": "y"}
        ]"#;
        assert!(parse_questions(raw).is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = FileQuestionSource::new("/definitely/not/here/questions.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, QuestionSourceError::Io(_)));
    }
}
