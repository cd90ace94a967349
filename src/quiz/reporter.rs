// src/quiz/reporter.rs

use std::sync::Arc;

use crate::{
    models::{answer::Answer, question::Question, result::TestResult, user::UserInfo},
    store::ResultStore,
};

pub const SAVE_FAILED_NOTICE: &str = "Failed to save your test results. Please try again.";

/// A built result and what happened when it was persisted.
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: TestResult,
    pub persisted: bool,
    pub notice: Option<String>,
}

/// Persists results best-effort. The result is always handed back, stored or not.
#[derive(Clone)]
pub struct ResultReporter {
    store: Arc<dyn ResultStore>,
}

impl ResultReporter {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        user_info: UserInfo,
        score: u32,
        total_questions: u32,
        answers: Vec<Answer>,
        questions: Vec<Question>,
    ) -> Submission {
        let result = TestResult {
            user_info,
            score,
            total_questions,
            answers,
            questions,
        };

        match self.store.save_result(&result).await {
            Ok(stored) => {
                tracing::info!(
                    "Saved result {} ({}/{})",
                    stored.id,
                    result.score,
                    result.total_questions
                );
                Submission {
                    result,
                    persisted: true,
                    notice: None,
                }
            }
            Err(e) => {
                tracing::error!("Error saving test result: {}", e);
                Submission {
                    result,
                    persisted: false,
                    notice: Some(SAVE_FAILED_NOTICE.to_string()),
                }
            }
        }
    }
}
