// src/models/result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    models::{answer::Answer, question::Question, user::UserInfo},
    quiz::scorer,
};

/// Outcome of one test session. Built once at submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub user_info: UserInfo,
    pub score: u32,
    /// Number of questions presented, answered or not.
    pub total_questions: u32,
    pub answers: Vec<Answer>,
    pub questions: Vec<Question>,
}

impl TestResult {
    pub fn percentage(&self) -> f64 {
        scorer::percentage(self.score, self.total_questions)
    }
}

/// A persisted result together with its storage identifier.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: TestResult,
}

/// Per-question correctness line on the result view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    /// 1-based position in the question set.
    pub number: usize,
    pub question_id: i64,
    pub question: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// What the result page shows.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub user_info: UserInfo,
    pub score: u32,
    pub total_questions: u32,
    /// Percentage with two decimals, e.g. "66.67".
    pub percentage: String,
    pub review: Vec<QuestionReview>,
}

impl From<&TestResult> for ResultView {
    fn from(result: &TestResult) -> Self {
        Self {
            user_info: result.user_info.clone(),
            score: result.score,
            total_questions: result.total_questions,
            percentage: scorer::format_percentage(result.percentage()),
            review: scorer::review(&result.questions, &result.answers),
        }
    }
}

/// Admin listing row: the stored record plus its rendered view.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResultEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub view: ResultView,
}

impl From<&StoredResult> for AdminResultEntry {
    fn from(stored: &StoredResult) -> Self {
        Self {
            id: stored.id,
            created_at: stored.created_at,
            view: ResultView::from(&stored.result),
        }
    }
}

/// Response to a submission (manual or the final state of an automatic one).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub result: ResultView,
    /// Whether the result reached storage.
    pub persisted: bool,
    /// Non-blocking message for the user when persistence failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
