// src/models/session.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{answer::Answer, question::PublicQuestion};

/// Shown while the question set could not be fetched.
pub const QUESTIONS_LOADING_MESSAGE: &str = "Loading questions... If this message persists, there was an error fetching the questions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    Submitted,
}

/// Snapshot of a running (or finished) test as the test page renders it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestView {
    pub session_id: Uuid,
    pub candidate: String,
    pub status: SessionStatus,
    pub time_left_secs: u32,
    /// `M:SS`
    pub time_left: String,
    pub total_questions: usize,
    pub questions: Vec<PublicQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `PUT /api/sessions/{id}/answers`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAnswerRequest {
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswersResponse {
    pub answers: Vec<Answer>,
}
