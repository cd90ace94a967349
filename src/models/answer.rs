// src/models/answer.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The option a user picked for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub answer: String,
}

impl Answer {
    pub fn new(question_id: i64, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}
