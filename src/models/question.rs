// src/models/question.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A multiple-choice question as it appears in the static question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Unique within a question set.
    pub id: i64,

    /// The text of the question.
    pub question: String,

    /// Options in display order.
    pub options: Vec<String>,

    /// The correct option, compared by exact string match.
    pub answer: String,

    /// Optional image shown behind the question card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Question sent to a client while the test is running (no answer key).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// The option currently selected in this session, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl Question {
    pub fn to_public(&self, selected: Option<String>) -> PublicQuestion {
        PublicQuestion {
            id: self.id,
            question: self.question.clone(),
            options: self.options.clone(),
            image: self.image.clone(),
            selected,
        }
    }
}
